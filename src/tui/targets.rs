use indexmap::IndexMap;
use ratatui::layout::{Position, Rect};

/// Drop-target rectangles keyed by location id, in chip render order.
///
/// The render pass rebuilds the registry every frame (`clear` then one
/// `update` per visible chip), so iteration order always matches what is on
/// screen and removed locations never leave stale targets behind.
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    rects: IndexMap<String, Rect>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the rectangle for a location. Last write wins;
    /// replacing an id keeps its original position in iteration order.
    pub fn update(&mut self, location_id: impl Into<String>, rect: Rect) {
        self.rects.insert(location_id.into(), rect);
    }

    /// Snapshot of the current mapping in registration order.
    pub fn all(&self) -> Vec<(String, Rect)> {
        self.rects
            .iter()
            .map(|(id, rect)| (id.clone(), *rect))
            .collect()
    }

    /// Drop entries whose location id no longer passes `keep`.
    pub fn prune(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.rects.retain(|id, _| keep(id));
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Map a pointer position to the location whose drop target contains it.
///
/// Containment is inclusive on all four edges, unlike `Rect::contains`
/// which excludes the right and bottom edges. When targets overlap, the
/// first registered one wins.
pub fn locate(point: Position, registry: &TargetRegistry) -> Option<&str> {
    registry
        .rects
        .iter()
        .find(|(_, rect)| contains_inclusive(**rect, point))
        .map(|(id, _)| id.as_str())
}

fn contains_inclusive(rect: Rect, point: Position) -> bool {
    // u32 arithmetic so x + width cannot wrap near u16::MAX
    let (px, py) = (u32::from(point.x), u32::from(point.y));
    px >= u32::from(rect.x)
        && px <= u32::from(rect.x) + u32::from(rect.width)
        && py >= u32::from(rect.y)
        && py <= u32::from(rect.y) + u32::from(rect.height)
}
