use ratatui::layout::Position;

use crate::tui::targets::{self, TargetRegistry};

/// Typed gesture events fed into the drag state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Begin { item_id: String, at: Position },
    Update(Position),
    End(Position),
    Cancel,
}

/// Terminal result of a drag, reported exactly once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    Dropped { item_id: String, location_id: String },
    Cancelled,
}

/// State machine for one in-progress item drag.
///
/// Idle until a `Begin`, then tracks the pointer and the hovered drop target
/// on every movement sample until an `End` or `Cancel` resolves the session
/// back to idle. Events that do not apply in the current state are ignored.
#[derive(Debug)]
pub enum DragSession {
    Idle,
    Dragging {
        item_id: String,
        /// Pointer position at `Begin`, fixed for the session.
        origin: Position,
        pointer: Position,
        hovered: Option<String>,
    },
}

impl DragSession {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    /// Item being dragged, if a session is active.
    pub fn item_id(&self) -> Option<&str> {
        match self {
            DragSession::Dragging { item_id, .. } => Some(item_id),
            DragSession::Idle => None,
        }
    }

    /// Drop target currently under the pointer, if any.
    pub fn hovered(&self) -> Option<&str> {
        match self {
            DragSession::Dragging { hovered, .. } => hovered.as_deref(),
            DragSession::Idle => None,
        }
    }

    pub fn pointer(&self) -> Option<Position> {
        match self {
            DragSession::Dragging { pointer, .. } => Some(*pointer),
            DragSession::Idle => None,
        }
    }

    pub fn origin(&self) -> Option<Position> {
        match self {
            DragSession::Dragging { origin, .. } => Some(*origin),
            DragSession::Idle => None,
        }
    }

    /// Feed one gesture event through the machine. Returns the session's
    /// outcome when the event resolves it, `None` while it stays in flight.
    ///
    /// The drop target is decided by a final hit test at the release point,
    /// not by the last hovered value.
    pub fn apply(&mut self, event: DragEvent, targets: &TargetRegistry) -> Option<DragOutcome> {
        match (std::mem::replace(self, DragSession::Idle), event) {
            (DragSession::Idle, DragEvent::Begin { item_id, at }) => {
                *self = DragSession::Dragging {
                    item_id,
                    origin: at,
                    pointer: at,
                    hovered: targets::locate(at, targets).map(str::to_string),
                };
                None
            }
            (DragSession::Dragging { item_id, origin, .. }, DragEvent::Update(at)) => {
                *self = DragSession::Dragging {
                    item_id,
                    origin,
                    pointer: at,
                    hovered: targets::locate(at, targets).map(str::to_string),
                };
                None
            }
            (DragSession::Dragging { item_id, .. }, DragEvent::End(at)) => {
                match targets::locate(at, targets) {
                    Some(location_id) => Some(DragOutcome::Dropped {
                        item_id,
                        location_id: location_id.to_string(),
                    }),
                    None => Some(DragOutcome::Cancelled),
                }
            }
            (DragSession::Dragging { .. }, DragEvent::Cancel) => Some(DragOutcome::Cancelled),
            (state, _) => {
                // Begin mid-drag, or Update/End/Cancel while idle
                *self = state;
                None
            }
        }
    }
}
