use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Events sent from the file watcher to the TUI event loop.
#[derive(Debug)]
pub enum FileEvent {
    /// One or more store files changed on disk.
    Changed(Vec<PathBuf>),
}

/// A file system watcher for the store directory.
pub struct StoreWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<FileEvent>,
}

impl StoreWatcher {
    /// Start watching the given store directory.
    /// Returns a `StoreWatcher` whose `poll()` method should be called each tick.
    pub fn start(store_dir: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let store_dir_owned = store_dir.to_path_buf();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };

                // We only care about creates, modifications, and removes of
                // the two data files; our own lock, state, and log files churn
                // on every save and must not trigger reloads.
                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
                    _ => return,
                }

                let relevant: Vec<PathBuf> = event
                    .paths
                    .into_iter()
                    .filter(|p| {
                        if !p.starts_with(&store_dir_owned) {
                            return false;
                        }
                        matches!(
                            p.file_name().and_then(|n| n.to_str()),
                            Some("locations.json") | Some("items.json")
                        )
                    })
                    .collect();

                if !relevant.is_empty() {
                    let _ = tx.send(FileEvent::Changed(relevant));
                }
            },
            Config::default(),
        )?;

        watcher.watch(store_dir, RecursiveMode::NonRecursive)?;
        Ok(StoreWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking poll for pending file events.
    /// Returns all queued events (may be empty).
    pub fn poll(&self) -> Vec<FileEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.rx.try_recv() {
            events.push(evt);
        }
        events
    }
}
