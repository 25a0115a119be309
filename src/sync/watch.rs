use std::path::Path;
use std::sync::mpsc;

use notify::event::{AccessKind, AccessMode, CreateKind, ModifyKind, RenameMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info, warn};

use super::{IndexError, Indexer, discover};
use crate::store::TrackStore;

/// The filesystem changes the watch loop reacts to.
///
/// Removal events are deliberately absent: an accidental delete must not
/// take catalog metadata with it. Repair scans pick up anything missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchKind {
    /// A file appeared under the collection root.
    Created,
    /// A writer finished and closed the file.
    WriteClosed,
    /// A file was moved into (or within) the collection root.
    MovedIn,
}

impl WatchKind {
    /// Map a notify event to the closed set of kinds the loop handles.
    pub fn classify(kind: &EventKind) -> Option<Self> {
        match kind {
            EventKind::Create(CreateKind::File | CreateKind::Any) => Some(Self::Created),
            EventKind::Access(AccessKind::Close(AccessMode::Write)) => Some(Self::WriteClosed),
            EventKind::Modify(ModifyKind::Name(RenameMode::To)) => Some(Self::MovedIn),
            _ => None,
        }
    }
}

impl<S: TrackStore> Indexer<S> {
    /// Watch the collection root and apply changes as they happen.
    ///
    /// Runs until the process exits. Only subscription setup can fail;
    /// per-event failures are logged and the loop keeps draining.
    pub fn watch(&mut self) -> Result<(), IndexError> {
        let (tx, rx) = mpsc::sync_channel::<notify::Result<Event>>(1);

        let mut watcher = RecommendedWatcher::new(
            move |event: notify::Result<Event>| {
                // A full queue blocks the notifier thread until the loop
                // catches up; the notifier's own buffer absorbs, or
                // drops, the burst.
                let _ = tx.send(event);
            },
            Config::default(),
        )?;
        watcher.watch(&self.settings.root, RecursiveMode::Recursive)?;

        info!(root = %self.settings.root.display(), "watching collection");

        for received in rx {
            let event = match received {
                Ok(event) => event,
                Err(error) => {
                    warn!(%error, "watch notification error");
                    continue;
                }
            };

            let Some(kind) = WatchKind::classify(&event.kind) else {
                continue;
            };

            for path in &event.paths {
                if !discover::is_track_file(path, &self.settings.extensions) {
                    continue;
                }

                debug!(path = %path.display(), ?kind, "collection event");

                match self.apply_event(kind, path) {
                    Ok(()) => {}
                    Err(IndexError::AlreadyIndexed { hash, .. }) => {
                        info!(path = %path.display(), %hash, "track already indexed");
                    }
                    Err(error) => {
                        warn!(path = %path.display(), %error, "failed to index track");
                    }
                }
            }
        }

        Ok(())
    }

    /// Build the candidate for `path` and run the handler for `kind`.
    ///
    /// Unlike the full scan, this dispatches straight off the event kind:
    /// a write-completed event issues its update even when the content
    /// did not actually change.
    pub(super) fn apply_event(&mut self, kind: WatchKind, path: &Path) -> Result<(), IndexError> {
        let candidate = self.builder.build(path)?;

        match kind {
            WatchKind::Created => self.track_added(&candidate)?,
            WatchKind::MovedIn => self.track_moved(&candidate)?,
            WatchKind::WriteClosed => self.track_modified(&candidate)?,
        }

        self.run_processors(&candidate);
        Ok(())
    }
}
