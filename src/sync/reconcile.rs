use tracing::debug;

use super::{IndexError, IndexedTrack, Indexer};
use crate::store::TrackStore;

/// How a candidate track relates to the catalog's prior state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Hash and path both known: nothing happened.
    Unchanged,
    /// Same path, new content: the file was edited in place.
    Modified,
    /// Same content, new path: the file was renamed or moved.
    Moved,
    /// Neither known: a new arrival.
    Added,
}

impl Reconciliation {
    /// Whether this outcome wrote to the catalog.
    pub fn mutated(self) -> bool {
        !matches!(self, Reconciliation::Unchanged)
    }
}

impl<S: TrackStore> Indexer<S> {
    /// Classify `candidate` against the catalog and apply the matching
    /// mutation.
    ///
    /// Content hash is the durable identity, path the observable
    /// location; two existence queries decide everything, no field diff
    /// is needed. A file that was both moved and edited since the last
    /// pass matches neither axis and is inserted as new; the old record
    /// stays in place as a dangling entry for external maintenance.
    pub fn reconcile(&mut self, candidate: &IndexedTrack) -> Result<Reconciliation, IndexError> {
        let track = &candidate.track;
        let known_hash = self.store.count_by_hash(&track.file_hash)? != 0;
        let known_path = self.store.count_by_path(&track.file_path)? != 0;

        let outcome = match (known_hash, known_path) {
            (true, true) => Reconciliation::Unchanged,
            (false, true) => {
                self.store.update_by_path(&track.file_path, track)?;
                Reconciliation::Modified
            }
            (true, false) => {
                self.store.update_by_hash(&track.file_hash, track)?;
                Reconciliation::Moved
            }
            (false, false) => {
                self.store.insert(track)?;
                Reconciliation::Added
            }
        };

        debug!(path = %track.file_path, ?outcome, "reconciled track");
        Ok(outcome)
    }

    /// Insert a newly seen track, reporting [`IndexError::AlreadyIndexed`]
    /// when the catalog already holds its content hash.
    pub fn track_added(&mut self, candidate: &IndexedTrack) -> Result<(), IndexError> {
        let track = &candidate.track;

        if self.store.count_by_hash(&track.file_hash)? != 0 {
            return Err(IndexError::AlreadyIndexed {
                path: track.file_path.clone(),
                hash: track.file_hash.clone(),
            });
        }

        self.store.insert(track)?;
        Ok(())
    }

    /// Rewrite the record at the candidate's path after an in-place edit.
    pub fn track_modified(&mut self, candidate: &IndexedTrack) -> Result<(), IndexError> {
        let track = &candidate.track;
        self.store.update_by_path(&track.file_path, track)?;
        Ok(())
    }

    /// Re-point the record with the candidate's content hash at its new
    /// path.
    pub fn track_moved(&mut self, candidate: &IndexedTrack) -> Result<(), IndexError> {
        let track = &candidate.track;
        self.store.update_by_hash(&track.file_hash, track)?;
        Ok(())
    }
}
