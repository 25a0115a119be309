//! Collection synchronization engine.
//!
//! Keeps the track catalog in line with the collection folder: a full
//! scan pass reconciles every file on disk against the catalog, and a
//! watch loop applies filesystem events as they happen. Records are
//! never deleted here, so an accidental file removal cannot take its
//! metadata with it.

mod build;
mod discover;
mod reconcile;
mod scan;
mod watch;

pub use build::{BuildError, TrackBuilder};
pub use reconcile::Reconciliation;
pub use scan::ScanSummary;
pub use watch::WatchKind;


use thiserror::Error;
use tracing::warn;

use crate::config::CollectionSettings;
use crate::metadata::MetadataExtractor;
use crate::store::{StoreError, TrackStore};
use crate::track::Track;

/// A candidate track record plus the raw artwork bytes from its tags.
///
/// The artwork travels with the record so post-processors can use it
/// without re-opening the file.
#[derive(Debug, Clone)]
pub struct IndexedTrack {
    pub track: Track,
    pub artwork: Vec<u8>,
}

/// Hook run after a track is inserted or updated in the catalog.
///
/// Processors run synchronously, in registration order, with the
/// committed record. A processor failure is logged and swallowed; the
/// catalog mutation stands.
pub trait MetadataProcessor {
    fn process(&self, track: &IndexedTrack) -> anyhow::Result<()>;
}

#[derive(Debug, Error)]
pub enum IndexError {
    /// An insert targeted a content hash the catalog already holds.
    /// Informational rather than a fault: the watch path reports this
    /// when a create event arrives for content that is already indexed.
    #[error("track already indexed: {path} ({hash})")]
    AlreadyIndexed { path: String, hash: String },

    /// The candidate track could not be built. Scoped to one file.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The catalog could not be queried or written.
    #[error("store query failed: {0}")]
    Store(#[from] StoreError),

    /// Could not subscribe to filesystem notifications. Fatal to the
    /// watch path; full scans are unaffected.
    #[error("failed to watch collection: {0}")]
    Watch(#[from] notify::Error),
}

/// Service object that keeps the catalog in sync with the collection
/// tree, via full scans and via the live watch loop.
pub struct Indexer<S> {
    settings: CollectionSettings,
    builder: TrackBuilder,
    store: S,
    processors: Vec<Box<dyn MetadataProcessor>>,
}

impl<S: TrackStore> Indexer<S> {
    pub fn new(
        settings: CollectionSettings,
        store: S,
        extractor: Box<dyn MetadataExtractor>,
        processors: Vec<Box<dyn MetadataProcessor>>,
    ) -> Self {
        let builder = TrackBuilder::new(settings.root.clone(), extractor);
        Self {
            settings,
            builder,
            store,
            processors,
        }
    }

    /// Run every registered post-processor over a freshly committed
    /// record.
    fn run_processors(&self, candidate: &IndexedTrack) {
        for processor in &self.processors {
            if let Err(error) = processor.process(candidate) {
                warn!(path = %candidate.track.file_path, %error, "metadata processor failed");
            }
        }
    }
}
