//! Persistence contract for the track catalog.
//!
//! The sync engine only ever asks point existence questions and issues
//! single-row mutations; everything else about storage (schema, richer
//! queries, transactions) stays behind [`TrackStore`].

mod sqlite;

pub use sqlite::SqliteStore;

use thiserror::Error;

use crate::track::Track;

/// Failure talking to the catalog.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying SQLite call failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// Catch-all for non-SQLite backends.
    #[error("store error: {0}")]
    Other(String),
}

/// Query and mutation surface the sync engine needs from the catalog.
///
/// No transactional wrapping is assumed across calls; callers must not
/// reconcile the same path or hash from two places at once.
pub trait TrackStore {
    /// Number of records whose content hash equals `hash`.
    fn count_by_hash(&mut self, hash: &str) -> Result<u64, StoreError>;

    /// Number of records stored under `path`.
    fn count_by_path(&mut self, path: &str) -> Result<u64, StoreError>;

    /// Insert `track` as a new record.
    fn insert(&mut self, track: &Track) -> Result<(), StoreError>;

    /// Rewrite the record currently stored under `path` with `track`.
    fn update_by_path(&mut self, path: &str, track: &Track) -> Result<(), StoreError>;

    /// Rewrite the record whose content hash is `hash` with `track`.
    fn update_by_hash(&mut self, hash: &str, track: &Track) -> Result<(), StoreError>;
}
