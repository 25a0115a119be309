//! Tag metadata extraction.
//!
//! The sync engine only depends on the [`MetadataExtractor`] capability;
//! [`LoftyExtractor`] is the production implementation backed by lofty.

mod lofty;

pub use self::lofty::LoftyExtractor;

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Raw tag fields for one track file.
///
/// Values are kept verbatim. Numeric-looking fields (`year`, `bpm`) stay
/// text here; the track builder parses them leniently.
#[derive(Debug, Clone, Default)]
pub struct TrackMetadata {
    pub artist: String,
    pub title: String,
    pub album: String,
    pub remixer: String,
    pub publisher: String,
    pub release: String,
    pub key: String,
    pub bpm: String,
    pub year: String,
    pub track_number: String,
    pub disc_number: String,
    pub genre: String,
    /// Bytes of the first embedded picture, empty when the file has none.
    pub artwork: Vec<u8>,
}

/// Failure reading tags. Always scoped to one file.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The file could not be opened or parsed as tagged audio.
    #[error("failed to read tags from {path:?}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: ::lofty::error::LoftyError,
    },
    /// The file parsed but carries no tag to index.
    #[error("no usable tag in {path:?}")]
    NoTags { path: PathBuf },
}

/// Capability to read tag metadata for a track file.
pub trait MetadataExtractor {
    fn extract(&self, path: &Path) -> Result<TrackMetadata, MetadataError>;
}
