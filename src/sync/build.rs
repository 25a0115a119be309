use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use thiserror::Error;

use super::IndexedTrack;
use crate::metadata::{MetadataError, MetadataExtractor};
use crate::track::Track;

/// Failure constructing a candidate track. Always scoped to one file.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

/// Builds candidate track records from files on disk.
pub struct TrackBuilder {
    root: PathBuf,
    extractor: Box<dyn MetadataExtractor>,
}

impl TrackBuilder {
    pub fn new(root: PathBuf, extractor: Box<dyn MetadataExtractor>) -> Self {
        Self { root, extractor }
    }

    /// Construct the candidate record for one file.
    ///
    /// Reads the file exactly once to digest its content. Tag fields are
    /// taken from the extractor verbatim; year and BPM parse leniently,
    /// falling back to zero when the tag text is not numeric. The stored
    /// path is relative to the collection root.
    pub fn build(&self, path: &Path) -> Result<IndexedTrack, BuildError> {
        let metadata = self.extractor.extract(path)?;

        let file_hash = file_digest(path)?;
        // A track without artwork gets the digest of empty input.
        let artwork_hash = digest(&metadata.artwork);

        let year = metadata.year.trim().parse::<i32>().unwrap_or(0);
        let bpm = metadata.bpm.trim().parse::<f64>().unwrap_or(0.0);

        let file_path = path
            .strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();

        let track = Track {
            file_path,
            file_hash,
            artwork_hash,
            artist: metadata.artist,
            title: metadata.title,
            album: metadata.album,
            remixer: metadata.remixer,
            publisher: metadata.publisher,
            release: metadata.release,
            track_number: metadata.track_number,
            disc_number: metadata.disc_number,
            genre: metadata.genre,
            key: metadata.key,
            year,
            bpm,
        };

        Ok(IndexedTrack {
            track,
            artwork: metadata.artwork,
        })
    }
}

/// SHA-256 of a file's full byte stream, lower-hex encoded.
fn file_digest(path: &Path) -> Result<String, BuildError> {
    let mut file = File::open(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let read = file.read(&mut buffer).map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// SHA-256 of an in-memory byte slice, lower-hex encoded.
fn digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
