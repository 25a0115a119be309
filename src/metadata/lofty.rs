use std::path::Path;

use lofty::file::TaggedFileExt;
use lofty::tag::{ItemKey, Tag};

use super::{MetadataError, MetadataExtractor, TrackMetadata};

/// Tag reader backed by lofty.
///
/// Reads the fields the catalog tracks across ID3v2-style tags: artist,
/// title, album, remixer, publisher, the comment frame (kept as the
/// release name), musical key, BPM, year, track/disc numbers, genre, and
/// the first embedded picture as artwork.
pub struct LoftyExtractor;

fn tag_string(tag: &Tag, key: &ItemKey) -> String {
    tag.get_string(key)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

impl MetadataExtractor for LoftyExtractor {
    fn extract(&self, path: &Path) -> Result<TrackMetadata, MetadataError> {
        let tagged = lofty::read_from_path(path).map_err(|source| MetadataError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let tag = tagged
            .primary_tag()
            .or_else(|| tagged.first_tag())
            .ok_or_else(|| MetadataError::NoTags {
                path: path.to_path_buf(),
            })?;

        let artwork = tag
            .pictures()
            .first()
            .map(|picture| picture.data().to_vec())
            .unwrap_or_default();

        // ID3v2.4 writers put the year in the recording date frame.
        let mut year = tag_string(tag, &ItemKey::Year);
        if year.is_empty() {
            year = tag_string(tag, &ItemKey::RecordingDate);
        }

        Ok(TrackMetadata {
            artist: tag_string(tag, &ItemKey::TrackArtist),
            title: tag_string(tag, &ItemKey::TrackTitle),
            album: tag_string(tag, &ItemKey::AlbumTitle),
            remixer: tag_string(tag, &ItemKey::Remixer),
            publisher: tag_string(tag, &ItemKey::Publisher),
            release: tag_string(tag, &ItemKey::Comment),
            key: tag_string(tag, &ItemKey::InitialKey),
            bpm: tag_string(tag, &ItemKey::Bpm),
            year,
            track_number: tag_string(tag, &ItemKey::TrackNumber),
            disc_number: tag_string(tag, &ItemKey::DiscNumber),
            genre: tag_string(tag, &ItemKey::Genre),
            artwork,
        })
    }
}
