/// A single track in the collection catalog.
///
/// `file_path` is relative to the collection root and moves with the file.
/// `file_hash` is the durable identity: it only changes when the audio
/// bytes themselves change. The descriptive fields are stored exactly as
/// the tag extractor reported them; no validation happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub file_path: String,
    pub file_hash: String,
    pub artwork_hash: String,
    pub artist: String,
    pub title: String,
    pub album: String,
    pub remixer: String,
    pub publisher: String,
    pub release: String,
    pub track_number: String,
    pub disc_number: String,
    pub genre: String,
    pub key: String,
    pub year: i32,
    pub bpm: f64,
}
