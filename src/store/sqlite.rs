use std::path::Path;

use rusqlite::{Connection, params};

use super::{StoreError, TrackStore};
use crate::track::Track;

/// SQLite-backed track catalog.
///
/// Both `file_path` and `file_hash` carry UNIQUE constraints, mirroring
/// the at-most-one-record-per-path and per-hash invariants. The engine
/// checks existence before writing, so a constraint trip means two
/// writers raced on the same identity.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create the catalog database at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Self::with_connection(conn)
    }

    /// Open a catalog kept entirely in memory. Used by tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS tracks (
                id           INTEGER PRIMARY KEY,
                file_path    TEXT    NOT NULL UNIQUE,
                file_hash    TEXT    NOT NULL UNIQUE,
                artwork_hash TEXT    NOT NULL,
                artist       TEXT    NOT NULL,
                title        TEXT    NOT NULL,
                album        TEXT    NOT NULL,
                remixer      TEXT    NOT NULL,
                publisher    TEXT    NOT NULL,
                \"release\"  TEXT    NOT NULL,
                track_number TEXT    NOT NULL,
                disc_number  TEXT    NOT NULL,
                genre        TEXT    NOT NULL,
                key          TEXT    NOT NULL,
                year         INTEGER NOT NULL,
                bpm          REAL    NOT NULL
            )",
            (),
        )?;
        Ok(Self { conn })
    }
}

impl TrackStore for SqliteStore {
    fn count_by_hash(&mut self, hash: &str) -> Result<u64, StoreError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM tracks WHERE file_hash = ?1",
            params![hash],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    fn count_by_path(&mut self, path: &str) -> Result<u64, StoreError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM tracks WHERE file_path = ?1",
            params![path],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    fn insert(&mut self, track: &Track) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO tracks (file_path, file_hash, artwork_hash, artist, title, album,
             remixer, publisher, \"release\", track_number, disc_number, genre, key, year, bpm)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            params![
                track.file_path,
                track.file_hash,
                track.artwork_hash,
                track.artist,
                track.title,
                track.album,
                track.remixer,
                track.publisher,
                track.release,
                track.track_number,
                track.disc_number,
                track.genre,
                track.key,
                track.year,
                track.bpm,
            ],
        )?;
        Ok(())
    }

    fn update_by_path(&mut self, path: &str, track: &Track) -> Result<(), StoreError> {
        self.conn.execute(
            "UPDATE tracks SET file_path = ?1, file_hash = ?2, artwork_hash = ?3, artist = ?4,
             title = ?5, album = ?6, remixer = ?7, publisher = ?8, \"release\" = ?9,
             track_number = ?10, disc_number = ?11, genre = ?12, key = ?13, year = ?14, bpm = ?15
             WHERE file_path = ?16",
            params![
                track.file_path,
                track.file_hash,
                track.artwork_hash,
                track.artist,
                track.title,
                track.album,
                track.remixer,
                track.publisher,
                track.release,
                track.track_number,
                track.disc_number,
                track.genre,
                track.key,
                track.year,
                track.bpm,
                path,
            ],
        )?;
        Ok(())
    }

    fn update_by_hash(&mut self, hash: &str, track: &Track) -> Result<(), StoreError> {
        self.conn.execute(
            "UPDATE tracks SET file_path = ?1, file_hash = ?2, artwork_hash = ?3, artist = ?4,
             title = ?5, album = ?6, remixer = ?7, publisher = ?8, \"release\" = ?9,
             track_number = ?10, disc_number = ?11, genre = ?12, key = ?13, year = ?14, bpm = ?15
             WHERE file_hash = ?16",
            params![
                track.file_path,
                track.file_hash,
                track.artwork_hash,
                track.artist,
                track.title,
                track.album,
                track.remixer,
                track.publisher,
                track.release,
                track.track_number,
                track.disc_number,
                track.genre,
                track.key,
                track.year,
                track.bpm,
                hash,
            ],
        )?;
        Ok(())
    }
}
