use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/shellac/config.toml` or `~/.config/shellac/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SHELLAC__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub collection: CollectionSettings,
    pub database: DatabaseSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            collection: CollectionSettings::default(),
            database: DatabaseSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CollectionSettings {
    /// Root directory of the music collection to keep indexed.
    pub root: PathBuf,

    /// File extensions to treat as tracks (case-insensitive, without dot).
    pub extensions: Vec<String>,

    /// Whether to follow symlinks while walking the collection.
    pub follow_links: bool,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("Music"),
            extensions: vec!["aif".into(), "mp3".into()],
            follow_links: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Where the SQLite track catalog lives.
    pub path: PathBuf,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("tracks.db3"),
        }
    }
}
