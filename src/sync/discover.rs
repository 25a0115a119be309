use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// True when `path` has one of the collection's track extensions.
///
/// Matching is case-insensitive and tolerates a leading dot in the
/// configured list.
pub fn is_track_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            extensions
                .iter()
                .map(|e| e.trim().trim_start_matches('.'))
                .any(|e| e.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Walk the collection root and collect every track file under it.
///
/// Directories and unreadable entries are skipped without aborting the
/// walk. No ordering is guaranteed.
pub fn collect_files(root: &Path, extensions: &[String], follow_links: bool) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(follow_links)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file() && is_track_file(entry.path(), extensions))
        .map(|entry| entry.into_path())
        .collect()
}
