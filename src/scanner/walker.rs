//! Single-level directory listing and source filtering

use crate::types::{FileEntry, FreshError};
use regex::Regex;
use std::fs;
use std::path::Path;

/// List the regular files directly inside `dir`, sorted by name.
///
/// Sub-directories and special files are skipped, so every listing (and the
/// matching subset `scan_sources` returns) covers regular files only, even
/// when a directory name matches the pattern. Entries whose metadata
/// cannot be read (deleted mid-scan, broken symlinks) or whose names are not
/// valid UTF-8 are skipped with a warning.
///
/// # Errors
/// * `FreshError::DirectoryUnavailable` when `dir` cannot be read at all
pub fn list_directory(dir: &Path) -> Result<Vec<FileEntry>, FreshError> {
    let read_dir = fs::read_dir(dir).map_err(|source| FreshError::DirectoryUnavailable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for result in read_dir {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Failed to read directory entry");
                continue;
            }
        };

        let path = entry.path();
        let metadata = match fs::metadata(&path) {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read metadata, skipping"
                );
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                tracing::warn!(name = ?raw, "Skipping file with a non UTF-8 name");
                continue;
            }
        };

        entries.push(FileEntry::from_metadata(name, &metadata));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Scan `dir` for files whose name matches `pattern`.
///
/// Matching is an unanchored search. An invalid pattern matches nothing;
/// this mirrors how the tool has always behaved and is not reported as an
/// error.
///
/// # Errors
/// * `FreshError::DirectoryUnavailable` when `dir` cannot be listed
pub fn scan_sources(dir: &Path, pattern: &str) -> Result<Vec<FileEntry>, FreshError> {
    let entries = list_directory(dir)?;

    let regex = match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::debug!(pattern, error = %e, "Invalid source pattern, nothing will match");
            None
        }
    };

    let candidates: Vec<FileEntry> = entries
        .into_iter()
        .filter(|entry| {
            tracing::debug!(name = %entry.name, pattern, "Comparing");
            let matched = regex.as_ref().is_some_and(|re| re.is_match(&entry.name));
            if matched {
                tracing::debug!(name = %entry.name, "Source file detected");
            }
            matched
        })
        .collect();

    tracing::debug!(
        candidates = ?candidates.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        "All source files"
    );
    Ok(candidates)
}
