//! Best-effort removal of retired files
//!
//! Every intended deletion is announced on the console. In dry-run mode
//! nothing is removed. A failed removal is logged and otherwise ignored.

use crate::types::FileEntry;
use crate::ui::announce_delete;
use std::fs;
use std::path::{Path, PathBuf};

/// Remove destination files whose name contains `fragment`.
///
/// Returns the paths that were (or in dry-run mode, would have been) removed.
pub fn purge_destination(
    dest_dir: &Path,
    entries: &[FileEntry],
    fragment: &str,
    dry_run: bool,
) -> Vec<PathBuf> {
    entries
        .iter()
        .filter(|entry| entry.name.contains(fragment))
        .map(|entry| remove_entry(dest_dir, entry, dry_run))
        .collect()
}

/// Remove every scanned source candidate, chosen or not.
pub fn purge_sources(source_dir: &Path, candidates: &[FileEntry], dry_run: bool) -> Vec<PathBuf> {
    candidates
        .iter()
        .map(|entry| remove_entry(source_dir, entry, dry_run))
        .collect()
}

fn remove_entry(dir: &Path, entry: &FileEntry, dry_run: bool) -> PathBuf {
    let path = dir.join(&entry.name);
    announce_delete(&path, dry_run);
    if !dry_run {
        if let Err(e) = fs::remove_file(&path) {
            tracing::debug!(path = %path.display(), error = %e, "Removal failed, ignored");
        }
    }
    path
}
