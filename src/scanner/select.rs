//! Pick the freshest non-empty candidate

use crate::types::FileEntry;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Return the full path of the most recently modified non-empty candidate.
///
/// Candidates are visited once in order. A candidate only replaces the
/// current best when it is strictly newer, so on equal timestamps the
/// earlier candidate wins. Zero-byte files are never chosen.
pub fn select_freshest(source_dir: &Path, candidates: &[FileEntry]) -> Option<PathBuf> {
    let mut best_time = UNIX_EPOCH;
    let mut best: Option<&FileEntry> = None;

    for candidate in candidates {
        tracing::debug!(
            name = %candidate.name,
            size = candidate.size,
            mtime = %format_time(candidate.mtime),
            best = %format_time(best_time),
            "Comparing"
        );
        if !candidate.is_empty() && candidate.mtime > best_time {
            best_time = candidate.mtime;
            best = Some(candidate);
            tracing::debug!(name = %candidate.name, "More recent");
        }
    }

    best.map(|entry| source_dir.join(&entry.name))
}

fn format_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S%.3f %z")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_picks_latest_mtime() {
        let candidates = vec![
            FileEntry::new("a.txt", 10, at(1_000)),
            FileEntry::new("b.txt", 20, at(3_000)),
            FileEntry::new("c.txt", 30, at(2_000)),
        ];

        let chosen = select_freshest(Path::new("in/"), &candidates);
        assert_eq!(chosen, Some(PathBuf::from("in/b.txt")));
    }

    #[test]
    fn test_equal_timestamps_first_wins() {
        let candidates = vec![
            FileEntry::new("first.txt", 5, at(5_000)),
            FileEntry::new("second.txt", 5, at(5_000)),
        ];

        let chosen = select_freshest(Path::new("in/"), &candidates);
        assert_eq!(chosen, Some(PathBuf::from("in/first.txt")));
    }

    #[test]
    fn test_empty_files_never_win() {
        let candidates = vec![
            FileEntry::new("old.txt", 1, at(1_000)),
            FileEntry::new("newest_but_empty.txt", 0, at(9_000)),
        ];

        let chosen = select_freshest(Path::new("in/"), &candidates);
        assert_eq!(chosen, Some(PathBuf::from("in/old.txt")));
    }

    #[test]
    fn test_all_empty_yields_none() {
        let candidates = vec![
            FileEntry::new("a.txt", 0, at(1_000)),
            FileEntry::new("b.txt", 0, at(2_000)),
        ];
        assert_eq!(select_freshest(Path::new("in/"), &candidates), None);
    }

    #[test]
    fn test_no_candidates_yields_none() {
        assert_eq!(select_freshest(Path::new("in/"), &[]), None);
    }

    #[test]
    fn test_epoch_mtime_never_wins() {
        let candidates = vec![FileEntry::new("ancient.txt", 4, UNIX_EPOCH)];
        assert_eq!(select_freshest(Path::new("in/"), &candidates), None);
    }
}
