//! Directory path normalization

use std::path::MAIN_SEPARATOR;

/// Ensure `dir` ends with the platform directory separator.
///
/// Returns the normalized path and whether a separator had to be appended.
/// The flag is informational; callers only need the path.
pub fn ensure_trailing_separator(dir: &str) -> (String, bool) {
    // An empty path would turn into the filesystem root.
    if dir.is_empty() {
        tracing::warn!("Empty directory path left unchanged");
        return (String::new(), false);
    }
    if ends_with_separator(dir) {
        return (dir.to_string(), false);
    }
    let mut normalized = String::with_capacity(dir.len() + 1);
    normalized.push_str(dir);
    normalized.push(MAIN_SEPARATOR);
    tracing::debug!(from = dir, to = %normalized, "Appended path separator");
    (normalized, true)
}

fn ends_with_separator(dir: &str) -> bool {
    // Windows also accepts '/' as a separator.
    dir.ends_with(MAIN_SEPARATOR) || (cfg!(windows) && dir.ends_with('/'))
}
