//! FileEntry - snapshot of one directory entry taken at scan time

use std::fs::Metadata;
use std::time::{SystemTime, UNIX_EPOCH};

/// A file seen in a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name (no directory component)
    pub name: String,

    /// File size in bytes
    pub size: u64,

    /// Last modification time
    pub mtime: SystemTime,
}

impl FileEntry {
    /// Create a new FileEntry with the given parameters
    pub fn new(name: impl Into<String>, size: u64, mtime: SystemTime) -> Self {
        Self {
            name: name.into(),
            size,
            mtime,
        }
    }

    /// Build an entry from filesystem metadata.
    ///
    /// Platforms that cannot report an mtime get `UNIX_EPOCH`, which never
    /// wins a freshness comparison.
    pub fn from_metadata(name: impl Into<String>, metadata: &Metadata) -> Self {
        Self::new(
            name,
            metadata.len(),
            metadata.modified().unwrap_or(UNIX_EPOCH),
        )
    }

    /// Zero-byte files are never copy candidates
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}
