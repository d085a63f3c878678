//! Error types for freshcp

use std::path::PathBuf;
use thiserror::Error;

/// Error types for freshcp operations
#[derive(Debug, Error)]
pub enum FreshError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A directory could not be listed
    #[error("Directory unavailable: {path}: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Nothing matched, or every match was empty
    #[error("No eligible source files")]
    NoEligibleSource,

    /// The chosen source could not be opened for reading
    #[error("Failed to open source file {path}: {source}")]
    SourceOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The destination file could not be created
    #[error("Failed to create target file {path}: {source}")]
    DestinationCreate {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FreshError {
    /// Check if this error came from configuration validation
    pub fn is_config_error(&self) -> bool {
        matches!(self, FreshError::Config(_))
    }

    /// Check if this error aborted the copy step
    pub fn is_copy_failure(&self) -> bool {
        matches!(
            self,
            FreshError::SourceOpen { .. } | FreshError::DestinationCreate { .. } | FreshError::Io(_)
        )
    }

    /// Check if this error is a failed directory listing
    pub fn is_directory_error(&self) -> bool {
        matches!(self, FreshError::DirectoryUnavailable { .. })
    }
}
