//! # freshcp - copy the freshest matching file
//!
//! Polls a source directory for files matching a regular expression, waits
//! (optionally) for the destination directory to become available, retires
//! old destination files, copies the most recently modified non-empty
//! source to `<dstDir><dstStr><dstAffix>` and removes the source candidates.

// Module declarations
pub mod commands;
pub mod config;
pub mod executor;
pub mod paths;
pub mod scanner;
pub mod types;
pub mod ui;
pub mod wait;

// Re-export commonly used types
pub use commands::{run, RunOutcome};
pub use config::Config;
pub use types::{FileEntry, FreshError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
