//! Core type definitions for freshcp

mod entry;
mod error;

pub use entry::FileEntry;
pub use error::FreshError;
