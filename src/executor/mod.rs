//! Executor module for file operations

pub mod copy;
pub mod purge;

pub use copy::copy_file;
pub use purge::{purge_destination, purge_sources};
