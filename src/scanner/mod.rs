//! Directory scanning and candidate selection

mod select;
mod walker;

pub use select::select_freshest;
pub use walker::{list_directory, scan_sources};
