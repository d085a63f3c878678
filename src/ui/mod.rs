//! Console output and logging

mod logging;
mod report;

pub use logging::init_logging;
pub use report::{announce_delete, print_outcome, report_config_error, style_prompt};
