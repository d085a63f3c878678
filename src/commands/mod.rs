//! Commands

pub mod run;

pub use run::{run, CopyReport, RunOutcome, Stage};
