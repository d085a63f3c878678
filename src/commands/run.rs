//! The copy-freshest command

use crate::executor::{copy_file, purge_destination, purge_sources};
use crate::scanner::{scan_sources, select_freshest};
use crate::types::FreshError;
use crate::wait::{wait_for_destination, WaitStrategy};
use crate::Config;
use std::fmt;
use std::path::PathBuf;

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ScanSources,
    WaitDestination,
    PurgeOldDestination,
    SelectFreshest,
    Copy,
    PurgeSources,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ScanSources => "scan-sources",
            Stage::WaitDestination => "wait-destination",
            Stage::PurgeOldDestination => "purge-old-destination",
            Stage::SelectFreshest => "select-freshest",
            Stage::Copy => "copy",
            Stage::PurgeSources => "purge-sources",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// What a completed copy did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    /// The freshest source file
    pub source: PathBuf,
    /// The file written
    pub destination: PathBuf,
    /// Bytes copied
    pub bytes: u64,
    /// Old destination files removed (or only announced in dry-run mode)
    pub purged_destination: Vec<PathBuf>,
    /// Source candidates removed (or only announced in dry-run mode)
    pub purged_sources: Vec<PathBuf>,
}

/// How a run ended
#[derive(Debug)]
pub enum RunOutcome {
    /// The freshest source was copied and the sources purged
    Copied(CopyReport),
    /// The destination was not ready and the wait strategy gave up.
    /// `ignored` is true under `-ignore`; false means nobody answered.
    DestinationSkipped { dir: PathBuf, ignored: bool },
    /// The run stopped early
    Aborted(FreshError),
}

impl RunOutcome {
    /// Process exit code for this outcome.
    ///
    /// Early aborts are reported on the console only; the process still
    /// exits successfully so existing callers keep working.
    pub fn exit_code(&self) -> i32 {
        0
    }

    pub fn is_copied(&self) -> bool {
        matches!(self, RunOutcome::Copied(_))
    }
}

/// Run one pass: scan, wait for the destination, retire old output, copy
/// the freshest source and remove all source candidates.
pub fn run(config: &Config, waiter: &mut dyn WaitStrategy) -> RunOutcome {
    enter(Stage::ScanSources);
    // Only an unreadable source directory stops here. An empty match set
    // still retires old output and ends as "no eligible source".
    let candidates = match scan_sources(&config.source_dir, &config.source_pattern) {
        Ok(candidates) => candidates,
        Err(err) => return RunOutcome::Aborted(err),
    };

    enter(Stage::WaitDestination);
    let Some(dest_entries) = wait_for_destination(&config.dest_dir, waiter) else {
        return RunOutcome::DestinationSkipped {
            dir: config.dest_dir.clone(),
            ignored: config.ignore_missing_dest,
        };
    };

    enter(Stage::PurgeOldDestination);
    let purged_destination = purge_destination(
        &config.dest_dir,
        &dest_entries,
        &config.dest_name_fragment,
        config.dry_run(),
    );

    enter(Stage::SelectFreshest);
    let Some(source) = select_freshest(&config.source_dir, &candidates) else {
        return RunOutcome::Aborted(FreshError::NoEligibleSource);
    };

    enter(Stage::Copy);
    let destination = config.destination_file();
    let bytes = match copy_file(&source, &destination) {
        Ok(bytes) => bytes,
        Err(err) => return RunOutcome::Aborted(err),
    };

    enter(Stage::PurgeSources);
    let purged_sources = purge_sources(&config.source_dir, &candidates, config.dry_run());

    enter(Stage::Done);
    RunOutcome::Copied(CopyReport {
        source,
        destination,
        bytes,
        purged_destination,
        purged_sources,
    })
}

fn enter(stage: Stage) {
    tracing::debug!(stage = %stage, "Entering stage");
}
