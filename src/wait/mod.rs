//! Waiting for the destination directory to become ready
//!
//! The destination is "ready" once it can be listed. What happens in between
//! failed attempts is decided by a [`WaitStrategy`]: the binary either asks an
//! operator on the console or gives up immediately under `-ignore`.

use crate::scanner::list_directory;
use crate::types::{FileEntry, FreshError};
use crate::ui::style_prompt;
use crate::Config;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// What to do after a failed destination listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitDecision {
    /// Try listing again
    Retry,
    /// Stop waiting; the run does nothing further
    GiveUp,
}

/// Called each time the destination cannot be listed.
pub trait WaitStrategy {
    /// Block until it is worth retrying, or decide to give up.
    fn await_retry(&mut self, dir: &Path, error: &FreshError) -> WaitDecision;
}

/// Never waits. Used when a missing destination should be a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreMissing;

impl WaitStrategy for IgnoreMissing {
    fn await_retry(&mut self, dir: &Path, error: &FreshError) -> WaitDecision {
        tracing::debug!(dir = %dir.display(), error = %error, "Destination not ready, ignoring");
        WaitDecision::GiveUp
    }
}

/// Asks an operator to prepare the destination and waits for one line of input.
///
/// There is no timeout. A closed input stream ends the wait, since nobody can
/// answer the prompt any more.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    /// Prompt on `output`, read answers from `input`
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, read from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> WaitStrategy for ConsolePrompt<R, W> {
    fn await_retry(&mut self, dir: &Path, error: &FreshError) -> WaitDecision {
        tracing::debug!(dir = %dir.display(), error = %error, "Destination not ready");

        let prompt = format!("Make {} ready and press any key.", dir.display());
        if let Err(e) = writeln!(self.output, "{}", style_prompt(&prompt)).and_then(|_| self.output.flush()) {
            tracing::warn!(error = %e, "Failed to write prompt");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                tracing::warn!("Input closed while waiting for the destination");
                WaitDecision::GiveUp
            }
            Ok(_) => WaitDecision::Retry,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read operator input");
                WaitDecision::GiveUp
            }
        }
    }
}

/// Pick the strategy matching the `ignore_missing_dest` setting.
pub fn strategy_for(config: &Config) -> Box<dyn WaitStrategy> {
    if config.ignore_missing_dest {
        Box::new(IgnoreMissing)
    } else {
        Box::new(ConsolePrompt::stdio())
    }
}

/// List the destination, retrying as long as `strategy` says so.
///
/// Returns the destination entries once the directory is readable, or `None`
/// when the strategy gave up.
pub fn wait_for_destination(
    dir: &Path,
    strategy: &mut dyn WaitStrategy,
) -> Option<Vec<FileEntry>> {
    loop {
        match list_directory(dir) {
            Ok(entries) => return Some(entries),
            Err(err) => {
                if strategy.await_retry(dir, &err) == WaitDecision::GiveUp {
                    return None;
                }
            }
        }
    }
}
