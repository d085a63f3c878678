//! Console reporting

use crate::commands::RunOutcome;
use crate::types::FreshError;
use console::style;
use indicatif::HumanBytes;
use std::path::Path;

/// Style the operator prompt shown while waiting for the destination.
pub fn style_prompt(text: &str) -> String {
    style(text).yellow().bold().to_string()
}

/// Announce an intended deletion.
pub fn announce_delete(path: &Path, dry_run: bool) {
    println!("{}", format_delete_intent(path, dry_run));
}

fn format_delete_intent(path: &Path, dry_run: bool) -> String {
    if dry_run {
        format!("To delete {} (debug mode, kept)", path.display())
    } else {
        format!("To delete {}", path.display())
    }
}

/// Print a rejected configuration.
pub fn report_config_error(err: &FreshError) {
    println!("{}", style(err).red());
}

/// Print how the run ended.
pub fn print_outcome(outcome: &RunOutcome) {
    println!("{}", format_outcome(outcome));
}

fn format_outcome(outcome: &RunOutcome) -> String {
    match outcome {
        RunOutcome::Copied(report) => format!(
            "{} {} to {} ({})",
            style("Copied").green().bold(),
            report.source.display(),
            report.destination.display(),
            HumanBytes(report.bytes)
        ),
        RunOutcome::DestinationSkipped { dir, ignored: true } => {
            format!("Destination {} not ready, nothing done.", dir.display())
        }
        RunOutcome::DestinationSkipped { dir, ignored: false } => format!(
            "{} Destination {} never became ready and input was closed, nothing done.",
            style("Gave up waiting!").red(),
            dir.display()
        ),
        RunOutcome::Aborted(err) => match err {
            FreshError::DirectoryUnavailable { .. } => {
                format!("{} {}", style("NO source files found!").red(), err)
            }
            FreshError::NoEligibleSource => style("NO eligible source files!").red().to_string(),
            _ => format!("{} {}", style("FAILED!").red().bold(), err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CopyReport;
    use std::path::PathBuf;

    #[test]
    fn test_delete_intent_marks_dry_run() {
        let path = Path::new("out/out.dat");
        assert_eq!(format_delete_intent(path, false), "To delete out/out.dat");
        assert!(format_delete_intent(path, true).contains("kept"));
    }

    #[test]
    fn test_copied_outcome_uses_human_readable_bytes() {
        let outcome = RunOutcome::Copied(CopyReport {
            source: PathBuf::from("in/b.txt"),
            destination: PathBuf::from("out/out.dat"),
            bytes: 5 * 1024 * 1024,
            purged_destination: Vec::new(),
            purged_sources: vec![PathBuf::from("in/b.txt")],
        });

        let text = format_outcome(&outcome);
        assert!(text.contains("in/b.txt"));
        assert!(text.contains("out/out.dat"));
        assert!(text.contains("MiB"), "expected human-readable size, got: {text}");
    }

    #[test]
    fn test_aborted_outcomes_explain_why() {
        let none = format_outcome(&RunOutcome::Aborted(FreshError::NoEligibleSource));
        assert!(none.contains("NO eligible source files!"));

        let missing = format_outcome(&RunOutcome::Aborted(FreshError::DirectoryUnavailable {
            path: PathBuf::from("in/"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        }));
        assert!(missing.contains("NO source files found!"));

        let failed = format_outcome(&RunOutcome::Aborted(FreshError::DestinationCreate {
            path: PathBuf::from("out/out.dat"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        }));
        assert!(failed.contains("FAILED!"));
        assert!(failed.contains("read-only"));
    }

    #[test]
    fn test_skipped_outcome_names_directory() {
        let text = format_outcome(&RunOutcome::DestinationSkipped {
            dir: PathBuf::from("/mnt/share/"),
            ignored: true,
        });
        assert!(text.contains("/mnt/share/"));
        assert!(text.contains("nothing done"));
        assert!(!text.contains("Gave up waiting"));
    }

    #[test]
    fn test_unanswered_wait_is_reported_apart_from_ignore() {
        let text = format_outcome(&RunOutcome::DestinationSkipped {
            dir: PathBuf::from("/mnt/share/"),
            ignored: false,
        });
        assert!(text.contains("Gave up waiting!"));
        assert!(text.contains("input was closed"));
        assert!(text.contains("/mnt/share/"));
    }
}
