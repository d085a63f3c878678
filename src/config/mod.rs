//! Configuration management

use crate::paths::ensure_trailing_separator;
use crate::types::FreshError;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Exit code used when required flags are missing
pub const CONFIG_ERROR_EXIT_CODE: i32 = -1;

/// Long flags that may also be spelled with a single dash (`-ignore`).
const LONG_FLAGS: &[&str] = &[
    "srcDir", "dstDir", "srcStr", "dstStr", "dstAffix", "ignore", "debug", "help", "version",
];

/// Command-line arguments
#[derive(Debug, Default, Parser)]
#[command(
    name = "freshcp",
    version,
    about = "Copy the most recent matching file to a destination directory",
    long_about = "Copy the most recently modified file matching a regular expression from a \
                  source directory to <dstDir>/<dstStr><dstAffix>. Older destination files \
                  containing <dstStr> are removed first and all matching source files are \
                  removed after a successful copy. If the destination is not ready the \
                  operator is asked to prepare it, unless -ignore is given."
)]
pub struct Cli {
    /// Source directory
    #[arg(long = "srcDir", value_name = "PATH")]
    pub src_dir: Option<String>,

    /// Destination directory
    #[arg(long = "dstDir", value_name = "PATH")]
    pub dst_dir: Option<String>,

    /// Source file name (regular expression)
    #[arg(long = "srcStr", value_name = "REGEX")]
    pub src_str: Option<String>,

    /// Part of destination file name; old destination files containing it are removed
    #[arg(long = "dstStr", value_name = "TEXT")]
    pub dst_str: Option<String>,

    /// Destination file name affix
    #[arg(long = "dstAffix", value_name = "TEXT")]
    pub dst_affix: Option<String>,

    /// Do nothing instead of waiting when the destination is not ready
    #[arg(long)]
    pub ignore: bool,

    /// Print debugging messages and never remove files
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse arguments, accepting single-dash long flags.
    pub fn parse_lenient() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// One-line dump of the raw values, for debug output on bad input.
    pub fn summary(&self) -> String {
        fn show(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("")
        }
        format!(
            "source dir={}, source files={}, destination dir={}, destination files={}, destination affix={}",
            show(&self.src_dir),
            show(&self.src_str),
            show(&self.dst_dir),
            show(&self.dst_str),
            show(&self.dst_affix),
        )
    }
}

/// Rewrite `-flag` / `-flag=value` to `--flag` / `--flag=value` for known long flags.
///
/// Everything after a bare `--` is passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.to_str().and_then(promote_flag) {
                Some(promoted) => OsString::from(promoted),
                None => arg,
            }
        })
        .collect()
}

fn promote_flag(text: &str) -> Option<String> {
    let rest = text.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split('=').next().unwrap_or(rest);
    LONG_FLAGS.contains(&name).then(|| format!("-{}", text))
}

/// Run configuration, built once and passed by reference to every step
#[derive(Debug, Clone)]
pub struct Config {
    /// Source directory (always ends with a separator)
    pub source_dir: PathBuf,

    /// Destination directory (always ends with a separator)
    pub dest_dir: PathBuf,

    /// Regular expression matched against source file names
    pub source_pattern: String,

    /// Substring marking old destination files; prefix of the new name
    pub dest_name_fragment: String,

    /// Suffix of the new destination file name
    pub dest_affix: String,

    /// Skip the run instead of waiting for an unavailable destination
    pub ignore_missing_dest: bool,

    /// Verbose diagnostics; also disables every deletion
    pub debug: bool,
}

impl Config {
    /// Validate the required values and normalize both directories.
    pub fn new(
        source_dir: &str,
        dest_dir: &str,
        source_pattern: &str,
        dest_name_fragment: &str,
        dest_affix: &str,
    ) -> Result<Self, FreshError> {
        let missing: Vec<&str> = [
            ("--srcDir", source_dir),
            ("--dstDir", dest_dir),
            ("--srcStr", source_pattern),
            ("--dstStr", dest_name_fragment),
            ("--dstAffix", dest_affix),
        ]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(flag, _)| *flag)
        .collect();

        if !missing.is_empty() {
            return Err(FreshError::Config(format!(
                "missing {}. All source and destination dirs and name patterns are needed! Use -h for help.",
                missing.join(", ")
            )));
        }

        let (source_dir, _) = ensure_trailing_separator(source_dir);
        let (dest_dir, _) = ensure_trailing_separator(dest_dir);

        Ok(Self {
            source_dir: PathBuf::from(source_dir),
            dest_dir: PathBuf::from(dest_dir),
            source_pattern: source_pattern.to_string(),
            dest_name_fragment: dest_name_fragment.to_string(),
            dest_affix: dest_affix.to_string(),
            ignore_missing_dest: false,
            debug: false,
        })
    }

    /// Full path of the copy target: destination dir + fragment + affix.
    ///
    /// The parts are concatenated, not joined, so an absolute fragment still
    /// lands under `dest_dir`.
    pub fn destination_file(&self) -> PathBuf {
        let mut path = self.dest_dir.clone().into_os_string();
        path.push(&self.dest_name_fragment);
        path.push(&self.dest_affix);
        PathBuf::from(path)
    }

    /// Deletions are only logged, never performed
    pub fn dry_run(&self) -> bool {
        self.debug
    }
}

impl TryFrom<Cli> for Config {
    type Error = FreshError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let mut config = Config::new(
            cli.src_dir.as_deref().unwrap_or(""),
            cli.dst_dir.as_deref().unwrap_or(""),
            cli.src_str.as_deref().unwrap_or(""),
            cli.dst_str.as_deref().unwrap_or(""),
            cli.dst_affix.as_deref().unwrap_or(""),
        )?;
        config.ignore_missing_dest = cli.ignore;
        config.debug = cli.debug;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::MAIN_SEPARATOR;

    fn full_cli() -> Cli {
        Cli {
            src_dir: Some("in".to_string()),
            dst_dir: Some("out".to_string()),
            src_str: Some(r".*\.txt".to_string()),
            dst_str: Some("out".to_string()),
            dst_affix: Some(".dat".to_string()),
            ignore: false,
            debug: false,
        }
    }

    fn args(list: &[&str]) -> Vec<OsString> {
        normalize_args(list.iter().copied())
    }

    #[test]
    fn test_try_from_normalizes_directories() {
        let config = Config::try_from(full_cli()).expect("valid config");

        assert!(config
            .source_dir
            .to_string_lossy()
            .ends_with(MAIN_SEPARATOR));
        assert!(config.dest_dir.to_string_lossy().ends_with(MAIN_SEPARATOR));
        assert_eq!(config.source_pattern, r".*\.txt");
        assert!(!config.ignore_missing_dest);
        assert!(!config.dry_run());
    }

    #[test]
    fn test_each_missing_flag_is_a_config_error() {
        let blankers: [fn(&mut Cli); 5] = [
            |c: &mut Cli| c.src_dir = None,
            |c: &mut Cli| c.dst_dir = Some(String::new()),
            |c: &mut Cli| c.src_str = None,
            |c: &mut Cli| c.dst_str = Some(String::new()),
            |c: &mut Cli| c.dst_affix = None,
        ];

        for blank in blankers {
            let mut cli = full_cli();
            blank(&mut cli);
            let err = Config::try_from(cli).expect_err("missing flag must be rejected");
            assert!(err.is_config_error());
            assert!(err.to_string().contains("Use -h for help"));
        }
    }

    #[test]
    fn test_error_names_every_missing_flag() {
        let err = Config::try_from(Cli::default()).expect_err("empty cli");
        let msg = err.to_string();
        for flag in ["--srcDir", "--dstDir", "--srcStr", "--dstStr", "--dstAffix"] {
            assert!(msg.contains(flag), "{flag} missing from: {msg}");
        }
    }

    #[test]
    fn test_boolean_flags_carry_over() {
        let mut cli = full_cli();
        cli.ignore = true;
        cli.debug = true;

        let config = Config::try_from(cli).expect("valid config");
        assert!(config.ignore_missing_dest);
        assert!(config.debug);
        assert!(config.dry_run());
    }

    #[test]
    fn test_destination_file_joins_fragment_and_affix() {
        let config = Config::try_from(full_cli()).expect("valid config");
        assert_eq!(config.destination_file(), PathBuf::from("out").join("out.dat"));
    }

    #[test]
    fn test_absolute_fragment_stays_under_dest_dir() {
        let mut cli = full_cli();
        cli.dst_dir = Some("/srv/out".to_string());
        cli.dst_str = Some("/etc/passwd".to_string());
        cli.dst_affix = Some(String::new());
        let config = Config::try_from(cli).expect("valid config");

        let target = config.destination_file();

        assert!(target.starts_with("/srv/out"), "escaped dest dir: {}", target.display());
        assert_ne!(target, PathBuf::from("/etc/passwd"));
    }

    #[test]
    fn test_normalize_args_promotes_single_dash_long_flags() {
        let normalized = args(&["freshcp", "-ignore", "-debug", "-srcDir=/tmp/in", "-dstAffix", ".dat"]);
        assert_eq!(
            normalized,
            vec!["freshcp", "--ignore", "--debug", "--srcDir=/tmp/in", "--dstAffix", ".dat"]
        );
    }

    #[test]
    fn test_normalize_args_leaves_other_args_alone() {
        let normalized = args(&["freshcp", "--debug", "-h", "-x", "--", "-ignore"]);
        assert_eq!(normalized, vec!["freshcp", "--debug", "-h", "-x", "--", "-ignore"]);
    }

    #[test]
    fn test_cli_parses_go_style_invocation() {
        let cli = Cli::parse_from(args(&[
            "freshcp",
            "-srcDir=in",
            "--dstDir=out",
            r"-srcStr=.*\.txt",
            "-dstStr=out",
            "-dstAffix=.dat",
            "-ignore",
        ]));

        assert_eq!(cli.src_dir.as_deref(), Some("in"));
        assert_eq!(cli.dst_dir.as_deref(), Some("out"));
        assert_eq!(cli.src_str.as_deref(), Some(r".*\.txt"));
        assert!(cli.ignore);
        assert!(!cli.debug);
    }

    #[test]
    fn test_summary_lists_raw_values() {
        let summary = full_cli().summary();
        assert!(summary.contains("source dir=in"));
        assert!(summary.contains("destination affix=.dat"));
    }
}
