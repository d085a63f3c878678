use anyhow::Context;
use freshcp::config::{Cli, CONFIG_ERROR_EXIT_CODE};
use freshcp::{ui, wait, Config};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_lenient();
    ui::init_logging(cli.debug).context("Failed to install the log subscriber")?;

    let debug = cli.debug;
    let summary = cli.summary();

    // Convert CLI args to Config - this validates immediately
    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(err) => {
            if debug {
                println!("{}", summary);
            }
            ui::report_config_error(&err);
            std::process::exit(CONFIG_ERROR_EXIT_CODE);
        }
    };

    tracing::debug!(
        version = freshcp::VERSION,
        source_dir = %config.source_dir.display(),
        dest_dir = %config.dest_dir.display(),
        "After separator check"
    );

    let mut waiter = wait::strategy_for(&config);
    let outcome = freshcp::run(&config, waiter.as_mut());
    ui::print_outcome(&outcome);
    std::io::stdout()
        .flush()
        .context("Failed to write the run summary")?;

    match outcome.exit_code() {
        0 => Ok(()),
        code => std::process::exit(code),
    }
}
