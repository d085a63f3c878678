//! Diagnostic logging setup

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a given debug setting.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "freshcp=debug"
    } else {
        "freshcp=warn"
    }
}

/// Install the global subscriber. Diagnostics go to stderr so stdout only
/// carries operator-facing text. Only `-debug` controls verbosity; the
/// environment is not consulted.
///
/// # Errors
/// Fails when a global subscriber is already installed.
pub fn init_logging(debug: bool) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::new(default_directive(debug)))
        .try_init()
}
