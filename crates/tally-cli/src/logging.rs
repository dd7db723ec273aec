//! Logging setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used for the given verbosity: `debug` when verbose, else `info`
#[must_use]
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays free
/// for `--json` output.
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(verbose))
        .init();
}
