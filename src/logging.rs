//! Logging setup
//!
//! Log output goes to stderr so stdout carries only the report.

use tracing::Level;

/// Install the global fmt subscriber
///
/// Logs at INFO, or DEBUG when `verbose` is set. Calling it again after a
/// subscriber is installed has no effect.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
