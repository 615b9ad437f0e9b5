//! Logging setup for the command-line entry point.

use tracing_subscriber::{EnvFilter, fmt};

/// Install a stderr subscriber filtered by `RUST_LOG` (default: warn).
///
/// Stdout is left to the command's own output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
