//! Diagnostic logging
//!
//! Installs a `tracing` subscriber that writes to stderr so command output on
//! stdout stays clean. `RUST_LOG` takes precedence over the configured filter.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .ok()
        .unwrap_or_else(|| filter_or_default(default_filter));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse a filter directive, falling back to `warn` when it is invalid
fn filter_or_default(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
}
