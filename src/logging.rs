//! Logging setup based on `tracing` / `tracing-subscriber`.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global subscriber.
///
/// `RUST_LOG` wins when set (e.g. `RUST_LOG=rshiftchart=debug`); otherwise
/// `default_level` from the configuration is used. Output goes to stderr so
/// that `--json` output on stdout stays machine readable.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Verbose subscriber for tests, captured by the test harness.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
