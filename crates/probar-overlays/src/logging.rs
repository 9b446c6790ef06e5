//! Subscriber setup for scenario logs.
//!
//! Patterns emit `tracing` events at `debug` for each protocol step and
//! `warn` for timeouts. These helpers install a subscriber filtered by
//! `RUST_LOG`; they are safe to call from every test.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "probar_overlays=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a human-readable subscriber writing to the test writer
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_test_writer()
        .try_init()
        .is_ok()
}

/// Install a JSON subscriber (for CI log collection)
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_json_tracing() -> bool {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .try_init()
        .is_ok()
}
