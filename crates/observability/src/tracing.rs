//! Tracing/logging initialization.
//!
//! The library crates only emit events (score validation rejections, at
//! debug level); installing a subscriber is up to the test or host process.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber: JSON lines, filtered via `RUST_LOG`.
///
/// Without `RUST_LOG` the tastebook crates log at debug so rejected scores
/// show up, everything else at info. Safe to call multiple times; the first
/// subscriber wins.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tastebook_core=debug,tastebook_ratings=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .try_init();
}
