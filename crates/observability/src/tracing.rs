//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize JSON logging filtered by `RUST_LOG` (default [`DEFAULT_FILTER`]).
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

/// Like [`init`], with a caller-chosen default directive such as
/// `"marketplace_vendors=debug"`.
pub fn init_with_default(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok()
}
