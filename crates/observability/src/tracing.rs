//! Tracing/logging initialization.
//!
//! The calculation core never logs; only the store boundary emits events.
//! This wires those events to stderr with an env-configurable filter.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Safe to call multiple
/// times (subsequent calls are no-ops), so tests and embedders can both call
/// it unconditionally.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
