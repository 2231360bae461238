//! Tracing/logging setup shared by anything embedding the ledger.

/// Initialize process-wide tracing/logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, format).
pub mod tracing;
