//! Tracing/logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    logging::init();
}

/// Subscriber configuration (filters, output format).
pub mod logging;
