//! Tracing and logging setup shared by binaries and test harnesses that embed
//! the ticket service.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize compact output routed through the test harness capture.
pub fn init_test() {
    tracing::init_test();
}

/// Subscriber configuration (filters, formatters).
pub mod tracing;
