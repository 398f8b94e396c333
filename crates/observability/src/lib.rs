//! Diagnostic tracing setup shared by the binaries.
//!
//! This is separate from the ledger's transaction log, which is part of the
//! domain and lives in `stockledger-events`.

/// Initialize process-wide tracing.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::Format::Json);
}

/// Initialize with human-readable output instead of JSON.
pub fn init_pretty() {
    tracing::init(tracing::Format::Pretty);
}

/// Tracing configuration (filters, output format).
pub mod tracing;
