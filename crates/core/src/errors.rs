use thiserror::Error;

/// Unified error type for the entire green-sense-core library.
///
/// Ledger mutations and metric queries never fail; only parsing, window
/// construction, settings and JSON import/export return `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Parsing ─────────────────────────────────────────────────────
    #[error("Invalid transaction kind: '{0}' (expected 'sale' or 'purchase')")]
    InvalidKind(String),

    #[error("Invalid date window: {0}")]
    InvalidWindow(String),

    // ── Settings ────────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ── Export / Import ─────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
