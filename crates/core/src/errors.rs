use thiserror::Error;

/// Unified error type for the entire portfolio-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// CSV validation rejections are *not* errors until the caller asks for
/// one: the Validator reports them as a `ValidationOutcome` value.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Storage / File ──────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Ingestion / Export ──────────────────────────────────────────
    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Export failed: {0}")]
    Export(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Holding validation failed: {0}")]
    ValidationError(String),

    #[error("Holding not found at position {index} (portfolio has {len} holdings)")]
    HoldingNotFound { index: usize, len: usize },
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        CoreError::Csv(e.to_string())
    }
}
