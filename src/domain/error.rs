//! Error types for event-gate.

use thiserror::Error;

/// Main error type for event-gate.
///
/// `Config` is fatal at load time: no partial FilterSpec is ever produced, so
/// the host must abort startup instead of processing events against a subset.
#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum GateError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
