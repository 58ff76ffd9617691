//! Error types shared across the engine, input loading and exports

use thiserror::Error;

/// Errors produced by input validation and report export
#[derive(Debug, Error)]
pub enum RoiError {
    /// An input value falls outside its documented domain
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Edition name could not be parsed
    #[error("unknown edition `{0}` (expected Free, Professional, Enterprise, UEM or Security)")]
    UnknownEdition(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RoiError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        RoiError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RoiError>;
