//! Error types for crop scoring
//!
//! Scoring and catalog validation return `CropAdvisorError`. File loaders
//! (config, catalog CSV) and binaries use `anyhow` on top of these.

use thiserror::Error;

/// Failure reported by an external speech synthesizer
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct SpeechError(pub String);

impl SpeechError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Domain errors for the crop advisor
#[derive(Debug, Error)]
pub enum CropAdvisorError {
    /// A query field (or `k`) is outside its allowed range
    #[error("invalid query: {field} = {value} ({reason})")]
    InvalidQuery {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Nothing to rank
    #[error("crop catalog is empty")]
    EmptyCatalog,

    /// A crop profile has an out-of-range value or a duplicate name
    #[error("invalid crop profile '{name}': {reason}")]
    InvalidCatalog { name: String, reason: String },

    /// External collaborator failed; surfaced as-is, never retried
    #[error("{service} service failed: {source}")]
    ExternalServiceFailure {
        service: &'static str,
        #[source]
        source: SpeechError,
    },
}

impl CropAdvisorError {
    pub(crate) fn invalid_query(
        field: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        CropAdvisorError::InvalidQuery {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_catalog(name: &str, reason: impl Into<String>) -> Self {
        CropAdvisorError::InvalidCatalog {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type AdvisorResult<T> = std::result::Result<T, CropAdvisorError>;
