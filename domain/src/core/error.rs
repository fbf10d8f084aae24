//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised at the boundary where raw questionnaire answers become typed
/// values. Once a [`SkinProfile`](crate::SkinProfile) exists, the engine
/// itself cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing answer for {0}")]
    MissingAnswer(&'static str),

    #[error("Invalid {field}: '{value}'")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("Invalid user id: {0}")]
    InvalidUserId(String),
}

impl DomainError {
    /// Check if this error means the user left a questionnaire field blank
    pub fn is_missing_answer(&self) -> bool {
        matches!(self, DomainError::MissingAnswer(_))
    }

    pub(crate) fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        DomainError::InvalidEnumValue {
            field,
            value: value.into(),
        }
    }
}
