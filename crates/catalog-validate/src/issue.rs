//! Validation issue types.
//!
//! Each variant carries the data that caused it; `Display` gives the
//! reason shown to the user.

use thiserror::Error;

use catalog_model::ModalitySet;

/// Why a record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// Duration or quota is not an integer.
    #[error("duration and quota must be integers")]
    NotIntegers { duration: String, quota: String },

    /// Duration or quota is an integer too large to hold.
    #[error("duration and quota are out of range")]
    OutOfRange { duration: String, quota: String },

    /// Duration or quota is zero or negative.
    #[error("duration and quota must be positive")]
    NotPositive { duration: i128, quota: i128 },

    /// Modality is not one of the accepted strings.
    #[error("modality must be one of: {allowed}")]
    UnknownModality { value: String, allowed: ModalitySet },

    /// Id or name is blank.
    #[error("id and name cannot be empty")]
    MissingIdentity,
}

impl ValidationIssue {
    /// Stable short code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotIntegers { .. } => "not_integers",
            Self::OutOfRange { .. } => "out_of_range",
            Self::NotPositive { .. } => "not_positive",
            Self::UnknownModality { .. } => "unknown_modality",
            Self::MissingIdentity => "missing_identity",
        }
    }
}
