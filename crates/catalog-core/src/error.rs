//! Operation error types.
//!
//! Every operation returns a [`CatalogError`] on failure. The shell prints
//! it and returns to the menu; only [`CatalogError::MissingBaseDir`] stops
//! the program.

use std::path::PathBuf;
use thiserror::Error;

use catalog_ingest::IngestError;
use catalog_validate::ValidationIssue;

/// Errors surfaced by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Base directory does not exist.
    #[error("base directory not found: {path}")]
    MissingBaseDir { path: PathBuf },

    /// No data file holds a record with this id.
    #[error("no record with id '{id}'")]
    NotFound { id: String },

    /// Record failed a domain rule.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationIssue),

    /// Data file could not be read, decoded, or written.
    #[error(transparent)]
    Format(#[from] IngestError),

    /// Empty or declined input at a prompt.
    #[error("cancelled")]
    UserCancelled,

    /// Menu or file choice that is not a listed number.
    #[error("invalid selection '{input}'")]
    InvalidSelection { input: String },

    /// No data files or records to operate on.
    #[error("{what}")]
    NothingToDo { what: &'static str },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
