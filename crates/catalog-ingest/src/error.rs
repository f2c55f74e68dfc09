//! Error types for loading and saving data files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a data file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Data file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to {operation} file {path}: {source}")]
    FileWrite {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temp file was written but could not replace the target.
    #[error("failed to replace {target_path} with {temp_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// File is not valid UTF-8.
    #[error("{path} is not valid UTF-8{}", .line.map(|l| format!(" (line {l})")).unwrap_or_default())]
    InvalidEncoding { path: PathBuf, line: Option<u64> },

    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to serialize CSV.
    #[error("failed to encode CSV for {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl IngestError {
    /// Path of the file the error concerns.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileNotFound { path }
            | Self::FileRead { path, .. }
            | Self::FileWrite { path, .. }
            | Self::InvalidEncoding { path, .. }
            | Self::CsvParse { path, .. }
            | Self::CsvWrite { path, .. } => path,
            Self::AtomicWriteFailed { target_path, .. } => target_path,
        }
    }

    /// Classifies a `csv` read error, separating encoding failures.
    pub(crate) fn from_csv_read(path: PathBuf, err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Utf8 { pos, .. } => Self::InvalidEncoding {
                path,
                line: pos.as_ref().map(csv::Position::line),
            },
            _ => Self::CsvParse { path, source: err },
        }
    }
}

/// Result type for data file operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
    }

    #[test]
    fn test_encoding_display_with_line() {
        let err = IngestError::InvalidEncoding {
            path: PathBuf::from("a.csv"),
            line: Some(3),
        };
        assert_eq!(err.to_string(), "a.csv is not valid UTF-8 (line 3)");

        let err = IngestError::InvalidEncoding {
            path: PathBuf::from("a.csv"),
            line: None,
        };
        assert_eq!(err.to_string(), "a.csv is not valid UTF-8");
    }
}
