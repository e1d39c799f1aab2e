//! Error types for inflammation data analysis
//!
//! Provides a unified error type for all inflammation crates.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for inflammation data operations
#[derive(Error, Debug)]
pub enum Error {
    /// No dataset files matched the discovery pattern
    #[error("no inflammation data files found in {}", .dir.display())]
    NoDataFound { dir: PathBuf },

    /// A discovered file could not be parsed into a rectangular numeric table
    #[error("failed to parse {}: {}", .file.display(), .message)]
    Parse { file: PathBuf, message: String },

    /// Non-numeric data where a number was required
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    /// Input violates a domain invariant
    #[error("domain violation: {0}")]
    DomainViolation(String),

    /// Rows or series of incompatible length
    #[error("shape mismatch in {context}: expected length {expected}, got {actual}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Insufficient data for the requested operation
    #[error("insufficient data: expected at least {expected} values, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a directory without any matching dataset files
    pub fn no_data_found(dir: impl Into<PathBuf>) -> Self {
        Self::NoDataFound { dir: dir.into() }
    }

    /// Create an error for a file that failed to parse
    pub fn parse(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an error for non-numeric data
    pub fn type_mismatch(expected: &str, got: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.to_string(),
            got: got.into(),
        }
    }

    /// Create an error for a negative inflammation reading
    pub fn negative_reading(patient: usize, day: usize) -> Self {
        Self::DomainViolation(format!(
            "inflammation values should not be negative (patient {patient}, day {day})"
        ))
    }

    /// Create an error for rows or series of incompatible length
    pub fn shape_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::ShapeMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }

    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }
}
