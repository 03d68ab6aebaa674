//! Error types for the card batch job.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for batch operations
pub type Result<T> = std::result::Result<T, BatchError>;

/// Fatal errors that abort the run before any output is written.
///
/// Rejected transactions are not errors; they are routed to the rejects
/// output by the processor.
#[derive(Error, Debug)]
pub enum BatchError {
    /// Failed to read an input file or write an output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file does not exist
    #[error("Could not find {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Input file exists but holds no records
    #[error("No records found in {}", path.display())]
    EmptyInput { path: PathBuf },

    /// A line could not be decoded into a record
    #[error("Malformed {record} record at line {line}: {source}")]
    Malformed {
        record: &'static str,
        line: usize,
        source: FieldError,
    },

    /// A record could not be encoded into its fixed-width layout
    #[error("Cannot encode {record} record: {source}")]
    Encode {
        record: &'static str,
        source: FieldError,
    },
}

/// Field-level decode and encode failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("expected at least {expected} characters, found {found}")]
    TooShort { expected: usize, found: usize },

    #[error("field `{field}` contains non-digit characters: {value:?}")]
    NonDigit { field: &'static str, value: String },

    #[error("field `{field}` does not fall on a character boundary")]
    NotAscii { field: &'static str },

    #[error("value {value:?} does not fit in field `{field}` ({width} characters)")]
    Overflow {
        field: &'static str,
        width: usize,
        value: String,
    },

    #[error("layout `{layout}` expects {expected} values, got {found}")]
    ValueCount {
        layout: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("value for field `{field}` has the wrong kind")]
    KindMismatch { field: &'static str },
}
