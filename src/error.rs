//! Error types for the conversion pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the conversion pipeline.
///
/// Each variant maps to a stable process exit code via [`ConvertError::exit_code`]
/// so scripted callers can distinguish failure kinds without parsing log text.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source text file does not exist.
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The source text file exists but could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Extracted columns disagree on row count and the caller asked to fail
    /// rather than truncate.
    #[error("column {column} has {found} values but expected {expected}")]
    LengthMismatch {
        /// 1-based column number.
        column: usize,
        expected: usize,
        found: usize,
    },

    /// A combined row could not be parsed back into fields (typically an
    /// inconsistent field count against the header row).
    #[error("malformed row {row}: {message}")]
    MalformedRow {
        /// 1-based data row number; 0 for the header row.
        row: usize,
        message: String,
    },

    /// The combined rows could not be serialized as delimited text.
    #[error("failed to encode delimited rows: {0}")]
    Delimited(String),

    /// The spreadsheet could not be built or saved.
    #[error("failed to write spreadsheet '{}': {message}", path.display())]
    SpreadsheetWrite { path: PathBuf, message: String },

    /// The scratch directory or an intermediate file could not be written.
    #[error("scratch path '{}': {source}", path.display())]
    Scratch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A `--fields` layout string could not be parsed.
    #[error("invalid field layout: {0}")]
    Layout(String),
}

impl ConvertError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::InputNotFound { .. } => 2,
            ConvertError::Read { .. } => 3,
            ConvertError::LengthMismatch { .. } => 4,
            ConvertError::MalformedRow { .. } => 5,
            ConvertError::Delimited(_) => 6,
            ConvertError::SpreadsheetWrite { .. } => 7,
            ConvertError::Scratch { .. } => 8,
            ConvertError::Layout(_) => 9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let errors = [
            ConvertError::InputNotFound {
                path: PathBuf::from("x"),
            },
            ConvertError::Read {
                path: PathBuf::from("x"),
                source: io::Error::other("boom"),
            },
            ConvertError::LengthMismatch {
                column: 2,
                expected: 3,
                found: 1,
            },
            ConvertError::MalformedRow {
                row: 1,
                message: "bad".to_string(),
            },
            ConvertError::Delimited("bad".to_string()),
            ConvertError::SpreadsheetWrite {
                path: PathBuf::from("x"),
                message: "bad".to_string(),
            },
            ConvertError::Scratch {
                path: PathBuf::from("x"),
                source: io::Error::other("boom"),
            },
            ConvertError::Layout("bad".to_string()),
        ];

        let mut codes: Vec<i32> = errors.iter().map(ConvertError::exit_code).collect();
        assert!(codes.iter().all(|&c| c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_display_includes_path() {
        let err = ConvertError::InputNotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert!(err.to_string().contains("missing.txt"));
    }
}
