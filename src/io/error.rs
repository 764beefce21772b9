//! Error types for parsing, configuration and file handling

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all dial operations
#[derive(Debug, Error)]
pub enum DialError {
    /// An instruction line could not be parsed
    #[error(
        "Invalid instruction{} '{content}': {reason}",
        .line.map_or_else(String::new, |n| format!(" on line {n}"))
    )]
    Parse {
        /// 1-based line number within the input, when parsed from a file
        line: Option<usize>,
        /// The offending line, trimmed
        content: String,
        /// Why the line was rejected
        reason: String,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for dial results
pub type Result<T> = std::result::Result<T, DialError>;

impl From<std::io::Error> for DialError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl DialError {
    /// Attach a line number to a parse error produced without one
    #[must_use]
    pub fn at_line(self, line_number: usize) -> Self {
        match self {
            Self::Parse {
                content, reason, ..
            } => Self::Parse {
                line: Some(line_number),
                content,
                reason,
            },
            other => other,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DialError {
    DialError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a parse error for a line whose position is not known yet
pub fn parse_error(content: &str, reason: &impl ToString) -> DialError {
    DialError::Parse {
        line: None,
        content: content.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation it came from
pub fn io_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> DialError {
    DialError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
