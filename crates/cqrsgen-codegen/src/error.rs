//! Error types for evaluating record layouts

use thiserror::Error;

/// Result type alias for record codec evaluation
pub type CodecResult<T> = Result<T, CodecError>;

/// Error type for winding up and unwinding records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A non-nullable field without a value
    #[error("{record}.{field} is required")]
    MissingField { record: String, field: String },

    /// A spool whose length differs from the record's field count
    #[error("{record} expects a spool of {expected} values, got {found}")]
    Arity {
        record: String,
        expected: usize,
        found: usize,
    },

    /// A nested value object without a registered layout
    #[error("no record layout registered for {0}")]
    UnknownRecord(String),

    /// A value of the wrong JSON shape
    #[error("{record}.{field}: {message}")]
    Malformed {
        record: String,
        field: String,
        message: String,
    },
}

impl CodecError {
    pub(crate) fn malformed(record: &str, field: &str, message: impl Into<String>) -> Self {
        CodecError::Malformed {
            record: record.to_string(),
            field: field.to_string(),
            message: message.into(),
        }
    }
}
