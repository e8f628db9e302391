//! Error types for reading schema documents

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schema reading
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while reading or resolving a schema document
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The SDL text is malformed
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Two definitions share a name
    #[error("type “{0}” is defined more than once")]
    DuplicateType(String),

    /// A definition refers to a type that does not exist
    #[error("unknown type “{name}” referenced by {referenced_by}")]
    UnknownType { name: String, referenced_by: String },

    /// The schema block names an operation root that is not an object type
    #[error("root operation type “{0}” is not a defined object type")]
    UnknownRootType(String),

    /// The schema file could not be read
    #[error("failed to read schema {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SchemaError {
    pub(crate) fn syntax(line: usize, column: usize, message: impl Into<String>) -> Self {
        SchemaError::Syntax {
            line,
            column,
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
