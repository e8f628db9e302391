//! Error types for code generation

use thiserror::Error;

/// Result type alias for code generation operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for code generation operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// The schema breaks one of the aggregate/command/event shape rules
    #[error("schema shape violation at {element}: {expected}")]
    SchemaShapeViolation { element: String, expected: String },

    /// A type reference cannot be mapped onto the type model
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Two artifacts share a class name, or a file binds one short name twice
    #[error("name collision: {namespace}\\{name} is declared more than once")]
    NameCollision { namespace: String, name: String },
}

impl CodegenError {
    /// Shorthand for a shape violation on a schema element
    pub fn shape(element: impl Into<String>, expected: impl Into<String>) -> Self {
        CodegenError::SchemaShapeViolation {
            element: element.into(),
            expected: expected.into(),
        }
    }

    /// Returns a stable error code suitable for process exit statuses
    pub fn error_code(&self) -> u32 {
        match self {
            CodegenError::SchemaShapeViolation { .. } => 1,
            CodegenError::UnsupportedType(_) => 2,
            CodegenError::NameCollision { .. } => 3,
        }
    }
}
