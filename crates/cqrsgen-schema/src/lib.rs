//! cqrsgen-schema - Schema documents and the validating gateway
//!
//! This crate turns GraphQL SDL into the elements the generators work on:
//! - [`SchemaDocument`] parsed from SDL text or a file
//! - [`TypeReference`] as an explicit wrapper/leaf union
//! - [`SchemaGateway`] validating aggregates, commands, events and value objects
//! - [`SchemaError`] for reading failures

mod document;
mod error;
mod gateway;
mod parser;

pub use document::{
    BOOLEAN, BUILTIN_SCALARS, FLOAT, FieldDefinition, ID, INT, InputValue, STRING, SchemaDocument,
    TypeDefinition, TypeKind, TypeReference, Wrapper,
};
pub use error::{SchemaError, SchemaResult};
pub use gateway::{
    Command, CommandKind, EVENTS_SUFFIX, EventDescriptor, SchemaGateway, SchemaSummary,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Command, CommandKind, FieldDefinition, InputValue, SchemaDocument, SchemaError,
        SchemaGateway, SchemaResult, TypeDefinition, TypeReference,
    };
}
