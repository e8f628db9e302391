//! # cqrsgen
//!
//! Generates the classes of a CQRS/event-sourcing domain model from a GraphQL
//! schema that follows a small set of conventions:
//!
//! - every field of the mutation root names an aggregate, takes a single
//!   `id: ID!` argument and returns that aggregate
//! - an aggregate's fields are its commands, returning `Boolean!` (mutators) or
//!   the aggregate itself (factories)
//! - an interface named `<Aggregate>Events` lists the aggregate's events
//! - input types become value objects
//!
//! ## Generating
//!
//! ```
//! use cqrsgen::prelude::*;
//!
//! let sdl = "
//!     type Mutation { Order(id: ID!): Order! }
//!     type Order { place(total: Money!): Order! }
//!     input Money { amount: Float! currency: String! }
//!     interface OrderEvents { OrderWasPlaced(total: Money!): Boolean! }
//! ";
//!
//! let gateway = SchemaGateway::new(SchemaDocument::parse(sdl)?);
//! let config = GeneratorConfig::new(NamingConfig::new("Shop\\Domain"));
//! let mut sink = MemorySink::new();
//! let written = Pipeline::new(&gateway, &config).run(&mut sink)?;
//!
//! assert_eq!(written, 4);
//! assert!(sink.get("Shop\\Domain\\Aggregate\\Order").is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`cqrsgen_core`] - Type model, code blocks, classifiers, naming
//! - [`cqrsgen_schema`] - Schema document, SDL reader and validating gateway
//! - [`cqrsgen_codegen`] - Generators, record codec, routes and pipeline

// Re-export core types
pub use cqrsgen_core::{
    ArtifactKind, ArtifactNaming, ClassRef, Classifier, CodeBlock, CodegenError, CodegenResult,
    Conversion, Method, NamingConfig, Parameter, Property, RuntimeClasses, Type, Visibility,
};

// Re-export schema types
pub use cqrsgen_schema::{
    Command, CommandKind, SchemaDocument, SchemaError, SchemaGateway, SchemaResult,
    SchemaSummary, TypeReference,
};

// Re-export generators
pub use cqrsgen_codegen::{
    AggregateGenerator, Artifact, ArtifactSink, CodecError, CodecRegistry, CodecResult,
    CommandHandlerGenerator, CommandRoute, CommandRoutes, EventPayloadGenerator,
    GeneratorConfig, MemorySink, Pipeline, PipelineError, RecordCodec, RouteKind,
    ValueObjectGenerator, naming,
};

pub use serde_json;

/// Prelude module for convenient imports.
///
/// Use `use cqrsgen::prelude::*;` to import what a generation run needs:
/// - Schema: `SchemaDocument`, `SchemaGateway`
/// - Configuration: `GeneratorConfig`, `NamingConfig`, `RuntimeClasses`
/// - Running: `Pipeline`, `ArtifactSink`, `MemorySink`, `Artifact`
/// - Errors: `CodegenError`, `SchemaError`
pub mod prelude {
    pub use crate::{
        Artifact, ArtifactKind, ArtifactSink, CodegenError, CodegenResult, CommandRoutes,
        GeneratorConfig, MemorySink, NamingConfig, Pipeline, RuntimeClasses, SchemaDocument,
        SchemaError, SchemaGateway,
    };
}
