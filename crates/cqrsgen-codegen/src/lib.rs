//! cqrsgen-codegen - Generators turning a validated schema into classes
//!
//! This crate provides:
//! - [`AggregateGenerator`], [`CommandHandlerGenerator`], [`EventPayloadGenerator`]
//!   and [`ValueObjectGenerator`], one per artifact kind
//! - [`Pipeline`] running all of them over a schema into an [`ArtifactSink`]
//! - [`RecordCodec`] describing and evaluating the spool/hash-map conversions of
//!   payloads and value objects
//! - [`CommandRoutes`] mapping commands to their handler methods
//! - [`naming`] with the event name heuristic
//!
//! ```
//! use cqrsgen_codegen::naming::event_name;
//!
//! assert_eq!(event_name("Customer", "labelBottles"), "BottlesWereLabelled");
//! ```

mod aggregate;
mod codec;
mod command_handler;
mod error;
mod event_payload;
mod generator;
pub mod naming;
mod pipeline;
mod routes;
mod value_object;

pub use aggregate::AggregateGenerator;
pub use codec::{CodecRegistry, FieldEncoding, RecordCodec, RecordField, RecordKind};
pub use command_handler::CommandHandlerGenerator;
pub use error::{CodecError, CodecResult};
pub use event_payload::EventPayloadGenerator;
pub use generator::GeneratorConfig;
pub use pipeline::{Artifact, ArtifactSink, MemorySink, Pipeline, PipelineError};
pub use routes::{CommandRoute, CommandRoutes, RouteKind};
pub use value_object::ValueObjectGenerator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Artifact, ArtifactSink, CodecRegistry, CommandRoutes, GeneratorConfig, MemorySink,
        Pipeline, PipelineError, RecordCodec,
    };
}
