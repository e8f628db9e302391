//! Generation pipeline
//!
//! ```text
//! SchemaGateway::validate
//!     ↓
//!  per aggregate: aggregate, command handler, one payload per event
//!  per input type: value object
//!     ↓
//!  name collision check
//!     ↓
//!  ArtifactSink (one call per artifact)
//! ```
//!
//! Nothing reaches a sink unless the whole schema validates, every artifact
//! has a distinct fully qualified name and no file imports a short name it
//! already binds.

use crate::aggregate::AggregateGenerator;
use crate::command_handler::CommandHandlerGenerator;
use crate::event_payload::EventPayloadGenerator;
use crate::generator::GeneratorConfig;
use crate::value_object::ValueObjectGenerator;
use cqrsgen_core::{ArtifactKind, ClassRef, Classifier, CodegenError, CodegenResult};
use cqrsgen_schema::SchemaGateway;
use std::collections::{BTreeMap, HashSet};
use std::convert::Infallible;
use tracing::{debug, info};

/// One generated class.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub classifier: Classifier,
}

impl Artifact {
    pub fn class_ref(&self) -> ClassRef {
        self.classifier.class_ref()
    }

    /// The source file contents.
    pub fn render(&self) -> String {
        self.classifier.to_string()
    }
}

/// Destination of generated artifacts.
pub trait ArtifactSink {
    type Error;

    fn accept(&mut self, artifact: &Artifact) -> Result<(), Self::Error>;
}

/// Keeps rendered artifacts in memory, keyed by fully qualified class name.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, class: &str) -> Option<&str> {
        self.files.get(class).map(String::as_str)
    }

    pub fn files(&self) -> &BTreeMap<String, String> {
        &self.files
    }
}

impl ArtifactSink for MemorySink {
    type Error = Infallible;

    fn accept(&mut self, artifact: &Artifact) -> Result<(), Self::Error> {
        self.files
            .insert(artifact.class_ref().full_name(), artifact.render());
        Ok(())
    }
}

/// Runs the four generators over a whole schema.
pub struct Pipeline<'a> {
    gateway: &'a SchemaGateway,
    config: &'a GeneratorConfig,
}

impl<'a> Pipeline<'a> {
    pub fn new(gateway: &'a SchemaGateway, config: &'a GeneratorConfig) -> Self {
        Self { gateway, config }
    }

    /// Validate the schema and build every artifact.
    pub fn generate(&self) -> CodegenResult<Vec<Artifact>> {
        let summary = self.gateway.validate()?;
        let aggregates = AggregateGenerator::new(self.gateway, self.config);
        let handlers = CommandHandlerGenerator::new(self.gateway, self.config);
        let payloads = EventPayloadGenerator::new(self.gateway, self.config);
        let value_objects = ValueObjectGenerator::new(self.gateway, self.config);

        let mut artifacts = Vec::new();
        for aggregate in self.gateway.aggregates()? {
            artifacts.push(artifact(ArtifactKind::Aggregate, aggregates.process(aggregate)?));
            artifacts.push(artifact(
                ArtifactKind::CommandHandler,
                handlers.process(aggregate)?,
            ));
            for event in self.gateway.events(aggregate)? {
                artifacts.push(artifact(
                    ArtifactKind::EventPayload,
                    payloads.process(event, aggregate)?,
                ));
            }
        }
        for value_object in self.gateway.value_objects() {
            artifacts.push(artifact(
                ArtifactKind::ValueObject,
                value_objects.process(value_object)?,
            ));
        }

        check_collisions(&artifacts)?;
        info!(
            artifacts = artifacts.len(),
            aggregates = summary.aggregates,
            events = summary.events,
            value_objects = summary.value_objects,
            "generated artifacts"
        );
        Ok(artifacts)
    }

    /// Generate and hand every artifact to `sink`, returning how many were written.
    pub fn run<S: ArtifactSink>(&self, sink: &mut S) -> Result<usize, PipelineError<S::Error>> {
        let artifacts = self.generate().map_err(PipelineError::Codegen)?;
        for artifact in &artifacts {
            sink.accept(artifact).map_err(PipelineError::Sink)?;
        }
        Ok(artifacts.len())
    }
}

/// Failure of [`Pipeline::run`].
#[derive(Debug, thiserror::Error)]
pub enum PipelineError<E> {
    #[error(transparent)]
    Codegen(CodegenError),

    #[error("writing artifact failed: {0}")]
    Sink(E),
}

fn artifact(kind: ArtifactKind, classifier: Classifier) -> Artifact {
    debug!(%kind, class = %classifier.class_ref(), "generated artifact");
    Artifact { kind, classifier }
}

fn check_collisions(artifacts: &[Artifact]) -> CodegenResult<()> {
    let mut seen = HashSet::new();
    for artifact in artifacts {
        let classifier = &artifact.classifier;
        if !seen.insert((classifier.namespace(), classifier.name())) {
            return Err(CodegenError::NameCollision {
                namespace: classifier.namespace().to_string(),
                name: classifier.name().to_string(),
            });
        }
        if let Some(name) = classifier.clashing_import() {
            return Err(CodegenError::NameCollision {
                namespace: classifier.namespace().to_string(),
                name,
            });
        }
    }
    Ok(())
}
