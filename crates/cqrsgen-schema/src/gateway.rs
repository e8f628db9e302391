//! Validating access to the aggregates, commands, events and value objects of a schema
//!
//! The schema follows a fixed convention:
//!
//! | element | rule |
//! |---------|------|
//! | aggregate | field `X(id: ID!): X!` of the mutation root |
//! | command | field of an aggregate returning `Boolean!` (mutator) or `X!` (factory) |
//! | event | field of the interface `XEvents` returning `Boolean!` |
//! | value object | any input type |
//!
//! Every accessor validates what it yields; the first violation aborts with
//! [`CodegenError::SchemaShapeViolation`]. [`SchemaGateway::validate`] also maps
//! every argument and input field type, failing with
//! [`CodegenError::UnsupportedType`] where a generator would.

use crate::document::{
    BOOLEAN, FLOAT, FieldDefinition, ID, INT, InputValue, STRING, SchemaDocument, TypeDefinition,
    TypeKind, TypeReference, Wrapper,
};
use cqrsgen_core::types;
use cqrsgen_core::{ClassRef, CodegenError, CodegenResult, Type};
use tracing::debug;

/// Suffix of event descriptor interfaces.
pub const EVENTS_SUFFIX: &str = "Events";

/// How a command affects its aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Creates a new aggregate; returns the aggregate type.
    Factory,
    /// Changes an existing aggregate; returns `Boolean!`.
    Mutator,
}

/// A validated command of an aggregate.
#[derive(Debug, Clone, Copy)]
pub struct Command<'a> {
    pub field: &'a FieldDefinition,
    pub kind: CommandKind,
}

impl Command<'_> {
    pub fn name(&self) -> &str {
        &self.field.name
    }

    pub fn is_factory(&self) -> bool {
        self.kind == CommandKind::Factory
    }
}

/// An `XEvents` interface paired with its aggregate `X`.
#[derive(Debug, Clone, Copy)]
pub struct EventDescriptor<'a> {
    pub aggregate: &'a TypeDefinition,
    pub interface: &'a TypeDefinition,
}

/// Element counts of a validated schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaSummary {
    pub aggregates: usize,
    pub commands: usize,
    pub events: usize,
    pub value_objects: usize,
}

/// Validating adapter between a schema document and the generators.
#[derive(Debug, Clone)]
pub struct SchemaGateway {
    document: SchemaDocument,
}

impl SchemaGateway {
    pub fn new(document: SchemaDocument) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }

    /// Every field of the mutation root, validated as an aggregate accessor.
    pub fn aggregates(&self) -> CodegenResult<Vec<&TypeDefinition>> {
        let root = self.document.mutation_type().ok_or_else(|| {
            CodegenError::shape(
                "schema",
                "a mutation root type listing the aggregates is required",
            )
        })?;
        root.fields
            .iter()
            .map(|field| {
                let aggregate = self.aggregate_of(&root.name, field)?;
                debug!(aggregate = %aggregate.name, "validated aggregate");
                Ok(aggregate)
            })
            .collect()
    }

    fn aggregate_of<'a>(
        &'a self,
        root: &str,
        field: &FieldDefinition,
    ) -> CodegenResult<&'a TypeDefinition> {
        let element = format!("{root}.{}", field.name);
        let aggregate = field
            .ty
            .non_null_name()
            .filter(|name| *name == field.name)
            .and_then(|name| self.document.get(name))
            .filter(|ty| ty.kind == TypeKind::Object)
            .ok_or_else(|| {
                CodegenError::shape(
                    &element,
                    format!(
                        "The return type of the “{0}” mutator should be “{0}!”",
                        field.name
                    ),
                )
            })?;
        match field.arguments.as_slice() {
            [id] if id.name == "id" => {
                if id.ty.non_null_name() != Some(ID) {
                    return Err(CodegenError::shape(
                        &element,
                        format!(
                            "The type of the “id” argument of the “{}” mutator should be “ID!”",
                            field.name
                        ),
                    ));
                }
            }
            _ => {
                return Err(CodegenError::shape(
                    &element,
                    format!(
                        "The only allowed argument for the “{}” mutator should be named “id”",
                        field.name
                    ),
                ));
            }
        }
        Ok(aggregate)
    }

    /// The commands of an aggregate with their kind.
    pub fn commands<'a>(&self, aggregate: &'a TypeDefinition) -> CodegenResult<Vec<Command<'a>>> {
        aggregate
            .fields
            .iter()
            .map(|field| {
                let kind = match field.ty.non_null_name() {
                    Some(BOOLEAN) => CommandKind::Mutator,
                    Some(name) if name == aggregate.name => CommandKind::Factory,
                    _ => {
                        return Err(CodegenError::shape(
                            format!("{}.{}", aggregate.name, field.name),
                            format!(
                                "The return type of the {0}'s “{1}” command should be “Boolean!” for a mutation or “{0}!” for a factory",
                                aggregate.name, field.name
                            ),
                        ));
                    }
                };
                Ok(Command { field, kind })
            })
            .collect()
    }

    /// The events declared for an aggregate; empty without an `XEvents` interface.
    pub fn events(&self, aggregate: &TypeDefinition) -> CodegenResult<Vec<&FieldDefinition>> {
        let descriptor = format!("{}{EVENTS_SUFFIX}", aggregate.name);
        let Some(interface) = self
            .document
            .get(&descriptor)
            .filter(|ty| ty.kind == TypeKind::Interface)
        else {
            return Ok(Vec::new());
        };
        interface
            .fields
            .iter()
            .map(|field| {
                if field.ty.non_null_name() == Some(BOOLEAN) {
                    Ok(field)
                } else {
                    Err(CodegenError::shape(
                        format!("{descriptor}.{}", field.name),
                        format!(
                            "The return type of the {}'s “{}” event should be “Boolean!”",
                            aggregate.name, field.name
                        ),
                    ))
                }
            })
            .collect()
    }

    /// Every interface, validated as the event descriptor of an aggregate.
    pub fn event_descriptors(&self) -> CodegenResult<Vec<EventDescriptor<'_>>> {
        let aggregates = self.aggregates()?;
        self.document
            .types()
            .filter(|ty| ty.kind == TypeKind::Interface)
            .map(|interface| {
                let aggregate_name = interface
                    .name
                    .strip_suffix(EVENTS_SUFFIX)
                    .ok_or_else(|| {
                        CodegenError::shape(
                            &interface.name,
                            "Event descriptors should be named like an aggregate with the suffix “Events”",
                        )
                    })?;
                let aggregate = aggregates
                    .iter()
                    .find(|aggregate| aggregate.name == aggregate_name)
                    .copied()
                    .ok_or_else(|| {
                        CodegenError::shape(
                            &interface.name,
                            format!(
                                "Could not find an aggregate “{aggregate_name}” for the event descriptor “{}”",
                                interface.name
                            ),
                        )
                    })?;
                Ok(EventDescriptor {
                    aggregate,
                    interface,
                })
            })
            .collect()
    }

    /// Every input type in declaration order.
    pub fn value_objects(&self) -> Vec<&TypeDefinition> {
        self.document
            .types()
            .filter(|ty| ty.kind == TypeKind::InputObject)
            .collect()
    }

    /// Run every rule and count the validated elements.
    pub fn validate(&self) -> CodegenResult<SchemaSummary> {
        let mut summary = SchemaSummary::default();
        for aggregate in self.aggregates()? {
            summary.aggregates += 1;
            for command in self.commands(aggregate)? {
                self.check_members(&command.field.arguments)?;
                summary.commands += 1;
            }
            for event in self.events(aggregate)? {
                self.check_members(&event.arguments)?;
                summary.events += 1;
            }
        }
        self.event_descriptors()?;
        for value_object in self.value_objects() {
            self.check_members(&value_object.input_fields)?;
            summary.value_objects += 1;
        }
        debug!(?summary, "validated schema");
        Ok(summary)
    }

    /// Every member type must convert, so validation fails wherever generation would.
    fn check_members(&self, members: &[InputValue]) -> CodegenResult<()> {
        let identifier = ClassRef::parse(ID);
        for member in members {
            self.convert_type(&member.ty, &identifier, "")?;
        }
        Ok(())
    }

    /// The leaf type name of a reference.
    pub fn unwrap_type<'r>(&self, reference: &'r TypeReference) -> &'r str {
        reference.leaf()
    }

    /// Map a type reference onto the type model.
    ///
    /// `ID` leaves become `identifier`, input types land in `default_namespace`.
    /// Wrappers only toggle nullability and collection-ness, whatever their depth.
    pub fn convert_type(
        &self,
        reference: &TypeReference,
        identifier: &ClassRef,
        default_namespace: &str,
    ) -> CodegenResult<Type> {
        let mut nullable = true;
        let mut collection = false;
        let mut current = reference;
        let leaf = loop {
            match current {
                TypeReference::Wrapped(Wrapper::NonNull, inner) => {
                    nullable = false;
                    current = inner;
                }
                TypeReference::Wrapped(Wrapper::List, inner) => {
                    collection = true;
                    current = inner;
                }
                TypeReference::Named(name) => break name.as_str(),
            }
        };
        let (short, namespace) = match leaf {
            ID => (identifier.short(), identifier.namespace()),
            BOOLEAN => (types::BOOL, None),
            FLOAT => (types::FLOAT, None),
            INT => (types::INT, None),
            STRING => (types::STRING, None),
            other => match self.document.get(other).map(|ty| ty.kind) {
                Some(TypeKind::InputObject) => (other, Some(default_namespace)),
                _ => return Err(CodegenError::UnsupportedType(other.to_string())),
            },
        };
        Ok(Type::new(Some(short), namespace, nullable, collection))
    }
}


#[cfg(test)]
#[path = "gateway/gateway_parameterized_tests.rs"]
mod gateway_parameterized_tests;
