//! Naming and runtime class configuration

use crate::types::{ClassRef, trim_ns};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder in a sub-namespace replaced by the owning aggregate's name.
pub const AGGREGATE_PLACEHOLDER: char = '#';

/// The four kinds of generated artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Aggregate,
    CommandHandler,
    EventPayload,
    ValueObject,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Aggregate => write!(f, "aggregate"),
            ArtifactKind::CommandHandler => write!(f, "command handler"),
            ArtifactKind::EventPayload => write!(f, "event payload"),
            ArtifactKind::ValueObject => write!(f, "value object"),
        }
    }
}

/// Name and namespace convention for one artifact kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactNaming {
    /// Namespace below the root namespace; `#` is replaced by the aggregate name
    pub sub_namespace: String,

    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub suffix: String,
}

impl ArtifactNaming {
    pub fn new(sub_namespace: impl Into<String>) -> Self {
        Self {
            sub_namespace: sub_namespace.into(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// `prefix + element + suffix`
    pub fn class_name(&self, element: &str) -> String {
        format!("{}{element}{}", self.prefix, self.suffix)
    }

    /// The sub-namespace with the aggregate placeholder resolved.
    pub fn resolved_sub_namespace(&self, aggregate: Option<&str>) -> String {
        match aggregate {
            Some(aggregate) => self
                .sub_namespace
                .replace(AGGREGATE_PLACEHOLDER, aggregate),
            None => self.sub_namespace.clone(),
        }
    }
}

/// Naming of every artifact kind below a shared root namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    pub root_namespace: String,

    #[serde(default = "default_aggregate")]
    pub aggregate: ArtifactNaming,

    #[serde(default = "default_handler")]
    pub handler: ArtifactNaming,

    #[serde(default = "default_event_payload")]
    pub event_payload: ArtifactNaming,

    #[serde(default = "default_value_object")]
    pub value_object: ArtifactNaming,
}

fn default_aggregate() -> ArtifactNaming {
    ArtifactNaming::new("Aggregate")
}

fn default_handler() -> ArtifactNaming {
    ArtifactNaming::new("Handler").with_suffix("Handler")
}

fn default_event_payload() -> ArtifactNaming {
    ArtifactNaming::new("Event\\#")
}

fn default_value_object() -> ArtifactNaming {
    ArtifactNaming::new("ValueObject")
}

impl NamingConfig {
    /// Default artifact naming below `root_namespace`.
    pub fn new(root_namespace: impl Into<String>) -> Self {
        Self {
            root_namespace: root_namespace.into(),
            aggregate: default_aggregate(),
            handler: default_handler(),
            event_payload: default_event_payload(),
            value_object: default_value_object(),
        }
    }

    pub fn artifact(&self, kind: ArtifactKind) -> &ArtifactNaming {
        match kind {
            ArtifactKind::Aggregate => &self.aggregate,
            ArtifactKind::CommandHandler => &self.handler,
            ArtifactKind::EventPayload => &self.event_payload,
            ArtifactKind::ValueObject => &self.value_object,
        }
    }

    /// Root namespace plus the artifact's sub-namespace, without outer separators.
    pub fn namespace(&self, kind: ArtifactKind, aggregate: Option<&str>) -> String {
        let sub = self.artifact(kind).resolved_sub_namespace(aggregate);
        [trim_ns(&self.root_namespace), trim_ns(&sub)]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\\")
    }

    pub fn class_name(&self, kind: ArtifactKind, element: &str) -> String {
        self.artifact(kind).class_name(element)
    }

    /// Fully resolved class of the artifact generated for `element`.
    pub fn class_ref(&self, kind: ArtifactKind, element: &str, aggregate: Option<&str>) -> ClassRef {
        ClassRef::new(
            &self.namespace(kind, aggregate),
            &self.class_name(kind, element),
        )
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self::new("")
    }
}

/// Runtime library classes referenced by generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeClasses {
    #[serde(default = "default_aggregate_root")]
    pub aggregate_root: ClassRef,

    #[serde(default = "default_command_handler")]
    pub command_handler: ClassRef,

    /// Contract type of identifier arguments
    #[serde(default = "default_entity_identifier")]
    pub entity_identifier: ClassRef,

    /// Concrete identifier class used to unfold identifiers
    #[serde(default = "default_aggregate_identifier")]
    pub aggregate_identifier: ClassRef,

    #[serde(default = "default_windable")]
    pub windable: ClassRef,

    #[serde(default = "default_event_payload_base")]
    pub event_payload_base: ClassRef,

    #[serde(default = "default_value_object_base")]
    pub value_object_base: ClassRef,

    #[serde(default = "default_resolve_info")]
    pub resolve_info: ClassRef,
}

fn default_aggregate_root() -> ClassRef {
    ClassRef::parse("Kepawni\\Twilted\\Basic\\SimpleAggregateRoot")
}

fn default_command_handler() -> ClassRef {
    ClassRef::parse("Kepawni\\Twilted\\Basic\\SimpleCommandHandler")
}

fn default_entity_identifier() -> ClassRef {
    ClassRef::parse("Kepawni\\Twilted\\EntityIdentifier")
}

fn default_aggregate_identifier() -> ClassRef {
    ClassRef::parse("Kepawni\\Twilted\\Basic\\AggregateUuid")
}

fn default_windable() -> ClassRef {
    ClassRef::parse("Kepawni\\Twilted\\Windable")
}

fn default_event_payload_base() -> ClassRef {
    ClassRef::parse("Kepawni\\Serge\\Infrastructure\\AbstractEventPayloadBase")
}

fn default_value_object_base() -> ClassRef {
    ClassRef::parse("Kepawni\\Serge\\Infrastructure\\AbstractValueObjectBase")
}

fn default_resolve_info() -> ClassRef {
    ClassRef::parse("GraphQL\\Type\\Definition\\ResolveInfo")
}

impl Default for RuntimeClasses {
    fn default() -> Self {
        Self {
            aggregate_root: default_aggregate_root(),
            command_handler: default_command_handler(),
            entity_identifier: default_entity_identifier(),
            aggregate_identifier: default_aggregate_identifier(),
            windable: default_windable(),
            event_payload_base: default_event_payload_base(),
            value_object_base: default_value_object_base(),
            resolve_info: default_resolve_info(),
        }
    }
}
