//! Command routing table
//!
//! Maps `(aggregate, command)` to the generated handler class and method, built
//! once from the schema. A serving layer resolves incoming mutations through
//! this table instead of looking handler methods up by name at call time.

use cqrsgen_core::{ArtifactKind, CodegenResult, NamingConfig};
use cqrsgen_schema::{CommandKind, SchemaGateway};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a routed command responds with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    /// Responds with the identifier of the created aggregate
    Factory,
    /// Responds with `true`
    Mutator,
}

impl From<CommandKind> for RouteKind {
    fn from(kind: CommandKind) -> Self {
        match kind {
            CommandKind::Factory => RouteKind::Factory,
            CommandKind::Mutator => RouteKind::Mutator,
        }
    }
}

/// Where a command is handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRoute {
    /// Fully qualified handler class
    pub handler_class: String,
    pub handler_method: String,
    pub kind: RouteKind,
}

/// Command routes by aggregate name, then command name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandRoutes {
    routes: BTreeMap<String, BTreeMap<String, CommandRoute>>,
}

impl CommandRoutes {
    /// Build the table for every command of every aggregate.
    pub fn build(gateway: &SchemaGateway, naming: &NamingConfig) -> CodegenResult<Self> {
        let mut routes = BTreeMap::new();
        for aggregate in gateway.aggregates()? {
            let handler = naming
                .class_ref(ArtifactKind::CommandHandler, &aggregate.name, None)
                .full_name();
            let commands = gateway
                .commands(aggregate)?
                .into_iter()
                .map(|command| {
                    let route = CommandRoute {
                        handler_class: handler.clone(),
                        handler_method: command.name().to_string(),
                        kind: command.kind.into(),
                    };
                    (command.name().to_string(), route)
                })
                .collect();
            routes.insert(aggregate.name.clone(), commands);
        }
        Ok(Self { routes })
    }

    pub fn resolve(&self, aggregate: &str, command: &str) -> Option<&CommandRoute> {
        self.routes.get(aggregate)?.get(command)
    }

    pub fn aggregates(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Number of routed commands.
    pub fn len(&self) -> usize {
        self.routes.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
