//! Configuration parsing and validation

use anyhow::{Context, Result};
use cqrsgen_codegen::GeneratorConfig;
use cqrsgen_core::{ArtifactNaming, NamingConfig, RuntimeClasses};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// cqrsgen.toml structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CqrsgenConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    pub source: SourceSection,

    pub destination: DestinationSection,

    #[serde(default)]
    pub runtime: RuntimeClasses,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    /// GraphQL SDL file
    pub schema: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationSection {
    /// Directory the root namespace maps to
    pub directory: PathBuf,

    /// Root namespace of every generated class
    pub namespace: String,

    #[serde(default)]
    pub aggregate: ArtifactSection,

    #[serde(default)]
    pub handler: ArtifactSection,

    #[serde(default)]
    pub event_payload: ArtifactSection,

    #[serde(default)]
    pub value_object: ArtifactSection,
}

/// Overrides of one artifact kind's naming; unset keys keep the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactSection {
    #[serde(default)]
    pub sub_namespace: Option<String>,

    #[serde(default)]
    pub prefix: Option<String>,

    #[serde(default)]
    pub suffix: Option<String>,
}

impl ArtifactSection {
    fn apply(&self, default: ArtifactNaming) -> ArtifactNaming {
        let mut naming = match &self.sub_namespace {
            Some(sub_namespace) => ArtifactNaming::new(sub_namespace.as_str()),
            None => default,
        };
        if let Some(prefix) = &self.prefix {
            naming.prefix = prefix.clone();
        }
        if let Some(suffix) = &self.suffix {
            naming.suffix = suffix.clone();
        }
        naming
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CqrsgenConfig {
    /// Load configuration from a file
    ///
    /// Relative schema and destination paths are resolved against the directory
    /// holding the file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration: {:?}", path))?;

        let mut config = Self::from_str(&content)?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    /// Parse configuration from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    fn rebase(&mut self, base: &Path) {
        if self.source.schema.is_relative() {
            self.source.schema = base.join(&self.source.schema);
        }
        if self.destination.directory.is_relative() {
            self.destination.directory = base.join(&self.destination.directory);
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.source.schema.as_os_str().is_empty() {
            anyhow::bail!("Schema path cannot be empty");
        }

        if self.destination.directory.as_os_str().is_empty() {
            anyhow::bail!("Destination directory cannot be empty");
        }

        if self.destination.namespace.trim_matches('\\').is_empty() {
            anyhow::bail!("Destination namespace cannot be empty");
        }

        if !is_namespace(&self.destination.namespace, false) {
            anyhow::bail!("Invalid destination namespace: {}", self.destination.namespace);
        }

        let sections = [
            ("aggregate", &self.destination.aggregate),
            ("handler", &self.destination.handler),
            ("event_payload", &self.destination.event_payload),
            ("value_object", &self.destination.value_object),
        ];
        for (kind, section) in sections {
            if let Some(sub_namespace) = &section.sub_namespace
                && !is_namespace(sub_namespace, true)
            {
                anyhow::bail!("Invalid sub-namespace for {}: {}", kind, sub_namespace);
            }
            for affix in [&section.prefix, &section.suffix].into_iter().flatten() {
                if !affix.chars().all(is_identifier_char) {
                    anyhow::bail!("Invalid class name affix for {}: {}", kind, affix);
                }
            }
        }

        LevelFilter::from_str(&self.log_level)
            .map_err(|_| anyhow::anyhow!("Invalid log level: {}", self.log_level))?;

        Ok(())
    }

    /// Naming and runtime classes for the generators
    pub fn generator_config(&self) -> GeneratorConfig {
        let destination = &self.destination;
        let defaults = NamingConfig::new(destination.namespace.as_str());
        let naming = NamingConfig {
            aggregate: destination.aggregate.apply(defaults.aggregate),
            handler: destination.handler.apply(defaults.handler),
            event_payload: destination.event_payload.apply(defaults.event_payload),
            value_object: destination.value_object.apply(defaults.value_object),
            root_namespace: defaults.root_namespace,
        };
        GeneratorConfig::new(naming).with_runtime(self.runtime.clone())
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_namespace(value: &str, allow_placeholder: bool) -> bool {
    value
        .chars()
        .all(|c| is_identifier_char(c) || c == '\\' || (allow_placeholder && c == '#'))
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
