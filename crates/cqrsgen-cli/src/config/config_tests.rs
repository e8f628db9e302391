#![allow(non_snake_case)]

use super::*;
use cqrsgen_core::ArtifactKind;

const MINIMAL: &str = r#"
[source]
schema = "schema.graphql"

[destination]
directory = "src/Domain"
namespace = "Acme\\Domain"
"#;

// Configuration parsing tests

#[test]
fn CqrsgenConfig___from_str___parses_full_configuration() {
    let toml = r#"
log_level = "debug"

[source]
schema = "schema.graphql"

[destination]
directory = "src/Domain"
namespace = "Acme\\Domain"

[destination.handler]
sub_namespace = "Application\\Handler"
suffix = "Handler"

[destination.event_payload]
sub_namespace = "Event\\#"
prefix = "On"

[runtime]
aggregate_root = "App\\Support\\AggregateRoot"
"#;

    let config = CqrsgenConfig::from_str(toml).unwrap();

    assert_eq!(config.log_level, "debug");
    assert_eq!(config.source.schema, PathBuf::from("schema.graphql"));
    assert_eq!(config.destination.namespace, "Acme\\Domain");
    assert_eq!(config.destination.handler.suffix.as_deref(), Some("Handler"));
    assert_eq!(config.runtime.aggregate_root.short(), "AggregateRoot");
    assert_eq!(
        config.runtime.windable.full_name(),
        "Kepawni\\Twilted\\Windable"
    );
}

#[test]
fn CqrsgenConfig___from_str___defaults_log_level_and_sections() {
    let config = CqrsgenConfig::from_str(MINIMAL).unwrap();

    assert_eq!(config.log_level, "info");
    assert!(config.destination.aggregate.sub_namespace.is_none());
    assert_eq!(config.runtime, RuntimeClasses::default());
}

#[test]
fn CqrsgenConfig___from_str___rejects_missing_destination() {
    let toml = r#"
[source]
schema = "schema.graphql"
"#;

    assert!(CqrsgenConfig::from_str(toml).is_err());
}

// Validation tests

#[test]
fn CqrsgenConfig___validate___accepts_minimal_configuration() {
    let config = CqrsgenConfig::from_str(MINIMAL).unwrap();

    assert!(config.validate().is_ok());
}

#[test]
fn CqrsgenConfig___validate___rejects_empty_namespace() {
    let mut config = CqrsgenConfig::from_str(MINIMAL).unwrap();
    config.destination.namespace = "\\".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn CqrsgenConfig___validate___rejects_empty_schema_path() {
    let mut config = CqrsgenConfig::from_str(MINIMAL).unwrap();
    config.source.schema = PathBuf::new();

    assert!(config.validate().is_err());
}

#[test]
fn CqrsgenConfig___validate___rejects_invalid_sub_namespace() {
    let mut config = CqrsgenConfig::from_str(MINIMAL).unwrap();
    config.destination.value_object.sub_namespace = Some("Value Object".to_string());

    let err = config.validate().unwrap_err();

    assert_eq!(err.to_string(), "Invalid sub-namespace for value_object: Value Object");
}

#[test]
fn CqrsgenConfig___validate___accepts_aggregate_placeholder_only_in_sub_namespace() {
    let mut config = CqrsgenConfig::from_str(MINIMAL).unwrap();
    config.destination.event_payload.sub_namespace = Some("Event\\#".to_string());
    assert!(config.validate().is_ok());

    config.destination.namespace = "Acme\\#".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn CqrsgenConfig___validate___rejects_unknown_log_level() {
    let mut config = CqrsgenConfig::from_str(MINIMAL).unwrap();
    config.log_level = "chatty".to_string();

    assert!(config.validate().is_err());
}

// Conversion tests

#[test]
fn CqrsgenConfig___generator_config___keeps_defaults_for_missing_sections() {
    let config = CqrsgenConfig::from_str(MINIMAL).unwrap();

    let generator = config.generator_config();

    assert_eq!(generator.naming, NamingConfig::new("Acme\\Domain"));
    assert_eq!(
        generator
            .naming
            .namespace(ArtifactKind::EventPayload, Some("Invoice")),
        "Acme\\Domain\\Event\\Invoice"
    );
}

#[test]
fn CqrsgenConfig___generator_config___applies_overrides() {
    let mut config = CqrsgenConfig::from_str(MINIMAL).unwrap();
    config.destination.handler = ArtifactSection {
        sub_namespace: Some("Application".to_string()),
        prefix: Some("Cqrs".to_string()),
        suffix: None,
    };

    let generator = config.generator_config();

    assert_eq!(
        generator
            .naming
            .class_ref(ArtifactKind::CommandHandler, "Invoice", None)
            .full_name(),
        "Acme\\Domain\\Application\\CqrsInvoiceHandler"
    );
}

#[test]
fn CqrsgenConfig___generator_config___empty_suffix_overrides_default() {
    let toml = format!("{MINIMAL}\n[destination.handler]\nsuffix = \"\"\n");
    let config = CqrsgenConfig::from_str(&toml).unwrap();

    let generator = config.generator_config();

    assert_eq!(generator.naming.handler.suffix, "");
}

#[test]
fn CqrsgenConfig___from_file___resolves_paths_next_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cqrsgen.toml");
    std::fs::write(&path, MINIMAL).unwrap();

    let config = CqrsgenConfig::from_file(&path).unwrap();

    assert_eq!(config.source.schema, dir.path().join("schema.graphql"));
    assert_eq!(config.destination.directory, dir.path().join("src/Domain"));
}

#[test]
fn CqrsgenConfig___from_file___missing_file_mentions_path() {
    let err = CqrsgenConfig::from_file("/nonexistent/cqrsgen.toml").unwrap_err();

    assert!(err.to_string().contains("cqrsgen.toml"));
}
