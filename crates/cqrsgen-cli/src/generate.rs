//! Generate command implementation

use crate::config::CqrsgenConfig;
use crate::writer::FileWriter;
use anyhow::{Context, Result};
use cqrsgen_codegen::{Pipeline, PipelineError};
use cqrsgen_schema::{SchemaDocument, SchemaGateway};
use tracing::info;

/// Load the configured schema behind a gateway.
pub fn load_gateway(config: &CqrsgenConfig) -> Result<SchemaGateway> {
    let document = SchemaDocument::from_file(&config.source.schema)
        .with_context(|| format!("Failed to load schema: {:?}", config.source.schema))?;
    Ok(SchemaGateway::new(document))
}

pub fn run(config: &CqrsgenConfig, dry_run: bool) -> Result<()> {
    let gateway = load_gateway(config)?;
    let generator = config.generator_config();
    let mut writer = FileWriter::new(&config.destination.directory, &config.destination.namespace)
        .dry_run(dry_run);

    let written = Pipeline::new(&gateway, &generator)
        .run(&mut writer)
        .map_err(|err| match err {
            PipelineError::Codegen(err) => anyhow::Error::new(err).context("Generation failed"),
            PipelineError::Sink(err) => err,
        })?;

    if dry_run {
        for path in writer.written() {
            println!("{}", path.display());
        }
    }
    info!(
        files = written,
        directory = %writer.directory().display(),
        dry_run,
        "generation finished"
    );
    println!(
        "✓ {} {} files in {}",
        if dry_run { "Would write" } else { "Wrote" },
        written,
        writer.directory().display()
    );

    Ok(())
}
