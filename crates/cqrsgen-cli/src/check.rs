//! Check command implementation

use crate::config::CqrsgenConfig;
use crate::generate::load_gateway;
use anyhow::{Context, Result};

pub fn run(config: &CqrsgenConfig) -> Result<()> {
    println!("Checking schema: {}", config.source.schema.display());

    let gateway = load_gateway(config)?;
    let summary = gateway.validate().context("Schema violates the aggregate conventions")?;

    println!("✓ Aggregates: {}", summary.aggregates);
    println!("✓ Commands: {}", summary.commands);
    println!("✓ Events: {}", summary.events);
    println!("✓ Value objects: {}", summary.value_objects);
    println!("\nSchema is valid!");

    Ok(())
}
