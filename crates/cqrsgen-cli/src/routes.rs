//! Routes command implementation

use crate::config::CqrsgenConfig;
use crate::generate::load_gateway;
use anyhow::{Context, Result};
use cqrsgen_codegen::CommandRoutes;
use std::path::PathBuf;
use tracing::info;

pub fn run(config: &CqrsgenConfig, output: Option<PathBuf>) -> Result<()> {
    let gateway = load_gateway(config)?;
    let routes = CommandRoutes::build(&gateway, &config.generator_config().naming)
        .context("Failed to build command routes")?;
    let json = serde_json::to_string_pretty(&routes)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json + "\n")
                .with_context(|| format!("Failed to write routes: {:?}", path))?;
            info!(routes = routes.len(), path = %path.display(), "wrote command routes");
        }
        None => println!("{json}"),
    }

    Ok(())
}
