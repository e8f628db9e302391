//! cqrsgen CLI - CQRS/event-sourcing class generator
//!
//! Commands:
//! - `cqrsgen generate` - Write every class generated from the schema
//! - `cqrsgen check` - Validate the schema against the aggregate conventions
//! - `cqrsgen routes` - Emit the command routing table as JSON

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::CqrsgenConfig;
use std::path::PathBuf;

mod check;
mod config;
mod generate;
mod logging;
mod routes;
mod writer;

#[derive(Parser)]
#[command(name = "cqrsgen")]
#[command(author, version, about = "Generate CQRS/event-sourcing classes from a GraphQL schema", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "cqrsgen.toml")]
    config: PathBuf,

    /// Log more; repeat for trace output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate aggregates, command handlers, event payloads and value objects
    Generate {
        /// List target files without writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate the schema and print what would be generated
    Check,

    /// Print the command routing table as JSON
    Routes {
        /// Write the table to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CqrsgenConfig::from_file(&cli.config)?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration: {:?}", cli.config))?;
    logging::init_logging(logging::effective_level(&config.log_level, cli.verbose));

    match cli.command {
        Commands::Generate { dry_run } => {
            generate::run(&config, dry_run)?;
        }
        Commands::Check => {
            check::run(&config)?;
        }
        Commands::Routes { output } => {
            routes::run(&config, output)?;
        }
    }

    Ok(())
}
