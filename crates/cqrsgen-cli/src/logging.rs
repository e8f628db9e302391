//! Logging setup for the command line

use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// The level to log at: the configured level, raised once per `-v`.
pub fn effective_level(configured: &str, verbose: u8) -> LevelFilter {
    let configured = LevelFilter::from_str(configured).unwrap_or(LevelFilter::INFO);
    match verbose {
        0 => configured,
        1 => configured.max(LevelFilter::DEBUG),
        _ => LevelFilter::TRACE,
    }
}

/// Install a stderr subscriber; `RUST_LOG` overrides the given level.
pub fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    // Ignore the error if a subscriber is already set
    let _ = tracing::subscriber::set_global_default(subscriber);
}
