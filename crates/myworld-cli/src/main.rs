//! MyWorld food chain entry point.

use std::error::Error;

use myworld_core::sink::ConsoleSink;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr; stdout carries only the food chain lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting MyWorld food chain");

    let mut sink = ConsoleSink::stdout();
    myworld_cli::run(&mut sink)?;

    tracing::info!("All worlds ran");
    Ok(())
}
