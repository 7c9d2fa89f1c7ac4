use anyhow::Result;
use clap::Parser;
use todo_hours::cli::Cli;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence; --verbose raises the default to info.
    let default_directive = if cli.verbose { "todo_hours=info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli.run()
}
