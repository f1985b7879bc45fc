use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use geophase_cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    init_logging();

    let status = Cli::parse().run()?;
    Ok(ExitCode::from(u8::try_from(status).unwrap_or(1)))
}

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
