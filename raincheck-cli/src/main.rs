//! Binary crate for the `raincheck` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Prompting for the city and interactive configuration
//! - Printing the verdict

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the verdict.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
