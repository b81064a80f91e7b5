mod args;
mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::Parser;

use args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    commands::run(cli)
}
