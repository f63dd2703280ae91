//! analogmove CLI - replay movement traces and manage configuration
//!
//! # Commands
//!
//! - `analogmove replay <trace.toml>` - Run a trace headlessly and check expectations
//! - `analogmove config show` - Print the effective configuration
//! - `analogmove config init` - Write a default config.toml
//! - `analogmove curve` - Print the response curve table
//!
//! Logging is controlled with `RUST_LOG` (default `info`).

mod config;
mod curve;
mod replay;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// analogmove CLI - analog keyboard movement tooling
#[derive(Parser)]
#[command(name = "analogmove")]
#[command(about = "Analog keyboard movement tooling")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a trace file and check its expectations
    Replay(replay::ReplayArgs),

    /// Show or create the configuration file
    #[command(subcommand)]
    Config(config::ConfigCommand),

    /// Print the response curve
    Curve(curve::CurveArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay(args) => replay::execute(args),
        Commands::Config(command) => config::execute(command),
        Commands::Curve(args) => curve::execute(args),
    }
}
