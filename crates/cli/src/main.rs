//! Command-line front end for the planner.
//!
//! Loads builds from disk and prints the requests the simulation engine
//! would receive. Run with: `planner <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Gear, Request};

/// Build inspection and request generation
#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Plan gear and builds for the combat simulator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Build a simulation request from a build file
    Request(Request),

    /// Show the gear set of a build or gear file
    Gear(Gear),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for PLANNER_ITERATIONS and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Request(cmd) => cmd.execute(),
        Command::Gear(cmd) => cmd.execute(),
    }
}
