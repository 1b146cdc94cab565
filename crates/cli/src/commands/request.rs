//! Build a simulation request from a build file
//!
//! Loads the build, applies planner configuration and prints the request as
//! JSON or as a hex-encoded wire frame.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use planner_content::{BuildLoader, ConfigLoader};
use planner_core::{PlannerConfig, wire};

/// Build a simulation request from a build file
#[derive(Parser)]
pub struct Request {
    /// Build file (TOML)
    #[arg(value_name = "BUILD")]
    build: PathBuf,

    /// Kind of request to build
    #[arg(short, long, value_enum, default_value = "individual-sim")]
    kind: RequestKind,

    /// Planner configuration file (TOML); defaults to environment variables
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Simulation iterations (overrides configuration)
    #[arg(short, long, value_name = "N")]
    iterations: Option<i32>,

    /// Ask the engine for a combat log
    #[arg(long)]
    debug: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RequestKind {
    /// Character sheet stats
    ComputeStats,
    /// Single-player simulation
    IndividualSim,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Length-prefixed bincode frame, hex encoded
    Wire,
}

impl Request {
    pub fn execute(self) -> Result<()> {
        let config = self.resolve_config()?;

        let build = BuildLoader::load(&self.build)
            .with_context(|| format!("Failed to load build: {}", self.build.display()))?;
        let class = build.class.class();
        let session = build.into_session()?;

        eprintln!(
            "{} {} ({})",
            style("Build:").bold().cyan(),
            self.build.display(),
            class
        );

        match self.kind {
            RequestKind::ComputeStats => {
                let request = session.compute_stats_request()?;
                self.print(&request)
            }
            RequestKind::IndividualSim => {
                eprintln!(
                    "{} {} iterations{}",
                    style("Sim:").bold().cyan(),
                    config.iterations,
                    if config.debug { ", debug log" } else { "" }
                );
                let request = session.individual_sim_request(config.iterations, config.debug)?;
                self.print(&request)
            }
        }
    }

    fn resolve_config(&self) -> Result<PlannerConfig> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => PlannerConfig::from_env(),
        };
        if let Some(iterations) = self.iterations {
            config = config.with_iterations(iterations);
        }
        if self.debug {
            config = config.with_debug(true);
        }
        tracing::debug!(?config, "resolved planner config");
        Ok(config)
    }

    fn print<T: serde::Serialize>(&self, request: &T) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(request)
                    .context("Failed to serialize request to JSON")?;
                println!("{json}");
            }
            OutputFormat::Wire => {
                let frame = wire::encode_frame(request)?;
                eprintln!("{} {} bytes", style("Frame:").bold().cyan(), frame.len());
                println!("{}", hex::encode(frame));
            }
        }
        Ok(())
    }
}
