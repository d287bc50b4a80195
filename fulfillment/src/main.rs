use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use fulfillment::{simulation, SimulationConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = SimulationConfig::parse();

    let filter = EnvFilter::try_new(&config.log)
        .with_context(|| format!("invalid log filter `{}`", config.log))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = simulation::run(&config, Utc::now(), &mut out)?;

    if config.json {
        serde_json::to_writer_pretty(&mut out, &summary.tiers)
            .context("writing tier snapshot")?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
