// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! hall - immigration office rendezvous simulator
//!
//! Runs one judge and N immigrants against a shared office and writes the
//! totally ordered action journal. Exit status: 0 clean run, 1 failed run
//! (spawn failure or journal I/O), 2 bad arguments or config.

use anyhow::Context;
use clap::Parser;
use hall_core::{supervisor, Journal, SimConfig, TokioSpawner};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "hall",
    version,
    about = "Immigration office rendezvous simulator"
)]
struct Cli {
    /// Number of immigrants to generate and confirm
    immigrants: Option<u32>,

    /// Max delay between immigrant spawns, in milliseconds
    #[arg(long, value_name = "MS")]
    gen_delay: Option<u64>,

    /// Max delay before each judge entry, in milliseconds
    #[arg(long, value_name = "MS")]
    judge_delay: Option<u64>,

    /// Max certificate-processing delay, in milliseconds
    #[arg(long, value_name = "MS")]
    cert_delay: Option<u64>,

    /// Load run parameters from a TOML file; flags override file values
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Journal output path ("-" for stdout)
    #[arg(long, default_value = "hall.out", value_name = "PATH")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::from(2);
        }
    };

    let journal = match open_journal(&cli.output) {
        Ok(journal) => journal,
        Err(err) => {
            eprintln!("error: cannot open {}: {err}", cli.output.display());
            return ExitCode::from(2);
        }
    };

    info!(immigrants = config.immigrants, "starting run");
    match supervisor::run(&config, journal, Arc::new(TokioSpawner)).await {
        Ok(report) if report.failed => {
            error!(confirmed = report.confirmed, "run failed");
            ExitCode::from(1)
        }
        Ok(report) => {
            info!(confirmed = report.confirmed, "run complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            toml::from_str::<SimConfig>(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => {
            let immigrants = cli
                .immigrants
                .ok_or_else(|| anyhow::anyhow!("immigrant count required (argument or --config)"))?;
            SimConfig::new(immigrants)
        }
    };

    if let Some(n) = cli.immigrants {
        config.immigrants = n;
    }
    if let Some(ms) = cli.gen_delay {
        config.gen_delay_max = Duration::from_millis(ms);
    }
    if let Some(ms) = cli.judge_delay {
        config.judge_delay_max = Duration::from_millis(ms);
    }
    if let Some(ms) = cli.cert_delay {
        config.cert_delay_max = Duration::from_millis(ms);
    }

    config.validate()?;
    Ok(config)
}

fn open_journal(path: &Path) -> io::Result<Journal> {
    if path.as_os_str() == "-" {
        Ok(Journal::new(Box::new(io::stdout())))
    } else {
        Journal::create(path)
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Diagnostics go to stderr; the journal may own stdout.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
