//! repro-seed: pin experiment randomness to one seed
//!
//! Run with:
//!   repro-seed show
//!   repro-seed --seed 7 sample --count 5
//!   repro-seed run -- python train.py
//!
//! Logs go to stderr (`RUST_LOG`, default `info`); stdout carries JSON only.

use std::path::PathBuf;
use std::process::ExitStatus;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use reproducible_seed_core::{global, initialize, SeedConfig};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "repro-seed",
    version,
    about = "Seed every source of randomness for reproducible experiments"
)]
struct Cli {
    /// Seed value; overrides the config file and REPRO_SEED
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Environment variable controlling hash randomization in children
    #[arg(long, global = true)]
    hash_seed_var: Option<String>,

    /// Do not set the hash seed variable in this process
    #[arg(long, global = true)]
    no_export: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the resolved configuration and its fingerprint
    Show,

    /// Initialize, then print draws from both global generators
    Sample {
        #[arg(long, default_value_t = 5)]
        count: usize,
    },

    /// Run a program with the hash seed and REPRO_SEED in its environment
    Run {
        #[arg(trailing_var_arg = true, required = true, num_args = 1..)]
        argv: Vec<String>,
    },
}

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    config: &'a SeedConfig,
    fingerprint: String,
    env: String,
}

#[derive(Debug, Serialize)]
struct SampleOutput {
    seed: u64,
    general: Vec<u64>,
    numeric: Vec<f64>,
}

fn resolve_config(cli: &Cli) -> Result<SeedConfig> {
    let base = match &cli.config {
        Some(path) => SeedConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SeedConfig::default(),
    };
    let mut config = base
        .with_env_override()
        .context("reading seed override from environment")?;

    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(var) = &cli.hash_seed_var {
        config.hash_seed_var = var.clone();
    }
    if cli.no_export {
        config.export_env = false;
    }
    config.validate().context("validating config")?;
    Ok(config)
}

/// Child exit code, or `128 + signal` when a signal killed it
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            warn!(signal, "Child process terminated by signal");
            return 128 + signal;
        }
    }
    warn!(%status, "Child process exited without a status code");
    1
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    match &cli.command {
        Command::Show => {
            let output = ShowOutput {
                config: &config,
                fingerprint: config.fingerprint()?,
                env: format!("{}={}", config.hash_seed_var, config.seed),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Sample { count } => {
            initialize(&config)?;
            let output = SampleOutput {
                seed: config.seed,
                general: (0..*count)
                    .map(|_| global::with_rng(|rng| rng.next()))
                    .collect(),
                numeric: global::with_numeric(|n| n.random(*count)),
            };
            println!("{}", serde_json::to_string(&output)?);
        }
        Command::Run { argv } => {
            let Some((program, args)) = argv.split_first() else {
                bail!("no program given");
            };
            let context = initialize(&config)?;
            info!(program = %program, seed = config.seed, "Launching seeded child process");

            let status = context
                .command(program)
                .args(args)
                .status()
                .with_context(|| format!("spawning {}", program))?;
            std::process::exit(exit_code(status));
        }
    }

    Ok(())
}
