//! xoroshiro - print xoroshiro128+ outputs
//!
//! With no arguments: seed from the clock, print ten outputs, exit 0.
//! Stdout only ever carries the numbers; logs go to stderr (`RUST_LOG`).

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use xoroshiro_core_rs::{GeneratorConfig, GeneratorState, Session, StateSnapshot};

#[derive(Parser, Debug)]
#[command(
    name = "xoroshiro",
    version,
    about = "Print xoroshiro128+ pseudo-random numbers, one per line (not for cryptographic use)"
)]
struct Opts {
    /// Number of outputs to print (default: 10)
    #[arg(long)]
    count: Option<usize>,

    /// Fixed seed as S0:S1, decimal or 0x-prefixed hex (default: clock)
    #[arg(long, value_parser = parse_seed)]
    seed: Option<GeneratorState>,

    /// Jumps of 2^64 steps applied after seeding
    #[arg(long)]
    jumps: Option<u32>,

    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a snapshot here after printing
    #[arg(long)]
    save_state: Option<PathBuf>,

    /// Continue from a snapshot (seed and jumps must match the original run)
    #[arg(long)]
    resume: Option<PathBuf>,
}

fn parse_word(text: &str) -> Result<u64, String> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => text.replace('_', "").parse::<u64>(),
    };
    parsed.map_err(|e| format!("invalid seed word '{text}': {e}"))
}

fn parse_seed(text: &str) -> Result<GeneratorState, String> {
    let (s0, s1) = text
        .split_once(':')
        .ok_or_else(|| format!("expected S0:S1, got '{text}'"))?;
    Ok(GeneratorState::new(parse_word(s0)?, parse_word(s1)?))
}

fn resolve_config(opts: &Opts) -> Result<GeneratorConfig> {
    let mut config = match &opts.config {
        Some(path) => GeneratorConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(count) = opts.count {
        config.count = count;
    }
    if let Some(seed) = opts.seed {
        config.seed = Some(seed);
    }
    if let Some(jumps) = opts.jumps {
        config.jumps = jumps;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn open_session(opts: &Opts, config: GeneratorConfig) -> Result<Session> {
    let Some(path) = &opts.resume else {
        return Session::new(config).context("Failed to start generator");
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let snapshot = StateSnapshot::from_json(&json)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;

    tracing::info!(path = %path.display(), "resuming from snapshot");
    Session::from_snapshot(config, &snapshot)
        .with_context(|| format!("Cannot resume from {}", path.display()))
}

/// `Ok(false)` when the reader hung up (e.g. `xoroshiro | head -1`)
fn accept_write(result: io::Result<()>) -> io::Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed, stopping early");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

fn run(opts: &Opts, out: &mut impl Write) -> Result<()> {
    let config = resolve_config(opts)?;
    let mut session = open_session(opts, config)?;

    for _ in 0..session.config().count {
        let written = writeln!(out, "{}", session.draw());
        if !accept_write(written).context("Failed to write output")? {
            return Ok(());
        }
    }
    if !accept_write(out.flush()).context("Failed to flush output")? {
        return Ok(());
    }

    if let Some(path) = &opts.save_state {
        let json = session.snapshot()?.to_json()?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            outputs_drawn = session.outputs_drawn(),
            "snapshot saved"
        );
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let opts = Opts::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&opts, &mut out)
}
