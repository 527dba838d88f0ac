mod calculator;
mod config;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::input::parse_sequence;
use crate::ui::Session;

#[derive(Parser)]
#[command(name = "calcpad")]
#[command(version, about = "A keypad calculator for the terminal")]
struct Cli {
    /// Run a key sequence on a fresh calculator and print the result, e.g. "12<Sign>+3="
    #[arg(short, long)]
    keys: Option<String>,

    /// Print the final display as JSON (with --keys)
    #[arg(long, requires = "keys")]
    json: bool,

    /// Print the display after every key instead of every line
    #[arg(long)]
    trace: bool,

    /// Path to a config file (default: <config dir>/calcpad/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    tracing::info!("starting with {:?}", config);

    let stdout = io::stdout();
    let mut session = Session::new(config, cli.trace, stdout.lock());

    match cli.keys {
        Some(sequence) => run_once(&mut session, &sequence, cli.json),
        None => session
            .run(io::stdin().lock())
            .context("Interactive session failed"),
    }
}

/// Run a single key sequence. Unknown keys are fatal here.
fn run_once<W: Write>(session: &mut Session<W>, sequence: &str, json: bool) -> Result<()> {
    let keys = parse_sequence(sequence)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid key sequence {:?}", sequence))?;

    session.press_all(&keys)?;

    if json {
        session.render_json()?;
    } else if !session.is_tracing() {
        session.render()?;
    }
    Ok(())
}
