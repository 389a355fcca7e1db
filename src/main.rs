//! `iconpad` CLI - Pad `assets/icon.png` in place before icon asset generation.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use iconpad::{Config, Padder};

/// Source icon, relative to the working directory.
const INPUT_PATH: &str = "assets/icon.png";

/// Destination of the padded icon. Same file as the source.
const OUTPUT_PATH: &str = "assets/icon.png";

/// Add a transparent margin around `assets/icon.png`, overwriting it as PNG.
///
/// Takes no positional arguments; any argument other than the flags below is
/// rejected.
#[derive(Parser, Debug)]
#[command(name = "iconpad")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("iconpad={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH)) {
        println!("Error: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(input: &Path, output: &Path) -> Result<()> {
    let padder = Padder::new(Config::default()).context("Failed to configure padding")?;

    padder.process(input, output).context("Failed to pad icon")?;

    println!("Successfully added padding to {}", input.display());

    Ok(())
}
