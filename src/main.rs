//! Tissue Sim - Entry Point
//!
//! Runs an infection script against a fresh simulation and prints one
//! stats line per infection event. Diagnostics go to stderr.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use tissue_sim::command::{OutputFormat, ScriptRunner, Simulation};
use tissue_sim::core::config::SimulationConfig;
use tissue_sim::core::error::Result;

/// Tissue Sim - scripted infection of a 3D cell grid
#[derive(Parser, Debug)]
#[command(name = "tissue-sim")]
#[command(about = "Run an infection script and print statistics after each infection")]
struct Args {
    /// Script file, one command per line
    script: PathBuf,

    /// TOML file overriding the simulation defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format for stats lines
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log every mutation to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "tissue_sim=debug"
    } else {
        "tissue_sim=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    let script = File::open(&args.script)
        .inspect_err(|_| tracing::error!("Cannot open script {:?}", args.script))?;
    tracing::info!("Running script {:?}", args.script);

    let mut simulation = Simulation::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ScriptRunner::new(&mut simulation, args.format).run(BufReader::new(script), &mut out)?;
    Ok(())
}
