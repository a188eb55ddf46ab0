//! garage-cli - inspect vehicle info snapshots
//!
//! Reads a saved `garage/vehicles/{vin}` response and answers capability
//! questions about it.

mod commands;
mod config;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use garage_core::CapabilityId;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::commands::AvailabilityFilter;
use crate::config::Config;
use crate::output::{OutputContext, OutputFormat};

#[derive(Parser)]
#[command(name = "garage-cli")]
#[command(author, version, about = "Vehicle info snapshot inspector")]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "GARAGE_CONFIG")]
    config: Option<PathBuf>,

    /// Output format [default: table]
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Minimal output (for scripting)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show vehicle identity and specification
    Info {
        /// Snapshot file (`-` for stdin)
        file: PathBuf,
    },

    /// List capabilities and their availability
    Capabilities {
        /// Snapshot file (`-` for stdin)
        file: PathBuf,

        /// Only capabilities usable right now
        #[arg(long, conflicts_with = "unavailable")]
        available: bool,

        /// Only capabilities that are present but disabled
        #[arg(long)]
        unavailable: bool,
    },

    /// Check whether a capability can be used right now
    ///
    /// Exits with 0 when available, 1 when present but unavailable and 3 when
    /// the vehicle does not have the capability. Bad arguments and snapshots
    /// that cannot be loaded exit with 2.
    Check {
        /// Snapshot file (`-` for stdin)
        file: PathBuf,

        /// Capability id, e.g. HONK_AND_FLASH
        capability: CapabilityId,
    },

    /// List the capability ids and statuses this build knows
    Known,
}

/// Exit code for failures; matches clap's code for usage errors
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {

    // Set up logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Load config file
    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)?
    } else {
        Config::load().unwrap_or_default()
    };

    // Merge CLI args with config
    let merged = config.merge_with_args(cli.output.map(Into::into), cli.no_color);
    let format = OutputFormat::from_str(&merged.output, true)
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("Invalid output format in config: {}", merged.output))?;

    let ctx = OutputContext::new(format, merged.no_color, cli.quiet);

    match &cli.command {
        Commands::Info { file } => {
            let snapshot = commands::load(file)?;
            commands::info(&snapshot, &ctx)?;
        }

        Commands::Capabilities {
            file,
            available,
            unavailable,
        } => {
            let filter = match (*available, *unavailable) {
                (true, _) => AvailabilityFilter::Available,
                (_, true) => AvailabilityFilter::Unavailable,
                _ => AvailabilityFilter::All,
            };
            let snapshot = commands::load(file)?;
            commands::capabilities(&snapshot, filter, &ctx)?;
        }

        Commands::Check { file, capability } => {
            let snapshot = commands::load(file)?;
            let outcome = commands::check(&snapshot, *capability, &ctx)?;
            return Ok(ExitCode::from(outcome.exit_code()));
        }

        Commands::Known => {
            commands::known(&ctx)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

// Implement conversion for OutputFormat to string (for config merge)
impl From<OutputFormat> for &str {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}
