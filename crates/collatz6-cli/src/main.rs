mod cmd;
mod output;

use clap::{Parser, Subcommand};
use collatz6_core::Config;
use num_bigint::BigUint;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "collatz6",
    about = "Explore orbits of the Collatz-6 map and scan for rim-heavy starting values",
    version,
    propagate_version = true
)]
struct Cli {
    /// YAML preset with orbit and scan defaults
    #[arg(long, global = true, env = "COLLATZ6_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log at debug level (RUST_LOG still applies)
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the orbit and statistics of 20737 (the default when no command is given)
    Demo,

    /// Largest k such that 6^k divides n
    V6 { n: BigUint },

    /// Apply the map once
    Step { n: BigUint },

    /// Print the orbit of n until it reaches 1 or the step cap
    Orbit {
        n: BigUint,

        /// Step cap
        #[arg(long, env = "COLLATZ6_MAX_STEPS")]
        max_steps: Option<usize>,
    },

    /// Summarize the orbit of n: steps, max, growth, rim count
    Analyze {
        n: BigUint,

        /// Step cap
        #[arg(long, env = "COLLATZ6_MAX_STEPS")]
        max_steps: Option<usize>,
    },

    /// List start values in [start, end] whose orbits meet both thresholds
    Scan {
        start: u64,
        end: u64,

        /// Minimum rim-residue count (inclusive)
        #[arg(long, env = "COLLATZ6_MIN_RIM")]
        min_rim: Option<usize>,

        /// Minimum step count (inclusive)
        #[arg(long, env = "COLLATZ6_MIN_STEPS")]
        min_steps: Option<usize>,

        /// Step cap per orbit
        #[arg(long, env = "COLLATZ6_MAX_STEPS")]
        max_steps: Option<usize>,
    },
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => cmd::demo::run(&config.orbit, cli.json),
        Commands::V6 { n } => cmd::step::run_v6(&n, cli.json),
        Commands::Step { n } => cmd::step::run(&n, cli.json),
        Commands::Orbit { n, max_steps } => {
            let max_steps = max_steps.unwrap_or(config.orbit.max_steps);
            cmd::orbit::run(n, max_steps, cli.json)
        }
        Commands::Analyze { n, max_steps } => {
            let max_steps = max_steps.unwrap_or(config.orbit.max_steps);
            cmd::analyze::run(n, max_steps, cli.json)
        }
        Commands::Scan {
            start,
            end,
            min_rim,
            min_steps,
            max_steps,
        } => {
            let merged = Config {
                scan: collatz6_core::ScanConfig {
                    min_rim: min_rim.unwrap_or(config.scan.min_rim),
                    min_steps: min_steps.unwrap_or(config.scan.min_steps),
                    max_steps: max_steps.unwrap_or(config.scan.max_steps),
                },
                ..config
            };
            merged.validate()?;
            cmd::scan::run(start, end, &merged.scan, cli.json)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
