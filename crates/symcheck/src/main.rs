//! symcheck command line
//!
//! `run` is the concrete driver, `explore` is the symbolic driver wired to
//! the bounded reference engine. Exit codes: 0 for a clean run (any
//! verdict, property proven), 1 for an assertion failure or a
//! counterexample, 2 for usage errors.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use symcheck::engine::ExploreConfig;
use symcheck::{explore_case, registry, run_concrete_str, Case, HarnessError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "symcheck", version, about = "Dual-mode property checking for pure 32-bit functions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a case concretely on one input
    Run {
        /// Built-in case name (see `symcheck list`)
        case: String,

        /// Base-10 input, signed or unsigned 32-bit
        value: String,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Explore a case symbolically with the bounded reference engine
    Explore {
        /// Built-in case name (see `symcheck list`)
        case: String,

        /// First candidate word, unsigned
        #[arg(long, default_value_t = 0)]
        lo: u32,

        /// Last candidate word, inclusive, unsigned
        #[arg(long, default_value_t = u32::MAX)]
        hi: u32,

        /// Sweep the whole range instead of stopping at the first counterexample
        #[arg(long)]
        all: bool,

        /// Emit the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List built-in cases
    List,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Run { case, value, json } => {
            let case = lookup(&case)?;
            match run_concrete_str(&case, &value) {
                Ok(report) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        println!("{}", report.verdict);
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(err @ (HarnessError::UnreachableBranch { .. }
                | HarnessError::PropertyViolated { .. })) => {
                    eprintln!("assertion failure: {err}");
                    Ok(ExitCode::from(1))
                }
                Err(err) => Err(err.into()),
            }
        }
        Command::Explore {
            case,
            lo,
            hi,
            all,
            json,
        } => {
            let case = lookup(&case)?;
            anyhow::ensure!(lo <= hi, "--lo must not exceed --hi");
            let mut config = ExploreConfig::range(lo, hi);
            if all {
                config = config.sweeping();
            }
            let outcome = explore_case(&case, config);
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{outcome}");
            }
            Ok(if outcome.status.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Command::List => {
            for name in registry::names() {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn lookup(name: &str) -> anyhow::Result<Case> {
    registry::find(name)
        .ok_or_else(|| anyhow::anyhow!("unknown case `{name}`; try `symcheck list`"))
}
