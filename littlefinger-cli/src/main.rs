//! LittleFinger command-line host.
//!
//! Runs the payment gate the way an application would on startup.
//!
//! Usage:
//!   littlefinger check https://example.com/paid
//!   littlefinger status

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use littlefinger::{CheckOutcome, FatalFault, LittleFinger, LittleFingerConfig};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit status used when a fault is contained instead of raised.
const FAULT_EXIT_CODE: u8 = 3;

#[derive(Parser, Debug)]
#[command(name = "littlefinger")]
#[command(about = "Remote payment gate")]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the settings namespace (overrides config)
    #[arg(long, global = true)]
    settings_dir: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask the payment endpoint and act on the answer
    Check {
        /// Payment endpoint URL
        url: String,

        /// Report a fault and exit instead of crashing
        #[arg(long)]
        contain_faults: bool,
    },
    /// Show whether the next startup would check
    Status,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let mut config = match &args.config {
        Some(path) => LittleFingerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => LittleFingerConfig::default(),
    };
    if let Some(dir) = args.settings_dir {
        config.settings_dir = Some(dir);
    }

    let gate = LittleFinger::new(&config).context("failed to set up payment gate")?;

    match args.command {
        Command::Status => {
            let enabled = gate.status().should_make_call();
            println!("{}", if enabled { "enabled" } else { "disabled" });
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            url,
            contain_faults,
        } => {
            let Some(handle) = gate.init(&url)? else {
                info!("payment checks disabled");
                println!("skipped");
                return Ok(ExitCode::SUCCESS);
            };

            match check_report(handle.outcome().await?, contain_faults) {
                Ok((line, code)) => {
                    if code == FAULT_EXIT_CODE {
                        error!("payment gate fault contained");
                    }
                    println!("{line}");
                    Ok(ExitCode::from(code))
                }
                Err(fault) => fault.raise(),
            }
        }
    }
}

/// Line to print and exit status for a finished check, or the fault to raise.
fn check_report(outcome: CheckOutcome, contain_faults: bool) -> Result<(String, u8), FatalFault> {
    match outcome {
        Ok(decision) => Ok((decision.to_string(), 0)),
        Err(fault) if contain_faults => Ok((format!("fault: {fault}"), FAULT_EXIT_CODE)),
        Err(fault) => Err(fault),
    }
}
