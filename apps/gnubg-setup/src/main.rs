//! gnubg-setup - configure and build the bundled GNU Backgammon sources.
//!
//! Every step prints one JSON line (`{"step": ..., "ok": ...}`) on stdout;
//! logs go to stderr. The exit code is 1 as soon as a step fails.

mod platform;
mod steps;

use std::path::PathBuf;

use backgammon_ai::engine::build_instructions;
use clap::{Parser, Subcommand};
use steps::StepReport;
use tracing::info;

#[derive(Parser)]
#[command(name = "gnubg-setup")]
#[command(about = "Configure and build the local GNU Backgammon engine")]
struct Args {
    /// Engine source tree
    #[arg(long, global = true, default_value = "./gnubg")]
    source_dir: PathBuf,

    #[command(subcommand)]
    command: SetupCommand,
}

#[derive(Debug, Clone, Subcommand)]
enum SetupCommand {
    /// Verify required build tools are on PATH
    Check,
    /// Generate and run the configure script
    Configure,
    /// Compile with make
    Build,
    /// Check, configure, then build
    All,
    /// Print installation instructions for this platform
    Instructions,
}

fn emit(report: &StepReport) -> Result<bool, Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(report)?);
    Ok(report.ok)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    backgammon_ai::telemetry::init_tracing();
    let args = Args::parse();
    info!(command = ?args.command, source_dir = %args.source_dir.display(), "gnubg-setup starting");

    let ok = match args.command {
        SetupCommand::Check => emit(&steps::check())?,
        SetupCommand::Configure => emit(&steps::configure(&args.source_dir))?,
        SetupCommand::Build => emit(&steps::build(&args.source_dir))?,
        SetupCommand::All => {
            emit(&steps::check())?
                && emit(&steps::configure(&args.source_dir))?
                && emit(&steps::build(&args.source_dir))?
        }
        SetupCommand::Instructions => {
            let hint = platform::current();
            println!("{}\n", build_instructions());
            println!("Dependencies on {}:\n   {}", hint.platform, hint.install_command);
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
