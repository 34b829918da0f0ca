//! Lumec CLI - the command-line front end of the Lume compiler.
//!
//! Parses arguments with clap, initializes logging, and hands off to the
//! driver library. Lexical errors are already rendered with position and
//! caret by the scanner; this entry point only sets the exit status.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lumec_drv::{run, Options};

/// Lumec - the Lume compiler
#[derive(Parser, Debug)]
#[command(name = "lumec")]
#[command(author = "Lume Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compiler for the Lume programming language", long_about = None)]
struct Cli {
    /// Source file to compile
    input: PathBuf,

    /// Suppress the token listing
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose output
    #[arg(short, long, env = "LUMEC_VERBOSE")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }

    let options = Options {
        input: cli.input,
        quiet: cli.quiet,
    };

    if let Err(e) = run(&options) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}
