//! lumec-drv - Compiler driver for the Lume programming language.
//!
//! The driver owns everything outside the language itself: reading source
//! files, running the scanner, and presenting the result. Lexical errors
//! are reported by the scanner with full position context before they
//! reach the driver, so the driver only decides the exit status.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use lumec_lex::Scanner;

/// Options for one driver invocation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Source file to scan.
    pub input: PathBuf,
    /// Suppress the token listing; errors still go to stderr.
    pub quiet: bool,
}

/// Reads the input file, scans it, and prints one token per line.
pub fn run(options: &Options) -> Result<()> {
    let source = read_source(&options.input)?;
    let filename = options.input.display().to_string();

    debug!(file = %filename, bytes = source.len(), "scanning");

    let tokens = Scanner::new()
        .scan(&source, &filename)
        .with_context(|| format!("failed to scan `{filename}`"))?;

    debug!(count = tokens.len(), "scan complete");

    if !options.quiet {
        for token in &tokens {
            println!("{token}");
        }
    }

    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))
}
