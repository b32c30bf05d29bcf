//! Command-line handling.
//!
//! The capture itself takes no arguments; only `--help` and `--version`
//! are understood.

use anyhow::{bail, Result};

/// What the process was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Capture,
    Help,
    Version,
}

/// Parse arguments (program name already stripped)
pub fn parse_args(args: &[String]) -> Result<Invocation> {
    match args {
        [] => Ok(Invocation::Capture),
        [flag] => match flag.as_str() {
            "--help" | "-h" => Ok(Invocation::Help),
            "--version" | "-V" => Ok(Invocation::Version),
            other => bail!("unexpected argument '{}'", other),
        },
        _ => bail!("expected no arguments, got {}", args.len()),
    }
}
