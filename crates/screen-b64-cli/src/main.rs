//! screen-b64 - Print the primary display as a Base64-encoded PNG
//!
//! Usage:
//!   screen-b64              Capture and print one line of Base64
//!   screen-b64 --help       Show help
//!   screen-b64 --version    Show version

use std::io;
use std::process::ExitCode;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use screen_b64_core::{Pipeline, XcapDisplay};

mod args;

use args::Invocation;

/// Exit code for a malformed command line
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args::parse_args(&args) {
        Ok(Invocation::Help) => {
            print_help();
            ExitCode::SUCCESS
        }
        Ok(Invocation::Version) => {
            println!("screen-b64 {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Ok(Invocation::Capture) => {
            init_logging();
            run()
        }
        Err(e) => {
            eprintln!("screen-b64: {}", e);
            eprintln!("Try 'screen-b64 --help' for more information.");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn print_help() {
    println!("screen-b64 v{}", env!("CARGO_PKG_VERSION"));
    println!("Capture the primary display and print it as a Base64-encoded PNG");
    println!();
    println!("USAGE:");
    println!("    screen-b64");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show this help message");
    println!("    -V, --version    Show version");
    println!();
    println!("On success, stdout holds exactly one line of Base64 text.");
    println!("Diagnostics go to stderr; set RUST_LOG=debug for stage timings.");
}

fn init_logging() {
    // stdout carries the image, so logs only ever go to stderr
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run() -> ExitCode {
    let stdout = io::stdout();
    let result = Pipeline::new(XcapDisplay::new()).run(stdout.lock());

    match result {
        Ok(summary) => {
            tracing::debug!("Done: {}x{}", summary.width, summary.height);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("screen-b64: {} failed: {}", e.stage(), e);
            ExitCode::from(e.exit_code())
        }
    }
}
