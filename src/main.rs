//! Leakscope CLI
//!
//! Symbolizes memory-profiler output: leak and double/invalid free reports
//! with source locations for each stack frame.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use leakscope::commands::{execute_resolve, validate_args, InputSource, ResolveArgs};
use leakscope::utils::config::{DisplayMode, DEFAULT_SYMBOLIZER, FULL_STACK_ENV};

/// Leakscope - source locations for memory profiler reports
#[derive(Parser, Debug)]
#[command(name = "leakscope")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Profiler output file, or `-` to read standard input
    input: String,

    /// Path to the profiled binary
    binary: PathBuf,

    /// Show every frame, including system libraries
    /// (also enabled by PROFILER_FULL_STACK=1)
    #[arg(long)]
    full_stack: bool,

    /// Symbolizer executable
    #[arg(long, env = "ADDR2LINE", default_value = DEFAULT_SYMBOLIZER)]
    addr2line: PathBuf,

    /// Timeout for each symbolizer call, in milliseconds
    #[arg(long, default_value = "2000")]
    timeout_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging; stdout carries the report, logs go to stderr
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let mode = if cli.full_stack {
        DisplayMode::FullStack
    } else {
        DisplayMode::from_env_value(std::env::var(FULL_STACK_ENV).ok().as_deref())
    };

    let args = ResolveArgs {
        input: InputSource::from_arg(&cli.input),
        binary: cli.binary,
        mode,
        symbolizer: cli.addr2line,
        timeout: Duration::from_millis(cli.timeout_ms),
    };

    // Validate args first
    validate_args(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_resolve(&args, &mut out)?;

    Ok(())
}
