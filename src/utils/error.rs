//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single address could not be resolved.
///
/// All variants collapse to "unresolved" for formatting; the distinction
/// only feeds diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("symbolizer timed out after {0} ms")]
    Timeout(u128),

    #[error("symbolizer not found: {0}")]
    ToolNotFound(String),

    #[error("failed to run symbolizer: {0}")]
    SpawnFailed(String),

    #[error("symbolizer exited with {0}")]
    NonZeroExit(String),

    #[error("malformed symbolizer output: {0}")]
    MalformedOutput(String),

    #[error("location unknown to symbolizer: {0}")]
    UnknownLocation(String),
}

/// Errors opening or reading the profiler output
#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot open input {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that stop a streaming run
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write report: {0}")]
    Write(#[source] std::io::Error),
}

/// Startup preconditions checked before any input is consumed
#[derive(Error, Debug)]
pub enum PreflightError {
    #[error("Binary not found: {}", .0.display())]
    BinaryNotFound(PathBuf),

    #[error("'{tool}' not available ({reason}). Please install binutils.")]
    SymbolizerUnavailable { tool: String, reason: ResolveError },
}

/// Errors that can occur while decoding one input line as an event
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid event format: {0}")]
    InvalidFormat(String),
}
