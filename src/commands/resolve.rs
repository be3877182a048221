//! Resolve command implementation.
//!
//! The resolve command:
//! 1. Checks that the target binary exists and the symbolizer runs
//! 2. Opens the profiler output (file or stdin)
//! 3. Streams it through the interpreter
//! 4. Writes the report to stdout

use super::models::{InputSource, ResolveArgs};
use crate::classifier::TargetBinary;
use crate::interpreter::{RunState, StreamInterpreter};
use crate::symbolizer::Addr2LineResolver;
use crate::utils::config::ReportConfig;
use crate::utils::error::{InputError, PreflightError};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::time::Instant;

/// Build the resolver described by `args`
pub fn build_resolver(args: &ResolveArgs) -> Addr2LineResolver {
    Addr2LineResolver::new()
        .with_program(&args.symbolizer)
        .with_timeout(args.timeout)
}

/// Validate startup preconditions
///
/// **Public** - call before execute_resolve for early, clear failures
///
/// # Errors
/// * `PreflightError::BinaryNotFound` - target binary path does not exist
/// * `PreflightError::SymbolizerUnavailable` - symbolizer cannot be run
pub fn validate_args(args: &ResolveArgs) -> Result<(), PreflightError> {
    if !args.binary.exists() {
        return Err(PreflightError::BinaryNotFound(args.binary.clone()));
    }

    let resolver = build_resolver(args);
    let version = resolver
        .version()
        .map_err(|reason| PreflightError::SymbolizerUnavailable {
            tool: args.symbolizer.display().to_string(),
            reason,
        })?;
    debug!("Using symbolizer: {}", version);

    Ok(())
}

/// Open the profiler output for line reading
pub fn open_input(source: &InputSource) -> Result<Box<dyn BufRead>, InputError> {
    match source {
        InputSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
        InputSource::File(path) => {
            let file = File::open(path).map_err(|source| InputError::Open {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Execute the resolve command, writing the report to `out`
///
/// **Public** - main entry point called from main.rs
///
/// Preconditions are not re-checked here; see [`validate_args`].
pub fn execute_resolve<W: Write>(args: &ResolveArgs, out: &mut W) -> Result<RunState> {
    let start_time = Instant::now();

    info!("Reading profiler output from {}", args.input.describe());
    let input = open_input(&args.input).context("Failed to open profiler output")?;

    let config = ReportConfig::new(args.mode, TargetBinary::new(&args.binary));
    let mut interpreter = StreamInterpreter::new(config, build_resolver(args));

    let state = interpreter
        .run(input, out)
        .context("Failed to produce report")?;

    info!("Report completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_missing_binary() {
        let args = ResolveArgs {
            binary: PathBuf::from("/nonexistent/leakscope/target"),
            ..Default::default()
        };

        assert!(matches!(
            validate_args(&args),
            Err(PreflightError::BinaryNotFound(_))
        ));
    }

    #[test]
    fn test_validate_args_missing_symbolizer() {
        let binary = tempfile::NamedTempFile::new().unwrap();
        let args = ResolveArgs {
            binary: binary.path().to_path_buf(),
            symbolizer: PathBuf::from("leakscope-no-such-addr2line"),
            ..Default::default()
        };

        assert!(matches!(
            validate_args(&args),
            Err(PreflightError::SymbolizerUnavailable { .. })
        ));
    }

    #[test]
    fn test_open_input_missing_file() {
        let source = InputSource::File(PathBuf::from("/nonexistent/profile.txt"));
        assert!(matches!(open_input(&source), Err(InputError::Open { .. })));
    }

    #[test]
    fn test_input_source_from_arg() {
        assert_eq!(InputSource::from_arg("-"), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg("out.txt"),
            InputSource::File(PathBuf::from("out.txt"))
        );
    }
}
