use crate::utils::config::{DisplayMode, DEFAULT_SYMBOLIZER, DEFAULT_SYMBOLIZER_TIMEOUT};
use std::path::PathBuf;
use std::time::Duration;

/// Where the profiler output is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means standard input; anything else is a file path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Arguments for the resolve command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ResolveArgs {
    /// Profiler output to read
    pub input: InputSource,

    /// The profiled binary
    pub binary: PathBuf,

    /// Filtered or full-stack report
    pub mode: DisplayMode,

    /// Symbolizer executable
    pub symbolizer: PathBuf,

    /// Bound on each symbolizer call
    pub timeout: Duration,
}

impl Default for ResolveArgs {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
            binary: PathBuf::new(),
            mode: DisplayMode::Filtered,
            symbolizer: PathBuf::from(DEFAULT_SYMBOLIZER),
            timeout: DEFAULT_SYMBOLIZER_TIMEOUT,
        }
    }
}
