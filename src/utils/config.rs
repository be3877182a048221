//! Configuration and constants for the report pipeline.

use crate::classifier::TargetBinary;
use std::time::Duration;

/// Environment variable that switches on full-stack mode (`"1"`)
pub const FULL_STACK_ENV: &str = "PROFILER_FULL_STACK";

/// Symbolizer executable used when none is configured
pub const DEFAULT_SYMBOLIZER: &str = "addr2line";

/// Upper bound for a single symbolizer invocation
pub const DEFAULT_SYMBOLIZER_TIMEOUT: Duration = Duration::from_secs(2);

/// How often a running symbolizer is polled for exit
pub const SYMBOLIZER_POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Substrings identifying runtime/support libraries.
/// Library filenames embed version suffixes (libc-2.31.so), so these are
/// matched as substrings of the base filename, not exact names.
pub const SYSTEM_LIBRARY_PATTERNS: &[&str] = &[
    "libc.so",
    "libc-",
    "libpthread.so",
    "libpthread-",
    "ld-linux",
    "libdl.so",
    "libm.so",
    "libprofiler.so",
];

/// Binary name used for frames that do not declare one
pub const UNKNOWN_BINARY: &str = "unknown";

/// Label for stack-carrying records with no `type` field
pub const UNKNOWN_EVENT_LABEL: &str = "Unknown";

/// Placeholder for a missing address
pub const MISSING_ADDRESS: &str = "?";

// Banner rule widths
pub const MODE_BANNER_WIDTH: usize = 60;

/// Which frames the report shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Only resolved frames of the target binary
    #[default]
    Filtered,
    /// Every frame, tagged by origin
    FullStack,
}

impl DisplayMode {
    /// Interpret the value of [`FULL_STACK_ENV`].
    ///
    /// Only the exact string `"1"` enables full-stack mode; unset, `"0"`
    /// and anything else keep the filtered default.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("1") => DisplayMode::FullStack,
            _ => DisplayMode::Filtered,
        }
    }

    pub fn is_full_stack(self) -> bool {
        self == DisplayMode::FullStack
    }
}

/// Everything the interpreter needs to know about one run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub mode: DisplayMode,
    pub target: TargetBinary,
}

impl ReportConfig {
    pub fn new(mode: DisplayMode, target: TargetBinary) -> Self {
        Self { mode, target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_from_env_value() {
        assert_eq!(DisplayMode::from_env_value(None), DisplayMode::Filtered);
        assert_eq!(DisplayMode::from_env_value(Some("0")), DisplayMode::Filtered);
        assert_eq!(DisplayMode::from_env_value(Some("1")), DisplayMode::FullStack);
        assert_eq!(DisplayMode::from_env_value(Some("yes")), DisplayMode::Filtered);
        assert_eq!(DisplayMode::from_env_value(Some("")), DisplayMode::Filtered);
    }
}
