//! Resolution results and symbolizer reply parsing.

use crate::utils::error::ResolveError;
use std::fmt;

/// A source file and line, as reported by the symbolizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,

    /// Kept verbatim; addr2line may append text such as "(discriminator 2)"
    pub line: String,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: line.into(),
        }
    }

    /// Parse a `filename:line` candidate.
    ///
    /// Splits on the last `:`. A filename that itself contains a colon is
    /// only split correctly when a line number follows it.
    ///
    /// # Errors
    /// * `ResolveError::UnknownLocation` - the symbolizer's `??` marker
    /// * `ResolveError::MalformedOutput` - empty, or no `:` separator
    pub fn parse(candidate: &str) -> Result<Self, ResolveError> {
        if candidate.is_empty() {
            return Err(ResolveError::MalformedOutput(
                "empty location line".to_string(),
            ));
        }

        if candidate.starts_with("??") {
            return Err(ResolveError::UnknownLocation(candidate.to_string()));
        }

        candidate
            .rsplit_once(':')
            .map(|(file, line)| SourceLocation::new(file, line))
            .ok_or_else(|| {
                ResolveError::MalformedOutput(format!("no ':' in location '{}'", candidate))
            })
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Outcome of resolving one address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(SourceLocation),

    /// The reason is kept for diagnostics only
    Unresolved(ResolveError),
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Resolution::Resolved(location) => Some(location),
            Resolution::Unresolved(_) => None,
        }
    }
}

impl From<Result<SourceLocation, ResolveError>> for Resolution {
    fn from(result: Result<SourceLocation, ResolveError>) -> Self {
        match result {
            Ok(location) => Resolution::Resolved(location),
            Err(reason) => Resolution::Unresolved(reason),
        }
    }
}

/// Parse addr2line's reply for `-f -C -s -a`.
///
/// Expected shape:
/// ```text
/// 0x4011ea
/// main
/// test_simple_leak.c:18
/// ```
pub fn parse_reply(stdout: &str) -> Result<SourceLocation, ResolveError> {
    let lines: Vec<&str> = stdout.trim().lines().collect();

    if lines.len() < 3 {
        return Err(ResolveError::MalformedOutput(format!(
            "expected 3 lines, got {}",
            lines.len()
        )));
    }

    SourceLocation::parse(lines[2])
}
