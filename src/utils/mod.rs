//! Utility modules for configuration and error handling.

pub mod config;
pub mod error;

// Re-export commonly used types for convenience
pub use config::{DisplayMode, ReportConfig};
pub use error::{InputError, ParseError, PreflightError, ReportError, ResolveError};
