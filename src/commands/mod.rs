//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod models;
pub mod resolve;

// Re-export main command functions
pub use models::{InputSource, ResolveArgs};
pub use resolve::{build_resolver, execute_resolve, open_input, validate_args};
