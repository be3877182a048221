//! Stream interpretation and run state.
//!
//! The interpreter owns the only cross-event state (the corruption counter
//! and the one-time section header gate) and dispatches each decoded line
//! to the renderers in `output`.

pub mod state;
pub mod stream;

pub use state::RunState;
pub use stream::StreamInterpreter;
