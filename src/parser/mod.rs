//! Profiler event parsing and schema definitions.
//!
//! This module handles:
//! - Splitting the input stream into events and passthrough text
//! - Normalizing frame entries (structured records and legacy bare addresses)
//! - Defining the decoded event schema

pub mod event_line;
pub mod schema;

// Re-export main types
pub use event_line::{decode_event, decode_line, Line};
pub use schema::{Event, Frame, LeakHeader, LeakSummary, StackEvent, StackEventKind};
