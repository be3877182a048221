//! Event definitions for profiler output.
//!
//! These are the decoded forms of the JSON-lines records the profiler
//! writes to stderr. Wire-level leniency (missing fields, bare-string
//! frames) is handled in `event_line`; everything here is normalized.

use crate::utils::config::UNKNOWN_BINARY;

/// One decoded record from the profiler stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Leak or corruption record carrying a stack trace
    Stack(StackEvent),

    /// Leak-section banner: `{"type":"header",...}`
    Header(LeakHeader),

    /// Final statistics: `{"type":"summary",...}`
    Summary(LeakSummary),
}

/// What kind of stack-carrying event this is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackEventKind {
    /// Unfreed allocation of `size` bytes
    Leak { size: u64 },

    /// Free-corruption error; `label` is the profiler's type string
    /// (e.g. "Double-Free or Invalid-Free")
    Corruption { label: String },
}

/// An event with a stack trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackEvent {
    pub kind: StackEventKind,

    /// Address of the allocation or the bad free, as written by the profiler
    pub address: String,

    /// Innermost call first, in profiler order
    pub frames: Vec<Frame>,
}

impl StackEvent {
    pub fn leak(address: impl Into<String>, size: u64, frames: Vec<Frame>) -> Self {
        Self {
            kind: StackEventKind::Leak { size },
            address: address.into(),
            frames,
        }
    }

    pub fn corruption(
        label: impl Into<String>,
        address: impl Into<String>,
        frames: Vec<Frame>,
    ) -> Self {
        Self {
            kind: StackEventKind::Corruption {
                label: label.into(),
            },
            address: address.into(),
            frames,
        }
    }

    pub fn is_leak(&self) -> bool {
        matches!(self.kind, StackEventKind::Leak { .. })
    }
}

/// A single stack entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Return address, e.g. "0x4011ea"
    pub address: String,

    /// Binary the address lies in, when the profiler could tell.
    /// `None` for legacy bare-address frames.
    pub binary: Option<String>,
}

impl Frame {
    /// Frame whose binary was reported by the profiler
    pub fn declared(address: impl Into<String>, binary: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            binary: Some(binary.into()),
        }
    }

    /// Frame with no binary information
    pub fn bare(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            binary: None,
        }
    }

    /// Binary name for display; `"unknown"` when not declared
    pub fn binary_name(&self) -> &str {
        self.binary.as_deref().unwrap_or(UNKNOWN_BINARY)
    }
}

/// Counters carried by a `header` record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeakHeader {
    pub leaks_count: u64,
    pub total_bytes: u64,
}

/// Counters carried by a `summary` record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeakSummary {
    pub real_leaks: u64,
    pub real_bytes: u64,

    /// Allocations attributed to libc internals rather than the program
    pub libc_leaks: u64,
    pub libc_bytes: u64,
}
