//! Cross-event state for one run.

/// Counters owned by the stream interpreter for the lifetime of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunState {
    /// Corruption events seen so far
    pub corruption_count: u64,

    /// Whether the corruption section header has been written
    pub header_printed: bool,

    /// Events decoded (all kinds)
    pub events: u64,

    /// Lines passed through verbatim
    pub passthrough_lines: u64,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the corruption header as printed.
    ///
    /// Returns `true` only the first time, when the caller should print it.
    pub fn claim_corruption_header(&mut self) -> bool {
        if self.header_printed {
            false
        } else {
            self.header_printed = true;
            true
        }
    }

    pub fn record_corruption(&mut self) {
        self.corruption_count += 1;
    }
}
