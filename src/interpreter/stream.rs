//! Stream interpreter.
//!
//! Reads the profiler's output one line at a time, in order, and writes the
//! report as it goes. Nothing is buffered across events: each line's output
//! is complete before the next line is read.

use super::state::RunState;
use crate::output::{
    write_corruption_banner, write_leak_header, write_mode_banner, write_summary, EventProcessor,
    FrameFormatter,
};
use crate::parser::{decode_line, Event, Line, StackEvent};
use crate::symbolizer::AddressResolver;
use crate::utils::config::ReportConfig;
use crate::utils::error::ReportError;
use log::{debug, info};
use std::io::{self, BufRead, Write};

/// Drives one report run
pub struct StreamInterpreter<R> {
    config: ReportConfig,
    resolver: R,
    state: RunState,
}

impl<R: AddressResolver> StreamInterpreter<R> {
    pub fn new(config: ReportConfig, resolver: R) -> Self {
        Self {
            config,
            resolver,
            state: RunState::new(),
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Consume the whole input and write the report
    ///
    /// **Public** - main entry point for a run
    ///
    /// Only I/O failures stop the run. Malformed lines, frames and
    /// symbolizer failures degrade per line.
    ///
    /// # Errors
    /// * `ReportError::Read` - the input could not be read
    /// * `ReportError::Write` - the report sink rejected a write
    pub fn run<I: BufRead, W: Write>(
        &mut self,
        mut input: I,
        out: &mut W,
    ) -> Result<RunState, ReportError> {
        info!(
            "Resolving against {} ({:?} mode)",
            self.config.target.path().display(),
            self.config.mode
        );

        if self.config.mode.is_full_stack() {
            write_mode_banner(out).map_err(ReportError::Write)?;
        }

        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = input.read_until(b'\n', &mut buf).map_err(ReportError::Read)?;
            if read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            self.process_line(&line, out).map_err(ReportError::Write)?;
        }

        out.flush().map_err(ReportError::Write)?;

        info!(
            "Processed {} event(s), {} passthrough line(s), {} free error(s)",
            self.state.events, self.state.passthrough_lines, self.state.corruption_count
        );

        Ok(self.state)
    }

    /// Interpret a single input line
    pub fn process_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<()> {
        match decode_line(line) {
            Line::Blank => Ok(()),
            Line::Passthrough(text) => {
                self.state.passthrough_lines += 1;
                writeln!(out, "{}", text)
            }
            Line::Event(event) => {
                self.state.events += 1;
                self.handle_event(&event, out)
            }
        }
    }

    fn handle_event<W: Write>(&mut self, event: &Event, out: &mut W) -> io::Result<()> {
        match event {
            Event::Header(header) => write_leak_header(header, out),
            Event::Summary(summary) => write_summary(summary, self.state.corruption_count, out),
            Event::Stack(stack) if stack.is_leak() => self.process_stack(stack, out),
            Event::Stack(stack) => {
                if self.state.claim_corruption_header() {
                    write_corruption_banner(out)?;
                }
                self.process_stack(stack, out)?;
                self.state.record_corruption();
                debug!("Free error #{} at {}", self.state.corruption_count, stack.address);
                Ok(())
            }
        }
    }

    fn process_stack<W: Write>(&self, event: &StackEvent, out: &mut W) -> io::Result<()> {
        let formatter = FrameFormatter::new(self.config.mode, &self.config.target, &self.resolver);
        EventProcessor::new(formatter).process(event, out)
    }
}
