//! Event processor: one stack-carrying event to report lines.

use super::frame::FrameFormatter;
use crate::parser::{StackEvent, StackEventKind};
use crate::symbolizer::AddressResolver;
use std::io::{self, Write};

/// Header line for a stack event
///
/// `[LEAK] <addr>: <size> bytes` or `[CORRUPTION] <label> at <addr>`
pub fn event_header(event: &StackEvent) -> String {
    match &event.kind {
        StackEventKind::Leak { size } => format!("[LEAK] {}: {} bytes", event.address, size),
        StackEventKind::Corruption { label } => {
            format!("[CORRUPTION] {} at {}", label, event.address)
        }
    }
}

/// Prints events through a frame formatter.
///
/// Stateless across events; the corruption counter belongs to the caller.
pub struct EventProcessor<'a, R> {
    formatter: FrameFormatter<'a, R>,
}

impl<'a, R: AddressResolver> EventProcessor<'a, R> {
    pub fn new(formatter: FrameFormatter<'a, R>) -> Self {
        Self { formatter }
    }

    /// Write the header, each frame's line (in order), then a blank line
    pub fn process<W: Write>(&self, event: &StackEvent, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", event_header(event))?;

        for frame in &event.frames {
            if let Some(line) = self.formatter.format(frame) {
                writeln!(out, "{}", line)?;
            }
        }

        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::TargetBinary;
    use crate::parser::Frame;
    use crate::symbolizer::{Resolution, SourceLocation};
    use crate::utils::config::DisplayMode;
    use crate::utils::error::ResolveError;
    use std::path::Path;

    #[test]
    fn test_event_headers() {
        assert_eq!(
            event_header(&StackEvent::leak("0x4011ea", 24, vec![])),
            "[LEAK] 0x4011ea: 24 bytes"
        );
        assert_eq!(
            event_header(&StackEvent::corruption("Double-Free or Invalid-Free", "0x7f00", vec![])),
            "[CORRUPTION] Double-Free or Invalid-Free at 0x7f00"
        );
    }

    #[test]
    fn test_process_keeps_frame_order() {
        let target = TargetBinary::new("/work/app");
        let resolver = |_: &Path, address: &str| match address {
            "0x1" => Resolution::Resolved(SourceLocation::new("a.c", "1")),
            "0x2" => Resolution::Resolved(SourceLocation::new("b.c", "2")),
            _ => Resolution::Unresolved(ResolveError::UnknownLocation("??:0".to_string())),
        };
        let processor =
            EventProcessor::new(FrameFormatter::new(DisplayMode::Filtered, &target, &resolver));

        let event = StackEvent::leak(
            "0x100",
            8,
            vec![
                Frame::declared("0x9", "libprofiler.so"),
                Frame::declared("0x2", "app"),
                Frame::declared("0x3", "app"),
                Frame::declared("0x1", "app"),
            ],
        );

        let mut out = Vec::new();
        processor.process(&event, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[LEAK] 0x100: 8 bytes\n  at: b.c; line: 2\n  at: a.c; line: 1\n\n"
        );
    }
}
