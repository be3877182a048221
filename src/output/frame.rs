//! Frame formatter.
//!
//! Turns one stack frame into zero or one report line depending on the
//! display mode. Filtered mode keeps only resolved target locations; full
//! mode prints every frame with an origin tag.

use crate::classifier::{locate_frame, FrameOrigin, TargetBinary};
use crate::parser::Frame;
use crate::symbolizer::{AddressResolver, Resolution, SourceLocation};
use crate::utils::config::DisplayMode;

/// Origin tag shown in full-stack mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTag {
    /// Resolved target code
    User,
    /// Target code without line info (C runtime startup)
    Startup,
    /// Runtime/support library
    System,
    /// Anything else
    Unknown,
}

impl FrameTag {
    pub fn as_str(self) -> &'static str {
        match self {
            FrameTag::User => "[USR]",
            FrameTag::Startup => "[CRT]",
            FrameTag::System => "[SYS]",
            FrameTag::Unknown => "[???]",
        }
    }

    /// Tag for a located frame
    pub fn for_origin(origin: &FrameOrigin) -> Self {
        match origin {
            FrameOrigin::Target(Resolution::Resolved(_)) => FrameTag::User,
            FrameOrigin::Target(Resolution::Unresolved(_)) => FrameTag::Startup,
            FrameOrigin::System => FrameTag::System,
            FrameOrigin::Foreign => FrameTag::Unknown,
        }
    }
}

/// Renders frames for one run
pub struct FrameFormatter<'a, R> {
    mode: DisplayMode,
    target: &'a TargetBinary,
    resolver: &'a R,
}

impl<'a, R: AddressResolver> FrameFormatter<'a, R> {
    pub fn new(mode: DisplayMode, target: &'a TargetBinary, resolver: &'a R) -> Self {
        Self {
            mode,
            target,
            resolver,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Render a frame, or `None` if this mode drops it
    pub fn format(&self, frame: &Frame) -> Option<String> {
        let origin = locate_frame(frame, self.target, self.resolver);
        render(self.mode, frame, &origin)
    }
}

/// Render an already-located frame
pub fn render(mode: DisplayMode, frame: &Frame, origin: &FrameOrigin) -> Option<String> {
    match mode {
        DisplayMode::Filtered => match origin {
            FrameOrigin::Target(Resolution::Resolved(location)) => {
                Some(format!("  {}", location_text(location)))
            }
            _ => None,
        },
        DisplayMode::FullStack => {
            let tag = FrameTag::for_origin(origin);
            let body = match origin {
                FrameOrigin::Target(Resolution::Resolved(location)) => location_text(location),
                _ => raw_text(frame),
            };
            Some(format!("  {} {}", tag.as_str(), body))
        }
    }
}

fn location_text(location: &SourceLocation) -> String {
    format!("at: {}; line: {}", location.file, location.line)
}

fn raw_text(frame: &Frame) -> String {
    format!("<{}+{}>", frame.binary_name(), frame.address)
}
