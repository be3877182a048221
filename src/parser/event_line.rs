//! Line decoder for the profiler's mixed JSON/text stream.
//!
//! The profiler writes JSON-lines events to stderr, and that same stream
//! carries whatever plain-text diagnostics the program prints. Every line
//! is tried as an event first; anything that does not decode is passed
//! through untouched.

use super::schema::{Event, Frame, LeakHeader, LeakSummary, StackEvent};
use crate::utils::config::{MISSING_ADDRESS, UNKNOWN_EVENT_LABEL};
use crate::utils::error::ParseError;
use log::{trace, warn};
use serde::Deserialize;

/// Classification of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Empty after trimming; produces no output
    Blank,

    /// Not an event; printed as-is (trimmed)
    Passthrough(String),

    /// A decoded profiler event
    Event(Event),
}

/// Raw record as written by the profiler.
///
/// Every field is optional on the wire; defaults are applied in
/// [`RawRecord::into_event`].
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default, rename = "type")]
    kind: Option<String>,

    #[serde(default)]
    addr: Option<String>,

    #[serde(default)]
    size: Option<u64>,

    #[serde(default)]
    frames: Option<Vec<RawFrame>>,

    #[serde(default)]
    leaks_count: Option<u64>,

    #[serde(default)]
    total_bytes: Option<u64>,

    #[serde(default)]
    real_leaks: Option<u64>,

    #[serde(default)]
    real_bytes: Option<u64>,

    #[serde(default)]
    libc_leaks: Option<u64>,

    #[serde(default)]
    libc_bytes: Option<u64>,
}

/// Frame entry; older profiler builds emitted bare address strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFrame {
    Record {
        #[serde(default)]
        addr: Option<String>,
        #[serde(default)]
        bin: Option<String>,
    },
    Bare(String),
    Other(serde_json::Value),
}

impl RawFrame {
    fn into_frame(self) -> Frame {
        match self {
            RawFrame::Record { addr, bin } => Frame {
                address: addr.unwrap_or_else(|| MISSING_ADDRESS.to_string()),
                binary: bin,
            },
            RawFrame::Bare(addr) => Frame::bare(addr),
            RawFrame::Other(value) => {
                warn!("Unrecognized frame entry, keeping it as a bare address: {}", value);
                Frame::bare(value.to_string())
            }
        }
    }
}

impl RawRecord {
    fn into_event(self) -> Event {
        match self.kind.as_deref() {
            Some("header") => Event::Header(LeakHeader {
                leaks_count: self.leaks_count.unwrap_or(0),
                total_bytes: self.total_bytes.unwrap_or(0),
            }),
            Some("summary") => Event::Summary(LeakSummary {
                real_leaks: self.real_leaks.unwrap_or(0),
                real_bytes: self.real_bytes.unwrap_or(0),
                libc_leaks: self.libc_leaks.unwrap_or(0),
                libc_bytes: self.libc_bytes.unwrap_or(0),
            }),
            kind => {
                let address = self
                    .addr
                    .unwrap_or_else(|| MISSING_ADDRESS.to_string());
                let frames: Vec<Frame> = self
                    .frames
                    .unwrap_or_default()
                    .into_iter()
                    .map(RawFrame::into_frame)
                    .collect();

                let event = match kind {
                    Some("leak") => StackEvent::leak(address, self.size.unwrap_or(0), frames),
                    other => StackEvent::corruption(
                        other.unwrap_or(UNKNOWN_EVENT_LABEL),
                        address,
                        frames,
                    ),
                };
                Event::Stack(event)
            }
        }
    }
}

/// Decode a single line of profiler output
///
/// **Public** - main entry point for the stream interpreter
///
/// Never fails: anything that is not a JSON object event becomes
/// [`Line::Passthrough`].
pub fn decode_line(raw: &str) -> Line {
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }

    match decode_event(line) {
        Ok(event) => Line::Event(event),
        Err(e) => {
            trace!("Passing line through ({}): {}", e, line);
            Line::Passthrough(line.to_string())
        }
    }
}

/// Decode an event record from JSON text
///
/// # Errors
/// * `ParseError::JsonError` - not JSON, or a field has the wrong type
/// * `ParseError::InvalidFormat` - valid JSON that is not an object
pub fn decode_event(text: &str) -> Result<Event, ParseError> {
    let value: serde_json::Value = serde_json::from_str(text)?;

    if !value.is_object() {
        return Err(ParseError::InvalidFormat(
            "event must be a JSON object".to_string(),
        ));
    }

    let record: RawRecord = serde_json::from_value(value)?;
    Ok(record.into_event())
}
