//! Text report rendering.
//!
//! This module turns decoded events into report lines:
//! - Frame lines (filtered or tagged full-stack)
//! - Leak/corruption event blocks
//! - Fixed banners and the summary section

pub mod banner;
pub mod event;
pub mod frame;

// Re-export main types and functions
pub use banner::{write_corruption_banner, write_leak_header, write_mode_banner, write_summary};
pub use event::{event_header, EventProcessor};
pub use frame::{FrameFormatter, FrameTag};
