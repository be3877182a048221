//! Deciding which binary a frame executed in.
//!
//! Two paths:
//! - **Declared**: the profiler named the frame's binary, so the classifier
//!   decides. System libraries are never resolved.
//! - **Inferred**: no binary was named. The address is resolved against the
//!   target; a real location means target code, anything else is taken to
//!   be an unidentified system library.
//!
//! The inferred path is best-effort: an address from another binary that
//! happens to resolve inside the target's debug info is misattributed.

use super::{classify, TargetBinary};
use crate::parser::Frame;
use crate::symbolizer::{AddressResolver, Resolution};
use log::trace;

/// Where a frame came from, plus the resolution when one was attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOrigin {
    /// Target binary code
    Target(Resolution),

    /// Runtime/support library; never resolved
    System,

    /// A named binary that is neither the target nor a known library
    Foreign,
}

/// Locate a frame, resolving it only when it may be target code
pub fn locate_frame<R: AddressResolver>(
    frame: &Frame,
    target: &TargetBinary,
    resolver: &R,
) -> FrameOrigin {
    match frame.binary.as_deref() {
        Some(binary) => {
            let class = classify(binary, target);
            if class.is_system {
                FrameOrigin::System
            } else if class.is_target {
                FrameOrigin::Target(resolver.resolve(target.path(), &frame.address))
            } else {
                FrameOrigin::Foreign
            }
        }
        None => infer_origin(frame, target, resolver),
    }
}

fn infer_origin<R: AddressResolver>(
    frame: &Frame,
    target: &TargetBinary,
    resolver: &R,
) -> FrameOrigin {
    let resolution = resolver.resolve(target.path(), &frame.address);
    if resolution.is_resolved() {
        FrameOrigin::Target(resolution)
    } else {
        trace!("{} did not resolve in {}, assuming a system library", frame.address, target.name());
        FrameOrigin::System
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolizer::SourceLocation;
    use crate::utils::error::ResolveError;
    use std::cell::Cell;
    use std::path::Path;

    fn target() -> TargetBinary {
        TargetBinary::new("/work/app")
    }

    #[test]
    fn test_declared_system_frame_is_not_resolved() {
        let calls = Cell::new(0);
        let resolver = |_: &Path, _: &str| {
            calls.set(calls.get() + 1);
            Resolution::Resolved(SourceLocation::new("x.c", "1"))
        };

        let origin = locate_frame(&Frame::declared("0x1", "libc-2.31.so"), &target(), &resolver);
        assert_eq!(origin, FrameOrigin::System);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_declared_target_frame_is_resolved_against_target_path() {
        let resolver = |binary: &Path, address: &str| {
            assert_eq!(binary, Path::new("/work/app"));
            assert_eq!(address, "0x4011ea");
            Resolution::Resolved(SourceLocation::new("app.c", "18"))
        };

        let origin = locate_frame(&Frame::declared("0x4011ea", "app"), &target(), &resolver);
        assert_eq!(
            origin,
            FrameOrigin::Target(Resolution::Resolved(SourceLocation::new("app.c", "18")))
        );
    }

    #[test]
    fn test_declared_foreign_frame() {
        let resolver = |_: &Path, _: &str| -> Resolution { panic!("foreign frames are not resolved") };
        let origin = locate_frame(&Frame::declared("0x1", "libstdc++.so.6"), &target(), &resolver);
        assert_eq!(origin, FrameOrigin::Foreign);
    }

    #[test]
    fn test_inferred_frames() {
        let resolver = |_: &Path, address: &str| {
            if address == "0x10" {
                Resolution::Resolved(SourceLocation::new("app.c", "3"))
            } else {
                Resolution::Unresolved(ResolveError::UnknownLocation("??:0".to_string()))
            }
        };

        assert!(matches!(
            locate_frame(&Frame::bare("0x10"), &target(), &resolver),
            FrameOrigin::Target(Resolution::Resolved(_))
        ));
        assert_eq!(
            locate_frame(&Frame::bare("0x20"), &target(), &resolver),
            FrameOrigin::System
        );
    }
}
