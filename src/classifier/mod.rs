//! Library classification and frame origin.
//!
//! This module decides, per stack frame, whether it belongs to the
//! profiled program or to a runtime library:
//! - `is_system_library` - denylist substring match on a binary name
//! - `TargetBinary` - the profiled program and its base name
//! - `origin` - declared vs. inferred frame origin

pub mod origin;

use crate::utils::config::SYSTEM_LIBRARY_PATTERNS;
use std::path::{Path, PathBuf};

pub use origin::{locate_frame, FrameOrigin};

/// Base filename of a path-like binary name
fn base_name(binary: &str) -> &str {
    Path::new(binary)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(binary)
}

/// Check whether a binary is a runtime/support library.
///
/// Approximate on purpose: a substring of the base filename, so versioned
/// names like `libc-2.31.so` or `libpthread.so.0` match.
pub fn is_system_library(binary_name: &str) -> bool {
    let name = base_name(binary_name);
    SYSTEM_LIBRARY_PATTERNS
        .iter()
        .any(|pattern| name.contains(pattern))
}

/// The profiled program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetBinary {
    path: PathBuf,
    name: String,
}

impl TargetBinary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    /// Path handed to the symbolizer
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base filename, compared against frames' declared binaries
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exact match of a frame's binary name against the base filename
    pub fn is_target(&self, binary_name: &str) -> bool {
        binary_name == self.name
    }
}

/// Derived classification of a declared binary name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub is_target: bool,
    pub is_system: bool,
}

/// Classify a binary name against the target
pub fn classify(binary_name: &str, target: &TargetBinary) -> Classification {
    Classification {
        is_target: target.is_target(binary_name),
        is_system: is_system_library(binary_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_libraries() {
        for name in [
            "libc.so.6",
            "libc-2.31.so",
            "libpthread.so.0",
            "libpthread-2.31.so",
            "ld-linux-x86-64.so.2",
            "libdl.so.2",
            "libm.so.6",
            "libprofiler.so",
            "/lib/x86_64-linux-gnu/libc.so.6",
        ] {
            assert!(is_system_library(name), "{} should be a system library", name);
        }
    }

    #[test]
    fn test_non_system_libraries() {
        for name in ["test_simple_leak", "libstdc++.so.6", "libcrypto.so.3", "unknown"] {
            assert!(!is_system_library(name), "{} should not be a system library", name);
        }
    }

    #[test]
    fn test_pattern_only_matches_base_name() {
        // Directory components never count
        assert!(!is_system_library("/opt/libc-tools/bin/app"));
    }

    #[test]
    fn test_target_binary_name() {
        let target = TargetBinary::new("./build/test_simple_leak");
        assert_eq!(target.name(), "test_simple_leak");
        assert_eq!(target.path(), Path::new("./build/test_simple_leak"));
        assert!(target.is_target("test_simple_leak"));
        assert!(!target.is_target("test_simple_leak.so"));
        assert!(!target.is_target("./build/test_simple_leak"));
    }

    #[test]
    fn test_classify() {
        let target = TargetBinary::new("/tmp/app");
        assert_eq!(
            classify("app", &target),
            Classification {
                is_target: true,
                is_system: false
            }
        );
        assert_eq!(
            classify("libc.so.6", &target),
            Classification {
                is_target: false,
                is_system: true
            }
        );
        assert_eq!(
            classify("libfoo.so", &target),
            Classification {
                is_target: false,
                is_system: false
            }
        );
    }
}
