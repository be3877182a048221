//! Address-to-source resolution.
//!
//! Symbol tables and DWARF are never read here: every lookup is delegated
//! to an external symbolizer, and every way that can fail (timeout, tool
//! missing, non-zero exit, garbage output, `??` reply) comes back as
//! [`Resolution::Unresolved`] instead of an error.

pub mod addr2line;
pub mod types;

use std::path::Path;

pub use self::addr2line::Addr2LineResolver;
pub use types::{parse_reply, Resolution, SourceLocation};

/// Maps an address within a binary to a source location
pub trait AddressResolver {
    fn resolve(&self, binary: &Path, address: &str) -> Resolution;
}

impl<F> AddressResolver for F
where
    F: Fn(&Path, &str) -> Resolution,
{
    fn resolve(&self, binary: &Path, address: &str) -> Resolution {
        self(binary, address)
    }
}
