//! Fixed report sections: mode banner, section headers, summary.

use crate::parser::{LeakHeader, LeakSummary};
use crate::utils::config::MODE_BANNER_WIDTH;
use std::io::{self, Write};

/// Banner printed before any input in full-stack mode
pub fn write_mode_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(MODE_BANNER_WIDTH);
    writeln!(out, "{}", rule)?;
    writeln!(out, "PROFILER MODE: FULL SYSTEM STACK DUMP")?;
    writeln!(out, "(All frames including system libraries will be shown)")?;
    writeln!(out, "{}", rule)?;
    writeln!(out)
}

/// One-time header preceding the first corruption event
pub fn write_corruption_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "========== DOUBLE/INVALID FREE ERRORS ==========")?;
    writeln!(out)
}

/// Leak-section header from a `header` record
pub fn write_leak_header<W: Write>(header: &LeakHeader, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "========== MEMORY LEAKS ==========")?;
    writeln!(
        out,
        "Found {} leak(s), {} bytes total",
        header.leaks_count, header.total_bytes
    )?;
    writeln!(out)
}

/// Final statistics from a `summary` record.
///
/// The libc line only appears when libc leaks were reported.
pub fn write_summary<W: Write>(
    summary: &LeakSummary,
    corruption_count: u64,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Summary:")?;
    writeln!(
        out,
        "  Real leaks: {} allocation(s), {} bytes",
        summary.real_leaks, summary.real_bytes
    )?;
    if summary.libc_leaks > 0 {
        writeln!(
            out,
            "  Libc infrastructure: {} allocation(s), {} bytes (ignored)",
            summary.libc_leaks, summary.libc_bytes
        )?;
    }
    writeln!(out, "  Free errors: {}", corruption_count)?;
    writeln!(out, "==================================")?;
    writeln!(out)
}
