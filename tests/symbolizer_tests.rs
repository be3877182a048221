//! Exercises the real subprocess path of `Addr2LineResolver`.
//!
//! `sh` stands in for addr2line: the resolver runs
//! `sh -e <binary> -f -C -s -a <addr>`, so the "binary" is read as a shell
//! script and the address arrives as `$5`.
#![cfg(unix)]

use leakscope::symbolizer::{Addr2LineResolver, AddressResolver, Resolution, SourceLocation};
use leakscope::utils::error::ResolveError;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;

fn script(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn sh_resolver() -> Addr2LineResolver {
    Addr2LineResolver::new()
        .with_program("sh")
        .with_timeout(Duration::from_secs(5))
}

#[test]
fn test_resolves_third_line() {
    let binary = script("printf '%s\\nmain\\ntest_simple_leak.c:18\\n' \"$5\"\n");
    let location = sh_resolver().lookup(binary.path(), "0x4011ea").unwrap();
    assert_eq!(location, SourceLocation::new("test_simple_leak.c", "18"));
}

#[test]
fn test_passes_addr2line_flags_and_address() {
    let binary = script("printf '%s\\nmain\\n%s%s%s%s.c:%s\\n' \"$5\" \"$1\" \"$2\" \"$3\" \"$4\" \"$5\"\n");
    let location = sh_resolver().lookup(binary.path(), "0x99").unwrap();
    assert_eq!(location, SourceLocation::new("-f-C-s-a.c", "0x99"));
}

#[test]
fn test_unknown_location_reply() {
    let binary = script("printf '0x1\\n??\\n??:0\\n'\n");
    assert_eq!(
        sh_resolver().lookup(binary.path(), "0x1"),
        Err(ResolveError::UnknownLocation("??:0".to_string()))
    );
}

#[test]
fn test_non_zero_exit() {
    let binary = script("printf '0x1\\nmain\\na.c:1\\n'\nexit 3\n");
    assert!(matches!(
        sh_resolver().lookup(binary.path(), "0x1"),
        Err(ResolveError::NonZeroExit(_))
    ));
}

#[test]
fn test_malformed_reply() {
    let binary = script("echo only-one-line\n");
    assert!(matches!(
        sh_resolver().lookup(binary.path(), "0x1"),
        Err(ResolveError::MalformedOutput(_))
    ));
}

#[test]
fn test_timeout_kills_symbolizer() {
    let binary = script("exec sleep 10\n");
    let resolver = sh_resolver().with_timeout(Duration::from_millis(200));

    let started = Instant::now();
    let result = resolver.lookup(binary.path(), "0x1");

    assert_eq!(result, Err(ResolveError::Timeout(200)));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn test_every_failure_collapses_to_unresolved() {
    let missing = Addr2LineResolver::new().with_program("leakscope-no-such-addr2line");
    assert!(!missing.resolve(Path::new("/bin/sh"), "0x1").is_resolved());

    let binary = script("exit 1\n");
    assert!(matches!(
        sh_resolver().resolve(binary.path(), "0x1"),
        Resolution::Unresolved(ResolveError::NonZeroExit(_))
    ));
}
