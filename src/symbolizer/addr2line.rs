//! addr2line-backed address resolver.
//!
//! Each lookup is one `addr2line` process, bounded by a timeout. No lookup
//! is cached: the same address in two frames costs two invocations.

use super::types::{parse_reply, Resolution, SourceLocation};
use super::AddressResolver;
use crate::utils::config::{DEFAULT_SYMBOLIZER, DEFAULT_SYMBOLIZER_TIMEOUT, SYMBOLIZER_POLL_INTERVAL};
use crate::utils::error::ResolveError;
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Resolver that shells out to binutils' addr2line
#[derive(Debug, Clone)]
pub struct Addr2LineResolver {
    program: PathBuf,
    timeout: Duration,
}

impl Default for Addr2LineResolver {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_SYMBOLIZER),
            timeout: DEFAULT_SYMBOLIZER_TIMEOUT,
        }
    }
}

impl Addr2LineResolver {
    /// Create a resolver using `addr2line` from `PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different symbolizer executable
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Bound each invocation by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check that the symbolizer can be run at all.
    ///
    /// Returns the first line of `--version` output (may be empty).
    pub fn version(&self) -> Result<String, ResolveError> {
        let mut command = Command::new(&self.program);
        command.arg("--version");

        let stdout = self.run(command)?;
        Ok(stdout.lines().next().unwrap_or_default().trim().to_string())
    }

    /// Resolve `address` inside `binary`, keeping the failure reason
    pub fn lookup(&self, binary: &Path, address: &str) -> Result<SourceLocation, ResolveError> {
        let mut command = Command::new(&self.program);
        command
            .arg("-e")
            .arg(binary)
            .args(["-f", "-C", "-s", "-a"])
            .arg(address);

        let stdout = self.run(command)?;
        parse_reply(&stdout)
    }

    /// Run a prepared command to completion or until the timeout elapses
    fn run(&self, mut command: Command) -> Result<String, ResolveError> {
        let mut child = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    ResolveError::ToolNotFound(self.program.display().to_string())
                }
                _ => ResolveError::SpawnFailed(e.to_string()),
            })?;

        self.wait_bounded(&mut child)?;

        let output = child
            .wait_with_output()
            .map_err(|e| ResolveError::SpawnFailed(e.to_string()))?;

        if !output.status.success() {
            return Err(ResolveError::NonZeroExit(output.status.to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Poll the child until it exits; kill it once the deadline passes
    fn wait_bounded(&self, child: &mut Child) -> Result<(), ResolveError> {
        let deadline = Instant::now() + self.timeout;

        loop {
            match child.try_wait() {
                Ok(Some(_)) => return Ok(()),
                Ok(None) if Instant::now() >= deadline => {
                    reap(child);
                    return Err(ResolveError::Timeout(self.timeout.as_millis()));
                }
                Ok(None) => thread::sleep(SYMBOLIZER_POLL_INTERVAL),
                Err(e) => {
                    reap(child);
                    return Err(ResolveError::SpawnFailed(e.to_string()));
                }
            }
        }
    }
}

fn reap(child: &mut Child) {
    // The child may already be gone; either way there is nothing to report
    let _ = child.kill();
    let _ = child.wait();
}

impl AddressResolver for Addr2LineResolver {
    fn resolve(&self, binary: &Path, address: &str) -> Resolution {
        let result = self.lookup(binary, address);
        if let Err(reason) = &result {
            debug!("{} in {}: {}", address, binary.display(), reason);
        }
        result.into()
    }
}
