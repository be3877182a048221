//! Leakscope
//!
//! Turns memory-profiler JSON-lines output (leak and free-error events,
//! each with a stack of return addresses) into a readable report with
//! source file and line numbers.
//!
//! This crate provides the core implementation for the
//! `leakscope` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! LD_PRELOAD=./libprofiler.so ./my_program 2>&1 | leakscope - ./my_program
//! PROFILER_FULL_STACK=1 leakscope profile.txt ./my_program
//! ```
//!
//! ## Pipeline
//!
//! `parser` decodes each line, `interpreter` dispatches events and keeps the
//! run counters, `classifier` and `symbolizer` place each frame, and
//! `output` renders it.

pub mod classifier;
pub mod commands;
pub mod interpreter;
pub mod output;
pub mod parser;
pub mod symbolizer;
pub mod utils;
