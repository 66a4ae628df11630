//! Drill Runner CLI Library
//!
//! This crate provides the two command-line runners of a drill study
//! repository. Both take a drill number, resolve it to one file and hand
//! control to it.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing for both binaries
//! - [`project`]: Project root and configuration loading
//! - [`menu`]: Drill listing for help output
//! - [`plain`]: Runs a script drill with the script runtime (`drill`)
//! - [`interactive`]: Mounts a component drill and supervises the dev server
//!   (`react-drill`)
//!
//! # Examples
//!
//! ```bash
//! # Run drills/01_*.js
//! drill 01
//!
//! # Mount src/drills/07_*.jsx and start the dev server
//! react-drill 7
//!
//! # Show the drills that are available
//! react-drill --list
//!
//! # Show what would be written and run
//! react-drill --dry-run 13
//! ```

use std::process::ExitCode;

pub mod cli_args;
pub mod interactive;
pub mod menu;
pub mod plain;
pub mod project;

/// Converts a child's exit code into the runner's own.
///
/// Codes that do not fit a process exit code collapse to a generic failure.
#[must_use]
pub fn to_exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
