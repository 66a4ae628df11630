//! Drill Runner Core Library
//!
//! This crate provides the core functionality for the drill runners, two small
//! command line tools that resolve a drill number to a file in a study
//! repository and hand control to it: either by running the script directly,
//! or by mounting a component through a bootstrap entry file and launching a
//! dev server.
//!
//! # Key Features
//!
//! - **Drill Selection**: Map a numeric id to one file in a drill directory
//! - **Drill Listing**: Enumerate available drills for help output
//! - **Bootstrap Rendering**: Template the entry file that mounts a component
//! - **Child Supervision**: Run a child in the caller's terminal, forward
//!   signals and propagate its exit code
//! - **Configuration Management**: Optional YAML config with path resolution
//!
//! # Examples
//!
//! Resolving a script drill:
//!
//! ```no_run
//! use std::path::Path;
//! use drill_runner_core::drill_definitions::DrillKind;
//! use drill_runner_core::selection::resolve_drill_file;
//!
//! let drill = resolve_drill_file(Path::new("drills"), "01", DrillKind::Script)?;
//! println!("Drill: {}", drill);
//! # Ok::<(), drill_runner_core::error::Error>(())
//! ```

pub mod bootstrap;
pub mod config;
pub mod drill_definitions;
pub mod error;
pub mod execution;
pub mod interpolation;
pub mod selection;
