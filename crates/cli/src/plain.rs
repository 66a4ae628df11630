//! The script drill runner.

use std::io::stdout;

use log::debug;

use drill_runner_core::drill_definitions::{DrillFile, DrillKind};
use drill_runner_core::error::{Error, Result};
use drill_runner_core::execution::{build_command, describe_command, supervise_command};
use drill_runner_core::selection::resolve_drill_file;

use crate::cli_args::PlainArgs;
use crate::menu::print_menu;
use crate::project::Project;

pub const USAGE: &str = "Usage: drill <drill-number>\nExample: drill 01";

/// Resolves the drill `args` asks for, without running anything.
///
/// # Errors
///
/// Returns an error if no drill number was given or no drill matches it.
pub fn select(args: &PlainArgs, project: &Project) -> Result<DrillFile> {
    let Some(drill_id) = args.drill_id.as_deref() else {
        return Err(Error::MissingDrillId);
    };

    let drills_directory = project
        .config
        .drills_directory(&project.root, args.drills_dir.as_deref());

    resolve_drill_file(&drills_directory, drill_id, DrillKind::Script)
}

/// Runs the selected script drill and returns its exit code.
///
/// # Errors
///
/// Returns an error if:
/// - no drill number was given (the usage text is printed first)
/// - the config cannot be loaded
/// - no drill matches the number
/// - the script runtime cannot be started
pub fn run(args: &PlainArgs) -> Result<i32> {
    if args.drill_id.is_none() && !args.common.list {
        eprintln!("{USAGE}");
        return Err(Error::MissingDrillId);
    }

    let project = Project::load(&args.common)?;

    if args.common.list {
        let drills_directory = project
            .config
            .drills_directory(&project.root, args.drills_dir.as_deref());
        print_menu(&mut stdout(), &drills_directory, DrillKind::Script)?;
        return Ok(0);
    }

    let drill = select(args, &project)?;
    debug!("Selected drill `{}`", drill.path().display());

    let mut command = build_command(&project.config.script_runtime()?, None)?;
    command.arg(drill.path());

    if args.common.dry_run {
        println!("Would run: {}", describe_command(&command));
        return Ok(0);
    }

    println!("▶ running: {}", drill.filename);
    supervise_command(command)
}

