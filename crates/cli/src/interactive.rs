//! The component drill runner.
//!
//! A session goes through resolve, render, write, spawn and supervise, in
//! that order. [`prepare`] covers the part that only reads, so it can be
//! shown in a dry run; [`launch`] does the writing and the spawning.

use std::io::{stderr, stdout};
use std::path::PathBuf;
use std::process::Command;

use log::{debug, info, warn};

use drill_runner_core::bootstrap::{render_for_drill, write_bootstrap, BootstrapGuard};
use drill_runner_core::config::{get_project_root, RunnerConfig};
use drill_runner_core::drill_definitions::{DrillFile, DrillKind};
use drill_runner_core::error::{Error, Result};
use drill_runner_core::execution::{build_command, describe_command, supervise_command};
use drill_runner_core::selection::resolve_drill_file;

use crate::cli_args::InteractiveArgs;
use crate::menu::{print_menu, print_menu_hint};
use crate::project::Project;

pub const USAGE: &str = "Usage: react-drill <drill-number>\nExample: react-drill 13";

/// Everything needed to start a dev session for one drill.
#[derive(Debug)]
pub struct Session {
    /// Drill number as the user typed it.
    pub requested_id: String,
    pub drill: DrillFile,
    pub bootstrap_path: PathBuf,
    pub bootstrap_contents: String,
    pub dev_server: Command,
    pub restore_bootstrap: bool,
}

impl Session {
    /// Overwrites the bootstrap entry with this session's contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_bootstrap(&self) -> Result<()> {
        write_bootstrap(&self.bootstrap_path, &self.bootstrap_contents)
    }
}

fn components_directory(args: &InteractiveArgs, project: &Project) -> PathBuf {
    project
        .config
        .components_directory(&project.root, args.components_dir.as_deref())
}

/// Component directory for the usage menu. A config that cannot be loaded
/// only loses its directory override here; the usage error still stands.
fn menu_directory_without_config(args: &InteractiveArgs) -> PathBuf {
    match Project::load(&args.common) {
        Ok(project) => components_directory(args, &project),
        Err(e) => {
            warn!("Ignoring config for the drill menu: {e}");
            let root = get_project_root(args.common.project_root.as_deref())
                .unwrap_or_else(|_| PathBuf::from("."));
            RunnerConfig::default().components_directory(&root, args.components_dir.as_deref())
        }
    }
}

/// Resolves the drill and renders its bootstrap entry. Nothing is written.
///
/// # Errors
///
/// Returns an error if:
/// - no drill number was given
/// - no drill matches the number
/// - the bootstrap template is invalid
/// - the dev server command is empty
pub fn prepare(args: &InteractiveArgs, project: &Project) -> Result<Session> {
    let Some(requested_id) = args.drill_id.clone() else {
        return Err(Error::MissingDrillId);
    };

    let drill = resolve_drill_file(
        &components_directory(args, project),
        &requested_id,
        DrillKind::Component,
    )?;
    debug!("Selected drill `{}`", drill.path().display());

    let bootstrap_path = project
        .config
        .bootstrap_path(&project.root, args.bootstrap_path.as_deref());
    let bootstrap_contents =
        render_for_drill(project.config.bootstrap_template(), &bootstrap_path, &drill)?;

    let dev_server = build_command(
        &project.config.dev_server_command()?,
        Some(project.root.as_path()),
    )?;

    Ok(Session {
        requested_id,
        drill,
        bootstrap_path,
        bootstrap_contents,
        dev_server,
        restore_bootstrap: project.config.restore_bootstrap(args.restore_bootstrap),
    })
}

/// Writes the bootstrap entry, then runs the dev server until it exits.
///
/// With restoring enabled the previous bootstrap contents are written back
/// once the dev server is gone, whether it ended cleanly or not.
///
/// # Errors
///
/// Returns an error if the bootstrap cannot be written or the dev server
/// cannot be started.
pub fn launch(session: Session) -> Result<i32> {
    let _guard = if session.restore_bootstrap {
        Some(BootstrapGuard::capture(&session.bootstrap_path)?)
    } else {
        None
    };

    session.write_bootstrap()?;
    println!(
        "Loaded drill {}: {}\n",
        session.requested_id, session.drill.filename
    );
    info!("Starting dev server: {}", describe_command(&session.dev_server));

    supervise_command(session.dev_server)
}

/// Mounts the selected drill and returns the dev server's exit code.
///
/// # Errors
///
/// Returns an error if:
/// - no drill number was given (usage and the drill menu are printed first)
/// - the config cannot be loaded
/// - any step of [`prepare`] or [`launch`] fails
pub fn run(args: &InteractiveArgs) -> Result<i32> {
    if args.drill_id.is_none() && !args.common.list {
        eprintln!("{USAGE}\n");
        print_menu_hint(
            &mut stderr(),
            &menu_directory_without_config(args),
            DrillKind::Component,
        );
        return Err(Error::MissingDrillId);
    }

    let project = Project::load(&args.common)?;

    if args.common.list {
        print_menu(&mut stdout(), &components_directory(args, &project), DrillKind::Component)?;
        return Ok(0);
    }

    let session = prepare(args, &project)?;

    if args.common.dry_run {
        println!(
            "Would write `{}`:\n{}",
            session.bootstrap_path.display(),
            session.bootstrap_contents
        );
        println!("Would run: {}", describe_command(&session.dev_server));
        return Ok(0);
    }

    launch(session)
}
