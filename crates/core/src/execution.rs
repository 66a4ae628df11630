use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use log::{debug, info};
use tokio::process::Child;

use crate::error::{Error, Result};

/// Exit code reported when a child ends without one of its own.
const UNKNOWN_EXIT_CODE: i32 = 1;

/// Builds a command from a configured command line such as `["npx", "vite"]`.
///
/// # Errors
///
/// Returns an error if `command_line` is empty.
pub fn build_command(command_line: &[String], working_directory: Option<&Path>) -> Result<Command> {
    let Some((program, arguments)) = command_line.split_first() else {
        return Err(Error::EmptyCommand("command".to_string()));
    };

    let mut command = Command::new(program);
    command.args(arguments);

    if let Some(working_directory) = working_directory {
        command.current_dir(working_directory);
    }

    Ok(command)
}

/// Renders a command the way it would be typed in a shell.
#[must_use]
pub fn describe_command(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs `command` attached to the caller's terminal and waits for it.
///
/// Termination signals received while waiting are passed on to the child
/// and the wait continues, so the child decides how to shut down. The
/// child's exit code is returned; a child killed by a signal reports
/// `128 + signal`, as shells do.
///
/// # Errors
///
/// Returns an error if the child cannot be spawned or waited on.
pub fn supervise_command(command: Command) -> Result<i32> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(supervise(command))
}

async fn supervise(command: Command) -> Result<i32> {
    let program = command.get_program().to_string_lossy().into_owned();
    info!("Executing `{}`", describe_command(&command));

    let mut command = tokio::process::Command::from(command);
    command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut forwarder = SignalForwarder::install()?;
    let mut child = command
        .spawn()
        .map_err(|e| Error::spawn_error(program.clone(), e))?;

    let status = forwarder.wait(&mut child).await?;
    debug!("`{}` exited with {}", program, status);

    Ok(exit_code(status))
}

/// Maps a child's exit status onto the code the runner should exit with.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    UNKNOWN_EXIT_CODE
}

#[cfg(unix)]
struct SignalForwarder {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
    hangup: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl SignalForwarder {
    /// Must be installed before spawning, or a signal arriving in between
    /// would kill the runner and orphan the child.
    fn install() -> Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
            hangup: signal(SignalKind::hangup())?,
        })
    }

    async fn wait(&mut self, child: &mut Child) -> Result<ExitStatus> {
        use nix::sys::signal::Signal;

        loop {
            tokio::select! {
                status = child.wait() => return Ok(status?),
                _ = self.interrupt.recv() => forward_signal(child, Signal::SIGINT),
                _ = self.terminate.recv() => forward_signal(child, Signal::SIGTERM),
                _ = self.hangup.recv() => forward_signal(child, Signal::SIGHUP),
            }
        }
    }
}

#[cfg(unix)]
fn forward_signal(child: &Child, signal: nix::sys::signal::Signal) {
    use log::warn;
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    // No id means the child has already been reaped
    let Some(pid) = child.id().and_then(|id| i32::try_from(id).ok()) else {
        return;
    };

    debug!("Forwarding {} to child {}", signal, pid);
    if let Err(e) = kill(Pid::from_raw(pid), signal) {
        // ESRCH: the child exited between the signal and the forward
        if e != nix::errno::Errno::ESRCH {
            warn!("Could not forward {} to child {}: {}", signal, pid, e);
        }
    }
}

/// Console control events already reach every process attached to the
/// console, so outside Unix the runner only has to survive them.
#[cfg(not(unix))]
struct SignalForwarder;

#[cfg(not(unix))]
impl SignalForwarder {
    fn install() -> Result<Self> {
        Ok(Self)
    }

    async fn wait(&mut self, child: &mut Child) -> Result<ExitStatus> {
        loop {
            tokio::select! {
                status = child.wait() => return Ok(status?),
                _ = tokio::signal::ctrl_c() => debug!("Interrupt received, waiting for child"),
            }
        }
    }
}
