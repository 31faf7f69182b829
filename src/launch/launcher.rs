//! Process launching for resolved editor commands.
//!
//! The executable is spawned directly with its pre-split argument vector.
//! No shell is involved, so the argument boundaries produced by the
//! tokenizer are exactly what the editor receives.
//!
//! Launch is fire-and-forget: the child is not waited on and its exit
//! status is never observed.
//!
//! The child is also never reaped. For the `lsedit` binary this does not
//! matter, since the process exits right after launching. On Unix a
//! long-lived host that calls [`launch`] repeatedly keeps one zombie entry
//! per editor that has already exited, until the host itself exits or
//! reaps it (for example with `SIGCHLD` set to `SIG_IGN`).

use super::resolver::ResolvedCommand;
use std::process::Command;
use thiserror::Error;

/// Keeps a console window from flashing up for GUI editors on Windows.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Process creation failed.
#[derive(Debug, Error)]
#[error("failed to start '{executable}': {source}")]
pub struct LaunchError {
    /// Executable that could not be started.
    pub executable: String,
    /// Underlying platform error.
    #[source]
    pub source: std::io::Error,
}

/// A successfully started editor process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Launched {
    /// OS process identifier of the child.
    pub pid: u32,
}

/// Spawn `cmd` as a detached child process.
///
/// Returns as soon as the process has been created.
pub fn launch(cmd: &ResolvedCommand) -> Result<Launched, LaunchError> {
    let mut command = Command::new(&cmd.executable);
    command.args(&cmd.arguments);

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        command.creation_flags(CREATE_NO_WINDOW);
    }

    let child = command.spawn().map_err(|source| LaunchError {
        executable: cmd.executable.clone(),
        source,
    })?;

    // Dropping the handle detaches without reaping; the child keeps running on its own.
    Ok(Launched { pid: child.id() })
}
