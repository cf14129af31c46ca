use std::ffi::OsStr;
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::{self, ExitStatus};

/// How a launched program finished.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Completion {
    Exited(i32),
    Signaled(i32),
}

#[derive(thiserror::Error, Debug)]
pub enum LaunchError {
    #[error("{program}: {source}")]
    Spawn { program: String, source: io::Error },
    #[error("wait for {program}: {source}")]
    Wait { program: String, source: io::Error },
}

/// Runs an external program to completion.
pub trait Launcher {
    /// `program` is resolved through `PATH`; `args` are passed verbatim after it.
    fn launch(&mut self, program: &OsStr, args: &[&OsStr]) -> Result<Completion, LaunchError>;
}

/// Spawns a child that inherits the shell's stdio and working directory.
#[derive(Default, Debug)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&mut self, program: &OsStr, args: &[&OsStr]) -> Result<Completion, LaunchError> {
        // A failed exec in the child comes back here as a spawn error.
        let mut child = process::Command::new(program)
            .args(args)
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: program.to_string_lossy().into_owned(),
                source,
            })?;

        log::debug!("spawned {} as pid {}", program.to_string_lossy(), child.id());

        // Only exit or death by signal ends the wait; a stopped child keeps us blocked.
        let status = child.wait().map_err(|source| LaunchError::Wait {
            program: program.to_string_lossy().into_owned(),
            source,
        })?;

        completion(status).map_err(|source| LaunchError::Wait {
            program: program.to_string_lossy().into_owned(),
            source,
        })
    }
}

fn completion(status: ExitStatus) -> io::Result<Completion> {
    if let Some(code) = status.code() {
        return Ok(Completion::Exited(code));
    }

    match status.signal() {
        Some(signal) => Ok(Completion::Signaled(signal)),
        None => Err(io::Error::other(format!("unexpected wait status {status}"))),
    }
}
