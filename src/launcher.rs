//! Runs the downloaded binary and waits for it to exit

use std::ffi::OsString;
use std::path::Path;
use std::process::ExitStatus;

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Failed to start {path}: {source}")]
    Spawn {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to wait for child process: {0}")]
    Wait(std::io::Error),

    #[error("Failed to install interrupt handler: {0}")]
    Signal(std::io::Error),
}

/// Starts `executable` with `args`, inheriting stdin/stdout/stderr, and returns
/// its exit code once it terminates.
///
/// Interrupts are delivered to the child as well. They are swallowed here so
/// the exit code reflects how the child actually ended.
pub async fn execute(executable: &Path, args: &[OsString]) -> Result<i32, LaunchError> {
    let mut interrupts = Interrupts::listen().map_err(LaunchError::Signal)?;

    let mut child = Command::new(executable)
        .args(args)
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            path: executable.display().to_string(),
            source,
        })?;

    loop {
        tokio::select! {
            status = child.wait() => return Ok(exit_code(status.map_err(LaunchError::Wait)?)),
            Some(()) = interrupts.recv() => {
                debug!("Interrupted, waiting for child process to exit");
            }
        }
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

#[cfg(unix)]
struct Interrupts(tokio::signal::unix::Signal);

#[cfg(unix)]
impl Interrupts {
    fn listen() -> std::io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};
        signal(SignalKind::interrupt()).map(Self)
    }

    async fn recv(&mut self) -> Option<()> {
        self.0.recv().await
    }
}

#[cfg(windows)]
struct Interrupts(tokio::signal::windows::CtrlC);

#[cfg(windows)]
impl Interrupts {
    fn listen() -> std::io::Result<Self> {
        tokio::signal::windows::ctrl_c().map(Self)
    }

    async fn recv(&mut self) -> Option<()> {
        self.0.recv().await
    }
}
