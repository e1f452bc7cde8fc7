use std::io;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use super::signal::InterruptGuard;
use super::ProcessError;
use crate::core::env::EnvTable;

#[derive(Clone, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Runs `path` in a child process: argv[0] stays the token the user
    /// typed, the environment is a snapshot of the session table, and the
    /// call blocks until the child terminates. Returns the normalized
    /// status; only a failure to create the process at all is an `Err`.
    pub fn execute(
        &self,
        path: &Path,
        argv: &[String],
        env: &EnvTable,
    ) -> Result<i32, ProcessError> {
        let mut command = Command::new(path);
        command
            .args(&argv[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(env.iter());
        if let Some(arg0) = argv.first() {
            command.arg0(arg0);
        }

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => return Ok(126),
            Err(e) if is_resource_failure(&e) => return Err(ProcessError::SpawnFailed(e)),
            // the child-side replacement failed; it never re-enters the loop
            Err(_) => return Ok(1),
        };

        let _guard = InterruptGuard::install();
        let status = child.wait().map_err(ProcessError::WaitFailed)?;
        Ok(normalize(status))
    }
}

/// fork-level failures, as opposed to exec-level ones
fn is_resource_failure(e: &io::Error) -> bool {
    matches!(e.raw_os_error(), Some(libc::EAGAIN) | Some(libc::ENOMEM))
}

/// Normal exits keep their code; a signal death maps to 128+signal so the
/// loop always gets an integer back.
fn normalize(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => status.signal().map(|sig| 128 + sig).unwrap_or(1),
    }
}
