use std::fmt;

mod executor;
mod signal;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    /// Process creation itself failed (resource exhaustion); the cycle ends
    /// with the recorded status unchanged.
    SpawnFailed(std::io::Error),
    WaitFailed(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::SpawnFailed(e) => write!(f, "cannot spawn: {}", e),
            ProcessError::WaitFailed(e) => write!(f, "wait failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
