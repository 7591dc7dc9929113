use std::fmt;
use std::path::PathBuf;

pub mod executor;
pub mod jobs;
pub mod signal;

pub use executor::ProcessExecutor;
pub use jobs::{Job, JobError, JobState, JobTable, Pid, ProcessControl, SystemProcesses};

#[derive(Debug)]
pub enum ProcessError {
    /// The OS could not create a new process (fork failed).
    SpawnFailure(std::io::Error),
    /// The child was created but could not replace its image.
    ExecFailure {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Waiting on a foreground child failed.
    Wait(std::io::Error),
    EmptyCommand,
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::SpawnFailure(e) => write!(f, "fork failed: {}", e),
            ProcessError::ExecFailure { path, source } => {
                write!(f, "{}: cannot execute: {}", path.display(), source)
            }
            ProcessError::Wait(e) => write!(f, "wait failed: {}", e),
            ProcessError::EmptyCommand => write!(f, "empty command"),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::SpawnFailure(e) | ProcessError::Wait(e) => Some(e),
            ProcessError::ExecFailure { source, .. } => Some(source),
            ProcessError::EmptyCommand => None,
        }
    }
}
