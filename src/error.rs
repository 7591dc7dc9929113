use std::path::PathBuf;

use crate::process::jobs::JobError;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    CommandNotFound(String),
    DirectoryChange {
        path: PathBuf,
        source: std::io::Error,
    },
    InvalidPid(String),
    Process(ProcessError),
    Job(JobError),
    CtrlC(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::Process(err)
    }
}

impl From<JobError> for ShellError {
    fn from(err: JobError) -> Self {
        ShellError::Job(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::CommandNotFound(cmd) => write!(f, "{}: command not found", cmd),
            ShellError::DirectoryChange { path, source } => {
                write!(f, "cd: {}: {}", path.display(), source)
            }
            ShellError::InvalidPid(input) => write!(f, "kill: invalid process id: {:?}", input),
            ShellError::Process(e) => write!(f, "{}", e),
            ShellError::Job(e) => write!(f, "{}", e),
            ShellError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Readline(e) => Some(e),
            ShellError::Io(e) => Some(e),
            ShellError::DirectoryChange { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let not_found = ShellError::CommandNotFound("frobnicate".to_string());
        assert_eq!(not_found.to_string(), "frobnicate: command not found");

        let cd = ShellError::DirectoryChange {
            path: PathBuf::from("/nonexistent"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(cd.to_string(), "cd: /nonexistent: No such file or directory");

        let errors = vec![
            ShellError::InvalidPid("abc".to_string()),
            ShellError::Job(JobError::CapacityExceeded(10)),
            ShellError::Job(JobError::NotFound(42)),
            ShellError::Process(ProcessError::EmptyCommand),
        ];
        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
