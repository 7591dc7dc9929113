use crate::error::ShellError;
use crate::process::{Job, JobTable, Pid, ProcessControl};

pub const PID_PROMPT: &str = "pid: ";

/// Reads a process id: exactly one token, a positive integer.
pub fn parse_pid(input: &str) -> Result<Pid, ShellError> {
    let mut tokens = input.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => match token.parse::<Pid>() {
            Ok(pid) if pid > 0 => Ok(pid),
            _ => Err(ShellError::InvalidPid(input.trim().to_string())),
        },
        _ => Err(ShellError::InvalidPid(input.trim().to_string())),
    }
}

/// Sends SIGTERM to the background job running as `pid` and frees its slot.
pub fn kill_job<P: ProcessControl>(
    table: &mut JobTable,
    control: &P,
    pid: Pid,
) -> Result<Job, ShellError> {
    Ok(table.terminate(pid, control)?)
}
