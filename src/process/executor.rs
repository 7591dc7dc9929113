use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use tracing::{debug, info};

use super::{signal, ProcessError};

/// Launches resolved programs as child processes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Starts `program` with `argv` passed through unchanged, `argv[0]` included.
    ///
    /// If the image cannot be replaced the child exits non-zero on its own and
    /// the failure comes back as [`ProcessError::ExecFailure`].
    ///
    /// `std` reports fork and exec errors through the same `io::Error`, so the
    /// split is by errno only: `EAGAIN` and `ENOMEM` count as
    /// [`ProcessError::SpawnFailure`]. `execve` can also fail with `ENOMEM`,
    /// which then shows up as a spawn failure too.
    pub fn spawn(
        &self,
        program: &Path,
        argv: &[String],
        background: bool,
    ) -> Result<Child, ProcessError> {
        let (name, args) = argv.split_first().ok_or(ProcessError::EmptyCommand)?;

        let mut command = Command::new(program);
        command
            .arg0(name)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        unsafe {
            command.pre_exec(move || signal::set_child_interrupts(background));
        }

        let child = command.spawn().map_err(|e| match e.raw_os_error() {
            Some(libc::EAGAIN) | Some(libc::ENOMEM) => ProcessError::SpawnFailure(e),
            _ => ProcessError::ExecFailure {
                path: program.to_path_buf(),
                source: e,
            },
        })?;

        info!(pid = child.id(), program = %program.display(), background, "spawned");
        Ok(child)
    }

    /// Blocks until `child` terminates. Its exit status is not kept.
    pub fn wait(&self, mut child: Child) -> Result<(), ProcessError> {
        let status = child.wait().map_err(ProcessError::Wait)?;
        debug!(pid = child.id(), %status, "foreground child finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_spawn_and_wait() -> Result<(), ProcessError> {
        let executor = ProcessExecutor::new();
        let child = executor.spawn(Path::new("/bin/sh"), &args(&["sh", "-c", "exit 3"]), false)?;
        executor.wait(child)
    }

    #[test]
    fn test_argv_is_passed_through() -> Result<(), Box<dyn std::error::Error>> {
        let out = env::temp_dir().join(format!("bshell_argv_{}", std::process::id()));
        let script = format!("cat /proc/$$/cmdline > {}; true", out.display());

        let executor = ProcessExecutor::new();
        let child = executor.spawn(
            Path::new("/bin/sh"),
            &args(&["custom-name", "-c", &script]),
            false,
        )?;
        executor.wait(child)?;

        let cmdline = fs::read(&out)?;
        let argv: Vec<&[u8]> = cmdline.split(|b| *b == 0).collect();
        assert_eq!(argv[0], b"custom-name");
        assert_eq!(argv[1], b"-c");
        fs::remove_file(out)?;
        Ok(())
    }

    #[test]
    fn test_exec_failure_is_reported() -> Result<(), std::io::Error> {
        let file = env::temp_dir().join(format!("bshell_noexec_{}", std::process::id()));
        fs::write(&file, "plain text")?;

        let result = ProcessExecutor::new().spawn(&file, &args(&["noexec"]), false);
        assert!(matches!(result, Err(ProcessError::ExecFailure { .. })));
        fs::remove_file(file)
    }

    /// Reads the `SigIgn` mask of a child spawned the way the shell would.
    fn ignored_signals(background: bool) -> Result<u64, Box<dyn std::error::Error>> {
        let out = env::temp_dir().join(format!(
            "bshell_sigign_{}_{}",
            background,
            std::process::id()
        ));
        let script = format!("grep SigIgn /proc/$$/status > {}; true", out.display());

        let executor = ProcessExecutor::new();
        let child = executor.spawn(Path::new("/bin/sh"), &args(&["sh", "-c", &script]), background)?;
        executor.wait(child)?;

        let status = fs::read_to_string(&out)?;
        fs::remove_file(&out)?;
        let mask = status.trim().trim_start_matches("SigIgn:").trim();
        Ok(u64::from_str_radix(mask, 16)?)
    }

    #[test]
    fn test_child_interrupt_disposition() -> Result<(), Box<dyn std::error::Error>> {
        let sigint = 1u64 << (libc::SIGINT - 1);

        assert_eq!(ignored_signals(false)? & sigint, 0);
        assert_eq!(ignored_signals(true)? & sigint, sigint);
        Ok(())
    }

    #[test]
    fn test_empty_argv() {
        let result = ProcessExecutor::new().spawn(Path::new("/bin/true"), &[], false);
        assert!(matches!(result, Err(ProcessError::EmptyCommand)));
    }
}
