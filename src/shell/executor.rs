use std::io::Write;

use tracing::debug;

use super::Shell;
use crate::core::commands::{self, Builtin, PID_PROMPT};
use crate::error::ShellError;
use crate::input::{Command, LineReader};
use crate::process::Pid;

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Result<(), ShellError>;
}

impl<R: LineReader, O: Write, E: Write> CommandHandler for Shell<R, O, E> {
    fn execute_command(&mut self, line: &str) -> Result<(), ShellError> {
        if line.trim().is_empty() {
            return Ok(());
        }

        let command = Command::parse(line, self.state.config().max_args);
        let Some(program) = command.program() else {
            return Ok(());
        };

        match Builtin::lookup(program) {
            Some(builtin) => self.run_builtin(builtin, &command),
            None => self.run_external(&command),
        }
    }
}

impl<R: LineReader, O: Write, E: Write> Shell<R, O, E> {
    fn run_builtin(&mut self, builtin: Builtin, command: &Command) -> Result<(), ShellError> {
        debug!(builtin = builtin.name(), "running builtin");

        match builtin {
            Builtin::Exit => {
                self.state.stop();
                Ok(())
            }
            Builtin::Cd => {
                let home = self.state.config().home_dir.clone();
                let target = command.args().first().map(String::as_str);
                let path = commands::change_directory(target, &home)?;
                debug!(path = %path.display(), "changed directory");
                Ok(())
            }
            Builtin::Jobs => {
                commands::report_finished(self.state.jobs_mut(), &self.control, &mut self.out)?;
                commands::list_jobs(self.state.jobs(), &mut self.out)
            }
            Builtin::Kill => self.kill(command),
        }
    }

    /// `kill [pid]`: asks for the pid when none is given.
    fn kill(&mut self, command: &Command) -> Result<(), ShellError> {
        let input = match command.args().first() {
            Some(arg) => arg.clone(),
            None => match self.reader.read_line(PID_PROMPT)? {
                Some(line) => line,
                None => {
                    self.state.stop();
                    return Ok(());
                }
            },
        };
        let pid = commands::parse_pid(&input)?;

        commands::report_finished(self.state.jobs_mut(), &self.control, &mut self.out)?;
        let job = commands::kill_job(self.state.jobs_mut(), &self.control, pid)?;
        self.notice(&format!("[{}] Terminated\t{}", job.id, job.name))
    }

    fn run_external(&mut self, command: &Command) -> Result<(), ShellError> {
        let Some(program) = command.program() else {
            return Ok(());
        };

        let path = self.state.search_path().resolve(program)?;
        debug!(program, path = %path.display(), "resolved command");

        let child = self
            .executor
            .spawn(&path, command.argv(), command.is_background())?;

        if !command.is_background() {
            return Ok(self.executor.wait(child)?);
        }

        let pid = child.id() as Pid;
        // Frees the slots of jobs that already finished.
        commands::report_finished(self.state.jobs_mut(), &self.control, &mut self.out)?;
        // An untracked job keeps running; only the listing is lost.
        let id = self.state.jobs_mut().add(pid, program)?;
        self.notice(&format!("[{}] {}", id, pid))
    }
}
