use std::io::Write;

use tracing::{info, warn};

mod executor;

use crate::{
    config::ShellConfig,
    core::ShellState,
    error::ShellError,
    highlight::SyntaxHighlighter,
    input::LineReader,
    process::{ProcessExecutor, SystemProcesses},
};

use executor::CommandHandler;

/// Consecutive failed reads after which input is treated as closed.
const MAX_READ_FAILURES: usize = 3;

/// The read-eval loop: prompt, parse, dispatch, repeat until `exit` or end of input.
pub struct Shell<R, O, E> {
    pub(crate) reader: R,
    pub(crate) out: O,
    pub(crate) err: E,
    pub(crate) state: ShellState,
    pub(crate) executor: ProcessExecutor,
    pub(crate) control: SystemProcesses,
    pub(crate) highlighter: SyntaxHighlighter,
}

impl<R: LineReader, O: Write, E: Write> Shell<R, O, E> {
    pub fn new(config: ShellConfig, reader: R, out: O, err: E) -> Self {
        Self::with_state(ShellState::new(config), reader, out, err)
    }

    /// Runs on an existing state, e.g. one whose search path also feeds the editor.
    pub fn with_state(state: ShellState, reader: R, out: O, err: E) -> Self {
        let highlighter = SyntaxHighlighter::new(state.config().color);

        Shell {
            reader,
            out,
            err,
            state,
            executor: ProcessExecutor::new(),
            control: SystemProcesses,
            highlighter,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        info!(dirs = self.state.search_path().len(), "shell started");

        let mut failures = 0;

        while self.state.is_running() {
            let prompt = self.state.prompt();
            let line = match self.reader.read_line(&prompt) {
                Ok(Some(line)) => line,
                // End of input behaves like `exit`.
                Ok(None) => {
                    self.state.stop();
                    break;
                }
                Err(e) => {
                    self.report(&e)?;
                    failures += 1;
                    if failures >= MAX_READ_FAILURES {
                        warn!(failures, "input keeps failing, treating it as closed");
                        self.state.stop();
                    }
                    continue;
                }
            };
            failures = 0;

            if let Err(e) = self.execute_command(&line) {
                self.report(&e)?;
            }
        }

        info!("shell exiting");
        Ok(())
    }

    /// Prints a recoverable error to the error stream.
    pub(crate) fn report(&mut self, error: &ShellError) -> Result<(), ShellError> {
        let message = self.highlighter.highlight_error(&error.to_string());
        writeln!(self.err, "{}", message)?;
        Ok(())
    }

    pub(crate) fn notice(&mut self, message: &str) -> Result<(), ShellError> {
        let message = self.highlighter.highlight_notice(message);
        writeln!(self.out, "{}", message)?;
        Ok(())
    }
}
