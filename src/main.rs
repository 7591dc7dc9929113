use std::io::{self, IsTerminal};

use bshell::config::ShellConfig;
use bshell::core::ShellState;
use bshell::error::ShellError;
use bshell::highlight::SyntaxHighlighter;
use bshell::input::{BufReadInput, EditorInput};
use bshell::process::signal;
use bshell::shell::Shell;

fn main() -> Result<(), ShellError> {
    bshell::logging::init();
    signal::ignore_interrupts()?;

    let state = ShellState::new(ShellConfig::from_env());

    if io::stdin().is_terminal() {
        let highlighter = SyntaxHighlighter::new(state.config().color);
        let reader = EditorInput::new(state.search_path(), highlighter)?;
        Shell::with_state(state, reader, io::stdout(), io::stderr()).run()
    } else {
        let reader = BufReadInput::new(io::stdin().lock(), io::stdout());
        Shell::with_state(state, reader, io::stdout(), io::stderr()).run()
    }
}
