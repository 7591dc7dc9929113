use rustyline::{config::Configurer, error::ReadlineError, history::DefaultHistory, Editor};
use tracing::debug;

use super::completer::ShellCompleter;
use super::reader::LineReader;
use crate::error::ShellError;
use crate::highlight::SyntaxHighlighter;
use crate::path::SearchPath;

/// Interactive line editor with completion and in-memory history.
pub struct EditorInput {
    editor: Editor<ShellCompleter, DefaultHistory>,
}

impl EditorInput {
    pub fn new(search_path: &SearchPath, highlighter: SyntaxHighlighter) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, DefaultHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new(search_path, highlighter)));
        editor.set_auto_add_history(true);
        Ok(Self { editor })
    }
}

impl LineReader for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-C at the prompt discards the line; the shell keeps going.
            Err(ReadlineError::Interrupted) => {
                debug!("interrupt at prompt");
                Ok(Some(String::new()))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
