mod command;
mod path;

use std::borrow::Cow;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

use crate::highlight::SyntaxHighlighter;
use crate::path::SearchPath;

pub use command::CommandCompleter;
pub use path::PathCompleter;

/// Editor helper: completion for the command word and its arguments, plus
/// prompt and command highlighting.
#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new(search_path: &SearchPath, highlighter: SyntaxHighlighter) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(search_path),
            path_completer: PathCompleter::new(),
            highlighter,
        }
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        Cow::Owned(self.highlighter.highlight_prompt(prompt))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before_cursor = &line[..pos];
        let start = before_cursor
            .rfind(|c: char| c.is_ascii_whitespace())
            .map_or(0, |idx| idx + 1);
        let word = &before_cursor[start..];
        let is_first_word = before_cursor[..start].trim().is_empty();

        let matches = if is_first_word {
            self.command_completer.complete_command(word)
        } else {
            self.path_completer.complete_path(word)
        };

        Ok((start, matches))
    }
}
