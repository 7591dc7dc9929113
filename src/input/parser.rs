use tracing::debug;

/// Token that requests background execution when it ends a line.
pub const BACKGROUND_MARKER: &str = "&";

/// One parsed input line: the argument vector plus its background disposition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    argv: Vec<String>,
    background: bool,
}

impl Command {
    /// Splits `line` on whitespace, keeping at most `max_args` tokens.
    ///
    /// Tokens past the cap are dropped. A final `&` among the kept tokens is
    /// removed from argv and sets the background flag instead.
    pub fn parse(line: &str, max_args: usize) -> Self {
        let mut argv: Vec<String> = line
            .split_whitespace()
            .take(max_args)
            .map(str::to_owned)
            .collect();

        let background = argv.last().is_some_and(|last| last == BACKGROUND_MARKER);
        if background {
            argv.pop();
        }

        debug!(argc = argv.len(), argv = ?argv, background, "parsed command line");
        Self { argv, background }
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }

    pub fn is_background(&self) -> bool {
        self.background
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }
}
