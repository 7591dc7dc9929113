use std::{collections::BTreeSet, fs};

use rustyline::completion::Pair;

use crate::core::commands::Builtin;
use crate::path::SearchPath;

/// Completes the command word from builtins and files in the search path.
#[derive(Clone, Default)]
pub struct CommandCompleter {
    commands: BTreeSet<String>,
}

impl CommandCompleter {
    pub fn new(search_path: &SearchPath) -> Self {
        let mut completer = Self::default();
        completer.refresh(search_path);
        completer
    }

    pub fn refresh(&mut self, search_path: &SearchPath) {
        self.commands.clear();
        self.commands
            .extend(Builtin::NAMES.iter().map(|name| name.to_string()));

        for dir in search_path.dirs() {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                let is_candidate = entry
                    .file_type()
                    .is_ok_and(|kind| kind.is_file() || kind.is_symlink());
                if let (true, Some(name)) = (is_candidate, entry.file_name().to_str()) {
                    self.commands.insert(name.to_string());
                }
            }
        }
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}
