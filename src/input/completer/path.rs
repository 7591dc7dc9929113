use std::{fs, path::Path};

use rustyline::completion::Pair;

/// Completes file and directory names for argument words.
#[derive(Clone, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, word: &str) -> Vec<Pair> {
        // Split into the directory part (kept verbatim) and the name prefix.
        let (dir_part, prefix) = match word.rfind('/') {
            Some(idx) => word.split_at(idx + 1),
            None => ("", word),
        };
        let search_dir = if dir_part.is_empty() {
            Path::new(".")
        } else {
            Path::new(dir_part)
        };

        let Ok(entries) = fs::read_dir(search_dir) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(prefix) || (name.starts_with('.') && !prefix.starts_with('.')) {
                    return None;
                }
                let candidate = format!("{}{}", dir_part, name);
                let pair = if entry.path().is_dir() {
                    Pair {
                        display: format!("{}/", name),
                        replacement: format!("{}/", candidate),
                    }
                } else {
                    Pair {
                        display: name,
                        replacement: format!("{} ", candidate),
                    }
                };
                Some(pair)
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_complete_files_and_dirs() -> Result<(), std::io::Error> {
        let dir = env::temp_dir().join(format!("bshell_pathcomp_{}", std::process::id()));
        fs::create_dir_all(dir.join("logs"))?;
        fs::write(dir.join("log.txt"), "")?;
        fs::write(dir.join(".lock"), "")?;
        fs::write(dir.join("readme"), "")?;

        let base = format!("{}/", dir.to_string_lossy());
        let matches = PathCompleter::new().complete_path(&format!("{}lo", base));
        let replacements: Vec<String> = matches.into_iter().map(|p| p.replacement).collect();

        assert_eq!(
            replacements,
            [format!("{}log.txt ", base), format!("{}logs/", base)]
        );
        Ok(())
    }

    #[test]
    fn test_missing_directory() {
        assert!(PathCompleter::new()
            .complete_path("/no/such/dir/x")
            .is_empty());
    }
}
