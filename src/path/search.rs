use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::PATH_DELIM;
use crate::error::ShellError;

/// Ordered, bounded list of directories searched for executables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<String>,
}

impl SearchPath {
    /// Splits `raw` on `:`, dropping empty components and anything past `capacity`.
    pub fn parse(raw: &str, capacity: usize) -> Self {
        let dirs: Vec<String> = raw
            .split(PATH_DELIM)
            .filter(|dir| !dir.is_empty())
            .take(capacity)
            .map(str::to_owned)
            .collect();

        debug!(count = dirs.len(), dirs = ?dirs, "parsed search path");
        Self { dirs }
    }

    pub fn from_raw(raw: Option<&str>, capacity: usize) -> Self {
        raw.map(|raw| Self::parse(raw, capacity)).unwrap_or_default()
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Finds the file that `filename` names.
    ///
    /// Names starting with `/` are checked as-is and never searched for.
    /// Anything else is tried against each directory in order; the first
    /// candidate that exists wins. Only existence is checked, not the
    /// execute bit, so a non-executable match fails later at exec time.
    pub fn resolve(&self, filename: &str) -> Result<PathBuf, ShellError> {
        if filename.starts_with('/') {
            let path = PathBuf::from(filename);
            return if path.exists() {
                Ok(path)
            } else {
                Err(ShellError::CommandNotFound(filename.to_string()))
            };
        }

        self.dirs
            .iter()
            .map(|dir| Path::new(dir).join(filename))
            .find(|candidate| candidate.exists())
            .ok_or_else(|| ShellError::CommandNotFound(filename.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn scratch_dir(name: &str) -> Result<PathBuf, std::io::Error> {
        let dir = env::temp_dir()
            .join(format!("bshell_search_{}", std::process::id()))
            .join(name);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    fn dir_str(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_parse_preserves_order() {
        let path = SearchPath::parse("/usr/local/bin:/usr/bin:/bin", 64);
        assert_eq!(path.dirs(), ["/usr/local/bin", "/usr/bin", "/bin"]);
    }

    #[test]
    fn test_parse_skips_empty_components() {
        let path = SearchPath::parse(":/usr/bin::/bin:", 64);
        assert_eq!(path.dirs(), ["/usr/bin", "/bin"]);
        assert!(path.dirs().iter().all(|dir| !dir.is_empty()));
    }

    #[test]
    fn test_parse_truncates_at_capacity() {
        let path = SearchPath::parse("/a:/b:/c:/d", 2);
        assert_eq!(path.dirs(), ["/a", "/b"]);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_missing_or_empty_path() {
        assert!(SearchPath::from_raw(None, 64).is_empty());
        assert!(SearchPath::parse("", 64).is_empty());
    }

    #[test]
    fn test_resolve_absolute_skips_search() -> Result<(), Box<dyn std::error::Error>> {
        let dir = scratch_dir("absolute")?;
        let file = dir.join("tool");
        fs::write(&file, "")?;

        // The directory list is irrelevant for absolute names.
        let path = SearchPath::parse("/definitely/not/here", 64);
        assert_eq!(path.resolve(&dir_str(&file))?, file);

        let missing = dir.join("missing");
        assert!(matches!(
            path.resolve(&dir_str(&missing)),
            Err(ShellError::CommandNotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn test_resolve_absolute_does_not_fall_through() -> Result<(), Box<dyn std::error::Error>> {
        let dir = scratch_dir("no_fallthrough")?;
        let name = format!("bshell_fallthrough_{}", std::process::id());
        fs::write(dir.join(&name), "")?;

        // "<dir>/<name>" exists but "/<name>" does not.
        let path = SearchPath::parse(&dir_str(&dir), 64);
        assert!(path.resolve(&name).is_ok());
        assert!(matches!(
            path.resolve(&format!("/{}", name)),
            Err(ShellError::CommandNotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn test_resolve_first_match_wins() -> Result<(), Box<dyn std::error::Error>> {
        let first = scratch_dir("first")?;
        let second = scratch_dir("second")?;
        let empty = scratch_dir("empty")?;
        fs::write(first.join("tool"), "")?;
        fs::write(second.join("tool"), "")?;
        fs::write(second.join("other"), "")?;

        let raw = format!("{}:{}:{}", dir_str(&empty), dir_str(&first), dir_str(&second));
        let path = SearchPath::parse(&raw, 64);

        assert_eq!(path.resolve("tool")?, first.join("tool"));
        assert_eq!(path.resolve("other")?, second.join("other"));
        Ok(())
    }

    #[test]
    fn test_resolve_not_found() -> Result<(), Box<dyn std::error::Error>> {
        let dir = scratch_dir("not_found")?;
        let path = SearchPath::parse(&dir_str(&dir), 64);

        match path.resolve("no_such_tool") {
            Err(ShellError::CommandNotFound(name)) => assert_eq!(name, "no_such_tool"),
            other => panic!("expected CommandNotFound, got {:?}", other),
        }

        assert!(SearchPath::default().resolve("ls").is_err());
        Ok(())
    }

    #[test]
    fn test_resolve_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let dir = scratch_dir("idempotent")?;
        fs::write(dir.join("tool"), "")?;
        let path = SearchPath::parse(&dir_str(&dir), 64);

        assert_eq!(path.resolve("tool")?, path.resolve("tool")?);
        assert_eq!(
            path.resolve("absent").is_err(),
            path.resolve("absent").is_err()
        );
        Ok(())
    }

    #[test]
    fn test_resolve_ignores_execute_bit() -> Result<(), Box<dyn std::error::Error>> {
        let dir = scratch_dir("plain_file")?;
        fs::write(dir.join("notes.txt"), "not a program")?;
        let path = SearchPath::parse(&dir_str(&dir), 64);

        assert_eq!(path.resolve("notes.txt")?, dir.join("notes.txt"));
        Ok(())
    }
}
