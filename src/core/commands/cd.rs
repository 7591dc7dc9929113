use std::env;
use std::path::{Path, PathBuf};

use crate::error::ShellError;

/// Changes to `target`, or to `home` when no target is given.
///
/// On failure the working directory is left as it was.
pub fn change_directory(target: Option<&str>, home: &Path) -> Result<PathBuf, ShellError> {
    let path = target.map_or_else(|| home.to_path_buf(), PathBuf::from);

    match env::set_current_dir(&path) {
        Ok(()) => Ok(path),
        Err(source) => Err(ShellError::DirectoryChange { path, source }),
    }
}
