use crate::error::DashError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a script's full source text, resolving the path to absolute form
/// first. Distinguishes a missing file from any other read failure; the
/// caller decides how to present either.
pub fn read_script(path: &Path) -> Result<String, DashError> {
    let path = absolutize(path);
    if !path.exists() {
        return Err(DashError::ScriptMissing(path));
    }
    fs::read_to_string(&path).map_err(|source| DashError::ScriptRead { path, source })
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
