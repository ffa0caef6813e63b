use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Names of the immediate subdirectories of `dir`, sorted by name.
///
/// The filesystem is an external mutable resource, so callers scan fresh on
/// every menu render instead of caching a listing.
pub fn subfolders(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("could not scan {}", dir.display()))?
    {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Names of the regular files in `dir` whose name ends with `extension`,
/// sorted by name. Directories and other extensions are excluded.
pub fn scripts(dir: &Path, extension: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("could not scan {}", dir.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(extension) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
