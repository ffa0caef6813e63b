use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Recoverable failures that are reported to the user as a printed message.
/// None of these terminate the program; the enclosing menu loop continues.
#[derive(Debug, Error)]
pub enum DashError {
    /// The selected script no longer exists on disk.
    #[error("file not found: {}", .0.display())]
    ScriptMissing(PathBuf),

    /// The script exists but could not be read.
    #[error("could not read {}: {source}", path.display())]
    ScriptRead { path: PathBuf, source: io::Error },

    /// The terminal emulator or interpreter could not be spawned.
    #[error("could not launch {}: {source}", path.display())]
    Launch { path: PathBuf, source: io::Error },

    /// A token could not be parsed as a number where one was expected.
    #[error("you must enter a valid number")]
    NotANumber,

    /// A numeric selection outside the 1-based range of the current list.
    #[error("invalid number")]
    OutOfRange,
}
