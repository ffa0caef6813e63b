use std::path::PathBuf;

/// Which menu the user is currently on. Navigation is an explicit state
/// machine: transitions assign a new `Screen` on `AppState`, carrying the
/// directory context with them instead of relying on nested call frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Top-level menu: unit catalog plus the task and exit commands.
    Root,
    /// Listing the subfolders of one unit directory.
    Subfolders {
        unit_label: String,
        unit_dir: PathBuf,
    },
    /// Listing the scripts inside one subfolder of a unit.
    Scripts {
        unit_label: String,
        unit_dir: PathBuf,
        subfolder: String,
        dir: PathBuf,
    },
    /// The personal task manager.
    TaskMenu,
}
