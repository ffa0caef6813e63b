use crate::catalog::Catalog;
use crate::domain::{Screen, TaskStore};
use std::path::PathBuf;

/// Runtime configuration resolved from the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Course root directory containing one folder per catalog unit.
    pub root: PathBuf,
    /// File name suffix that marks a script, e.g. ".py".
    pub extension: String,
    /// Interpreter the launcher runs a script with.
    pub interpreter: String,
}

/// Main application state: the current screen, the process-scoped task
/// store, and the static unit catalog. Screen transitions are explicit
/// assignments here, never call-stack unwinding.
pub struct AppState {
    pub screen: Screen,
    pub tasks: TaskStore,
    pub catalog: Catalog,
    pub config: Config,
    pub running: bool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            screen: Screen::Root,
            tasks: TaskStore::new(),
            catalog: Catalog::course_units(),
            config,
            running: true,
        }
    }

    /// Descend from Root into the subfolder listing of the unit with the
    /// given catalog key. Returns false when the key is not in the catalog.
    pub fn enter_unit(&mut self, key: &str) -> bool {
        let Some(unit) = self.catalog.find(key) else {
            return false;
        };
        let unit_label = unit.label.clone();
        let unit_dir = self.config.root.join(&unit_label);
        self.screen = Screen::Subfolders {
            unit_label,
            unit_dir,
        };
        true
    }

    /// Descend from a unit's subfolder listing into one subfolder's script
    /// listing. No-op unless the current screen is `Subfolders`.
    pub fn enter_subfolder(&mut self, name: &str) {
        if let Screen::Subfolders {
            unit_label,
            unit_dir,
        } = &self.screen
        {
            self.screen = Screen::Scripts {
                unit_label: unit_label.clone(),
                unit_dir: unit_dir.clone(),
                subfolder: name.to_string(),
                dir: unit_dir.join(name),
            };
        }
    }

    /// Return from a script listing to its enclosing subfolder listing.
    /// No-op unless the current screen is `Scripts`.
    pub fn back_to_subfolders(&mut self) {
        if let Screen::Scripts {
            unit_label,
            unit_dir,
            ..
        } = &self.screen
        {
            self.screen = Screen::Subfolders {
                unit_label: unit_label.clone(),
                unit_dir: unit_dir.clone(),
            };
        }
    }

    /// Jump straight to the Root screen from anywhere. This is the "9"
    /// shortcut's direct edge, bypassing the subfolder level.
    pub fn go_to_root(&mut self) {
        self.screen = Screen::Root;
    }

    pub fn open_task_menu(&mut self) {
        self.screen = Screen::TaskMenu;
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
