//! Pure menu renderers. Each function returns the full menu text so screen
//! handlers stay testable against plain strings; styling is applied by the
//! console layer at print time.

use crate::catalog::Catalog;
use crate::domain::TaskStore;
use std::fmt::Write;

pub const INVALID_OPTION: &str = "Invalid option. Try again.";

pub fn banner() -> &'static str {
    "Welcome to the course dashboard"
}

/// Top-level menu: the unit catalog plus the two reserved commands.
pub fn root_menu(catalog: &Catalog) -> String {
    let mut out = String::from("\n=== Main menu ===\n");
    for unit in catalog.units() {
        writeln!(out, "{} - {}", unit.key, unit.label).unwrap();
    }
    out.push_str("9 - Manage my tasks\n");
    out.push_str("0 - Exit");
    out
}

pub fn subfolder_menu(unit_label: &str, entries: &[String]) -> String {
    let mut out = format!("\n--- {}: pick a subfolder ---\n", unit_label);
    push_numbered(&mut out, entries);
    out.push_str("0 - Back to the main menu");
    out
}

pub fn script_menu(subfolder: &str, entries: &[String]) -> String {
    let mut out = format!("\n--- {}: pick a script to view and run ---\n", subfolder);
    push_numbered(&mut out, entries);
    out.push_str("0 - Back to the previous menu\n");
    out.push_str("9 - Back to the main menu");
    out
}

pub fn task_menu() -> &'static str {
    "\n--- My tasks ---\n\
     1 - Add a task\n\
     2 - List tasks\n\
     3 - Mark a task as completed\n\
     0 - Back to the main menu"
}

/// Numbered task listing. Callers print an explicit empty notice instead
/// when the store has no tasks.
pub fn task_list(store: &TaskStore) -> String {
    let mut out = String::new();
    for (i, task) in store.tasks().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write!(out, "{}. {}", i + 1, task).unwrap();
    }
    out
}

fn push_numbered(out: &mut String, entries: &[String]) {
    for (i, entry) in entries.iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, entry).unwrap();
    }
}
