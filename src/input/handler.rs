use crate::app::AppState;
use crate::console::Console;
use crate::domain::Screen;
use crate::error::DashError;
use crate::{launcher, listing, ui, viewer};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::Path;

/// Run one iteration of the current screen: render its menu, block for one
/// line of input, and dispatch. Directory listings are scanned fresh here on
/// every call, and a selection is resolved against the listing of the same
/// iteration.
pub fn run_screen<R: BufRead, W: Write>(
    app: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    match app.screen.clone() {
        Screen::Root => root_screen(app, console),
        Screen::Subfolders {
            unit_label,
            unit_dir,
        } => subfolder_screen(app, console, &unit_label, &unit_dir),
        Screen::Scripts { subfolder, dir, .. } => script_screen(app, console, &subfolder, &dir),
        Screen::TaskMenu => task_screen(app, console),
    }
}

fn root_screen<R: BufRead, W: Write>(
    app: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say(ui::root_menu(&app.catalog))?;
    let choice = console.prompt("Pick a unit, '9' for tasks or '0' to exit:")?;

    match choice.as_str() {
        "0" => {
            console.say("Leaving the dashboard. See you soon!")?;
            app.quit();
        }
        "9" => app.open_task_menu(),
        key => {
            if !app.enter_unit(key) {
                console.report(ui::INVALID_OPTION)?;
            }
        }
    }
    Ok(())
}

fn subfolder_screen<R: BufRead, W: Write>(
    app: &mut AppState,
    console: &mut Console<R, W>,
    unit_label: &str,
    unit_dir: &Path,
) -> Result<()> {
    // A unit directory that vanished is recoverable: report and go back up.
    let entries = match listing::subfolders(unit_dir) {
        Ok(entries) => entries,
        Err(err) => {
            console.report(err)?;
            app.go_to_root();
            return Ok(());
        }
    };

    console.say(ui::subfolder_menu(unit_label, &entries))?;
    let choice = console.prompt("Pick a subfolder or '0' to go back:")?;

    if choice == "0" {
        app.go_to_root();
        return Ok(());
    }
    match parse_selection(&choice, entries.len()) {
        Ok(index) => app.enter_subfolder(&entries[index - 1]),
        Err(_) => console.report(ui::INVALID_OPTION)?,
    }
    Ok(())
}

fn script_screen<R: BufRead, W: Write>(
    app: &mut AppState,
    console: &mut Console<R, W>,
    subfolder: &str,
    dir: &Path,
) -> Result<()> {
    let entries = match listing::scripts(dir, &app.config.extension) {
        Ok(entries) => entries,
        Err(err) => {
            console.report(err)?;
            app.back_to_subfolders();
            return Ok(());
        }
    };

    console.say(ui::script_menu(subfolder, &entries))?;
    let choice = console.prompt("Pick a script, '0' to go back or '9' for the main menu:")?;

    match choice.as_str() {
        "0" => app.back_to_subfolders(),
        // Direct edge to Root, skipping the subfolder level.
        "9" => app.go_to_root(),
        token => match parse_selection(token, entries.len()) {
            Ok(index) => {
                let name = &entries[index - 1];
                view_and_maybe_launch(app, console, name, &dir.join(name))?;
            }
            Err(_) => console.report(ui::INVALID_OPTION)?,
        },
    }
    Ok(())
}

/// Show a script's source and, if it was readable, offer to launch it in a
/// new terminal. Afterwards the script menu blocks on Enter so the output
/// stays on screen before re-rendering.
fn view_and_maybe_launch<R: BufRead, W: Write>(
    app: &mut AppState,
    console: &mut Console<R, W>,
    name: &str,
    path: &Path,
) -> Result<()> {
    let text = match viewer::read_script(path) {
        Ok(text) => text,
        Err(err) => {
            console.report(err)?;
            return Ok(());
        }
    };

    console.headline(format!("\n--- Source of {} ---\n", name))?;
    console.say(&text)?;

    let answer = console.prompt("Run the script? (1: yes, 0: no):")?;
    match answer.as_str() {
        "1" => {
            if let Err(err) = launcher::launch(&app.config.interpreter, path) {
                console.report(err)?;
            }
        }
        "0" => console.say("The script was not executed.")?,
        _ => console.report(ui::INVALID_OPTION)?,
    }
    console.pause()
}

fn task_screen<R: BufRead, W: Write>(
    app: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say(ui::task_menu())?;
    let choice = console.prompt("Pick an option:")?;

    match choice.as_str() {
        "1" => {
            let name = console.prompt("Task name:")?;
            let description = console.prompt("Description:")?;
            app.tasks.add(name.clone(), description);
            console.say(format!("Task '{}' added.", name))?;
        }
        "2" => {
            if app.tasks.is_empty() {
                console.say("No tasks recorded yet.")?;
            } else {
                console.say(ui::task_list(&app.tasks))?;
            }
        }
        "3" => {
            if app.tasks.is_empty() {
                console.say("There are no tasks to complete.")?;
            } else {
                console.say(ui::task_list(&app.tasks))?;
                let token = console.prompt("Number of the task to complete:")?;
                match token.parse::<usize>() {
                    Ok(index) => match app.tasks.complete(index) {
                        Ok(task) => console.say(format!("Task '{}' completed.", task.name))?,
                        Err(err) => console.report(err)?,
                    },
                    Err(_) => console.report(DashError::NotANumber)?,
                }
            }
        }
        "0" => app.go_to_root(),
        _ => console.report(ui::INVALID_OPTION)?,
    }
    Ok(())
}

/// Map a user token to a 1-based index into a list of the given length.
fn parse_selection(token: &str, len: usize) -> Result<usize, DashError> {
    let index: usize = token.parse().map_err(|_| DashError::NotANumber)?;
    if index == 0 || index > len {
        return Err(DashError::OutOfRange);
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Config;
    use crate::domain::TaskStatus;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    fn app_with_root(root: PathBuf) -> AppState {
        AppState::new(Config {
            root,
            extension: ".py".to_string(),
            interpreter: "python3".to_string(),
        })
    }

    /// Course tree: Unidad 1/Tema1/script.py plus some noise entries.
    fn course_tree() -> TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        let tema = temp_dir.path().join("Unidad 1").join("Tema1");
        fs::create_dir_all(&tema).unwrap();
        fs::write(tema.join("script.py"), "print('hola')\n").unwrap();
        fs::write(tema.join("notes.md"), "not a script").unwrap();
        fs::write(temp_dir.path().join("Unidad 1").join("loose.py"), "").unwrap();
        temp_dir
    }

    #[test]
    fn test_root_exit_clears_running() {
        let mut app = app_with_root(PathBuf::from("/nowhere"));
        let mut con = console("0\n");

        run_screen(&mut app, &mut con).unwrap();
        assert!(!app.running);
    }

    #[test]
    fn test_root_rejects_unknown_token_and_stays() {
        let mut app = app_with_root(PathBuf::from("/nowhere"));
        let mut con = console("x\n");

        run_screen(&mut app, &mut con).unwrap();
        assert_eq!(app.screen, Screen::Root);
        assert!(app.running);
        assert!(printed(&con).contains("Invalid option"));
    }

    #[test]
    fn test_root_opens_task_menu_on_nine() {
        let mut app = app_with_root(PathBuf::from("/nowhere"));
        let mut con = console("9\n");

        run_screen(&mut app, &mut con).unwrap();
        assert_eq!(app.screen, Screen::TaskMenu);
    }

    #[test]
    fn test_subfolder_listing_shows_directories_only() {
        let tree = course_tree();
        let mut app = app_with_root(tree.path().to_path_buf());
        app.enter_unit("1");
        let mut con = console("0\n");

        run_screen(&mut app, &mut con).unwrap();
        let out = printed(&con);
        assert!(out.contains("1 - Tema1"));
        assert!(!out.contains("loose.py"));
        assert_eq!(app.screen, Screen::Root);
    }

    #[test]
    fn test_subfolder_selection_descends_into_scripts() {
        let tree = course_tree();
        let mut app = app_with_root(tree.path().to_path_buf());
        app.enter_unit("1");
        let mut con = console("1\n");

        run_screen(&mut app, &mut con).unwrap();
        match &app.screen {
            Screen::Scripts { subfolder, dir, .. } => {
                assert_eq!(subfolder, "Tema1");
                assert!(dir.ends_with("Unidad 1/Tema1"));
            }
            other => panic!("expected Scripts screen, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_unit_directory_reports_and_returns_to_root() {
        let tree = course_tree();
        let mut app = app_with_root(tree.path().to_path_buf());
        app.enter_unit("2"); // Unidad 2 does not exist on disk
        let mut con = console("");

        run_screen(&mut app, &mut con).unwrap();
        assert_eq!(app.screen, Screen::Root);
        assert!(printed(&con).contains("could not scan"));
    }

    #[test]
    fn test_script_view_then_decline_execution() {
        let tree = course_tree();
        let mut app = app_with_root(tree.path().to_path_buf());
        app.enter_unit("1");
        app.enter_subfolder("Tema1");
        // select script 1, decline execution, press Enter at the pause
        let mut con = console("1\n0\n\n");

        run_screen(&mut app, &mut con).unwrap();
        let out = printed(&con);
        assert!(out.contains("1 - script.py"));
        assert!(!out.contains("notes.md"));
        assert!(out.contains("print('hola')"));
        assert!(out.contains("The script was not executed."));
        // back on the script menu, not ascended
        assert!(matches!(app.screen, Screen::Scripts { .. }));
    }

    #[test]
    fn test_script_confirm_rejects_other_tokens() {
        let tree = course_tree();
        let mut app = app_with_root(tree.path().to_path_buf());
        app.enter_unit("1");
        app.enter_subfolder("Tema1");
        let mut con = console("1\n5\n\n");

        run_screen(&mut app, &mut con).unwrap();
        assert!(printed(&con).contains("Invalid option"));
    }

    #[test]
    fn test_script_menu_out_of_range_selection_stays() {
        let tree = course_tree();
        let mut app = app_with_root(tree.path().to_path_buf());
        app.enter_unit("1");
        app.enter_subfolder("Tema1");
        let mut con = console("4\n");

        run_screen(&mut app, &mut con).unwrap();
        assert!(printed(&con).contains("Invalid option"));
        assert!(matches!(app.screen, Screen::Scripts { .. }));
    }

    #[test]
    fn test_script_menu_nine_jumps_straight_to_root() {
        let tree = course_tree();
        let mut app = app_with_root(tree.path().to_path_buf());
        app.enter_unit("1");
        app.enter_subfolder("Tema1");
        let mut con = console("9\n");

        run_screen(&mut app, &mut con).unwrap();
        assert_eq!(app.screen, Screen::Root);
    }

    #[test]
    fn test_script_menu_zero_returns_to_subfolders() {
        let tree = course_tree();
        let mut app = app_with_root(tree.path().to_path_buf());
        app.enter_unit("1");
        app.enter_subfolder("Tema1");
        let mut con = console("0\n");

        run_screen(&mut app, &mut con).unwrap();
        assert!(matches!(app.screen, Screen::Subfolders { .. }));
    }

    #[test]
    fn test_task_add_list_complete_scenario() {
        let mut app = app_with_root(PathBuf::from("/nowhere"));
        app.open_task_menu();

        let mut add = console("1\nBuy milk\n2 liters\n");
        run_screen(&mut app, &mut add).unwrap();
        assert!(printed(&add).contains("Task 'Buy milk' added."));

        let mut add2 = console("1\nClean\nroom\n");
        run_screen(&mut app, &mut add2).unwrap();

        let mut list = console("2\n");
        run_screen(&mut app, &mut list).unwrap();
        let out = printed(&list);
        assert!(out.contains("1. Buy milk - 2 liters [Pending]"));
        assert!(out.contains("2. Clean - room [Pending]"));

        let mut complete = console("3\n1\n");
        run_screen(&mut app, &mut complete).unwrap();
        assert!(printed(&complete).contains("Task 'Buy milk' completed."));
        assert_eq!(app.tasks.tasks()[0].status(), TaskStatus::Completed);
        assert_eq!(app.tasks.tasks()[1].status(), TaskStatus::Pending);
    }

    #[test]
    fn test_task_complete_rejects_non_numeric_token() {
        let mut app = app_with_root(PathBuf::from("/nowhere"));
        app.open_task_menu();
        app.tasks.add("Buy milk", "2 liters");

        let mut con = console("3\nabc\n");
        run_screen(&mut app, &mut con).unwrap();
        assert!(printed(&con).contains("you must enter a valid number"));
        assert_eq!(app.tasks.tasks()[0].status(), TaskStatus::Pending);
    }

    #[test]
    fn test_task_complete_rejects_out_of_range_index() {
        let mut app = app_with_root(PathBuf::from("/nowhere"));
        app.open_task_menu();
        app.tasks.add("Buy milk", "2 liters");

        let mut con = console("3\n5\n");
        run_screen(&mut app, &mut con).unwrap();
        assert!(printed(&con).contains("invalid number"));
        assert_eq!(app.tasks.tasks()[0].status(), TaskStatus::Pending);
    }

    #[test]
    fn test_task_list_empty_notice() {
        let mut app = app_with_root(PathBuf::from("/nowhere"));
        app.open_task_menu();

        let mut con = console("2\n");
        run_screen(&mut app, &mut con).unwrap();
        assert!(printed(&con).contains("No tasks recorded yet."));
    }

    #[test]
    fn test_task_menu_zero_returns_to_root_keeping_store() {
        let mut app = app_with_root(PathBuf::from("/nowhere"));
        app.open_task_menu();
        app.tasks.add("Buy milk", "2 liters");

        let mut con = console("0\n");
        run_screen(&mut app, &mut con).unwrap();
        assert_eq!(app.screen, Screen::Root);
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn test_parse_selection_classifies_failures() {
        assert!(matches!(
            parse_selection("abc", 3),
            Err(DashError::NotANumber)
        ));
        assert!(matches!(parse_selection("0", 3), Err(DashError::OutOfRange)));
        assert!(matches!(parse_selection("4", 3), Err(DashError::OutOfRange)));
        assert_eq!(parse_selection("2", 3).unwrap(), 2);
    }
}
