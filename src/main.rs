mod app;
mod catalog;
mod console;
mod domain;
mod error;
mod input;
mod launcher;
mod listing;
mod ui;
mod viewer;

use anyhow::Result;
use app::{AppState, Config};
use clap::Parser;
use console::Console;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aula")]
#[command(about = "A terminal dashboard for browsing course units and launching practice scripts", long_about = None)]
struct Cli {
    /// Course root directory containing one folder per unit
    #[arg(default_value = ".")]
    root: PathBuf,

    /// File extension that marks a script
    #[arg(long, default_value = ".py")]
    extension: String,

    /// Interpreter used to run a launched script
    #[arg(long, default_value_t = default_interpreter())]
    interpreter: String,
}

fn default_interpreter() -> String {
    if cfg!(windows) {
        "python".to_string()
    } else {
        "python3".to_string()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = AppState::new(Config {
        root: cli.root,
        extension: cli.extension,
        interpreter: cli.interpreter,
    });

    let mut console = Console::stdio();
    console.headline(ui::banner())?;

    // One menu iteration per pass; the screen transitions live in AppState.
    while app.running {
        input::run_screen(&mut app, &mut console)?;
    }

    Ok(())
}
