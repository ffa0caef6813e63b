use crate::error::DashError;
use std::path::Path;
use std::process::Command;

/// Build the platform command that opens a visible terminal window running
/// `interpreter` on `script`, with the window held open after the script
/// finishes so its output stays inspectable.
fn terminal_command(interpreter: &str, script: &Path) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/k").arg(interpreter).arg(script);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("xterm");
        cmd.arg("-hold").arg("-e").arg(interpreter).arg(script);
        cmd
    }
}

/// Spawn the script in a new terminal window. Fire-and-forget: the child is
/// never waited on, its output is not captured, and its exit status is not
/// observed. Only a spawn-time failure (emulator or interpreter missing) is
/// reported.
pub fn launch(interpreter: &str, script: &Path) -> Result<(), DashError> {
    terminal_command(interpreter, script)
        .spawn()
        .map(|_child| ())
        .map_err(|source| DashError::Launch {
            path: script.to_path_buf(),
            source,
        })
}
