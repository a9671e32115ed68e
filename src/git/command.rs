//! Running external commands such as `git diff` and `git commit`.
//!
//! Commands shell out to the system binaries, inheriting the user's git
//! config, hooks, and credential store.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::GitError;

/// Check that the `git` binary is on PATH.
pub fn check_git_installed() -> Result<(), GitError> {
    which::which("git").map(|_| ()).map_err(|_| GitError::NotInstalled)
}

/// Run `program args...` in `workdir` and return its stdout.
///
/// `setting` names the config key the command came from, for error messages.
pub(crate) fn run_command(
    workdir: &Path,
    command: &[String],
    extra_args: &[&str],
    setting: &'static str,
) -> Result<String, GitError> {
    let (program, args) = command
        .split_first()
        .filter(|(program, _)| !program.trim().is_empty())
        .ok_or(GitError::EmptyCommand(setting))?;

    let shown = command.join(" ");
    debug!(command = %shown, workdir = %workdir.display(), "Running command");

    let output = Command::new(program)
        .args(args)
        .args(extra_args)
        .current_dir(workdir)
        .output()
        .map_err(|source| GitError::SpawnFailed {
            command: shown.clone(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(GitError::CommandFailed {
            command: shown,
            code: output.status.code().unwrap_or(-1),
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
