//! Creating the commit with the chosen message.

use std::path::Path;

use tracing::info;

use crate::error::GitError;

use super::command::run_command;

/// Run the configured commit command with `message` appended as the last argument.
///
/// Returns the command's stdout (for `git commit`, the summary line).
pub fn make_commit(workdir: &Path, command: &[String], message: &str) -> Result<String, GitError> {
    info!("Making a commit with message: {}", message);
    let output = run_command(workdir, command, &[message], "COMMIT_COMMAND")?;
    info!("Commit made successfully");
    Ok(output)
}
