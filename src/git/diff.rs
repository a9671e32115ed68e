//! Capturing the diff that the suggestions describe.

use std::path::Path;

use tracing::{debug, info};

use crate::error::GitError;

use super::command::run_command;

/// Run the configured diff command in `workdir` and return its output.
///
/// Whitespace-only output means there is nothing to describe and is reported
/// as [`GitError::EmptyDiff`].
pub fn fetch_diff(workdir: &Path, command: &[String]) -> Result<String, GitError> {
    let diff = run_command(workdir, command, &[], "GIT_COMMAND")?;

    if diff.trim().is_empty() {
        return Err(GitError::EmptyDiff);
    }

    info!("Diff obtained");
    debug!("Diff size: {} bytes, {} lines", diff.len(), diff.lines().count());
    Ok(diff)
}
