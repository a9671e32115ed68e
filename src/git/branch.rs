//! Current branch lookup using git2-rs.

use std::path::Path;

use git2::{ErrorCode, Repository};
use tracing::{debug, warn};

/// Short name of the branch checked out in the repository containing `workdir`.
///
/// Returns `None` for a detached or unborn HEAD, and when no repository can
/// be opened. Branch-based prefixing is best-effort, so lookup failures are
/// logged rather than returned.
pub fn current_branch(workdir: &Path) -> Option<String> {
    let repo = match Repository::discover(workdir) {
        Ok(repo) => repo,
        Err(e) => {
            warn!("Could not open repository to read branch name: {}", e);
            return None;
        }
    };

    let head = match repo.head() {
        Ok(head) => head,
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            debug!("HEAD is unborn, no branch name");
            return None;
        }
        Err(e) => {
            warn!("Failed to read HEAD: {}", e);
            return None;
        }
    };

    if !head.is_branch() {
        debug!("HEAD is detached, no branch name");
        return None;
    }

    let name = head.shorthand().map(str::to_string);
    debug!(branch = ?name, "Resolved current branch");
    name
}
