//! Task-identifier prefixes derived from branch names.
//!
//! A branch such as `feature/IOS-123--add-login` carries the task id
//! `IOS-123`; commits made on it are prefixed with `IOS-123: `.

use std::fmt;

/// Prefix prepended to commit messages, e.g. `IOS-123: `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPrefix {
    task_id: String,
}

impl TaskPrefix {
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
        }
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// Prefix `message`, trimming it first.
    ///
    /// A message that already starts with the prefix is returned unchanged,
    /// so applying the prefix twice is harmless.
    pub fn apply(&self, message: &str) -> String {
        let message = message.trim();
        let prefix = self.to_string();
        if message.starts_with(&prefix) {
            message.to_string()
        } else {
            format!("{}{}", prefix, message)
        }
    }
}

impl fmt::Display for TaskPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.task_id)
    }
}

/// Extract the task id from `branch` if it follows the naming convention.
///
/// The branch must start with `branch_prefix` followed by `task_prefix`
/// (e.g. `feature/` + `IOS-`). The task id is everything before the first
/// `--`, after the last `/`. An empty `task_prefix` disables prefixing.
pub fn derive_task_id(branch: &str, branch_prefix: &str, task_prefix: &str) -> Option<String> {
    if task_prefix.is_empty() {
        return None;
    }

    let convention = format!("{}{}", branch_prefix, task_prefix);
    if !branch.starts_with(&convention) {
        return None;
    }

    let head = branch.split("--").next().unwrap_or(branch);
    let task_id = head.rsplit('/').next().unwrap_or(head).trim();

    if task_id.is_empty() {
        None
    } else {
        Some(task_id.to_string())
    }
}

/// The prefix for commits on `branch`, if any.
pub fn prefix_for_branch(
    branch: Option<&str>,
    branch_prefix: &str,
    task_prefix: Option<&str>,
) -> Option<TaskPrefix> {
    let branch = branch?;
    let task_prefix = task_prefix?;
    derive_task_id(branch, branch_prefix, task_prefix).map(TaskPrefix::new)
}

/// Prefix every non-blank suggestion; suggestions are returned unchanged
/// when there is no prefix.
pub fn apply_prefix(suggestions: Vec<String>, prefix: Option<&TaskPrefix>) -> Vec<String> {
    match prefix {
        Some(prefix) => suggestions
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| prefix.apply(s))
            .collect(),
        None => suggestions,
    }
}
