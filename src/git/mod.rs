//! Git operations: diff capture, branch lookup, and committing.

pub mod branch;
pub mod command;
pub mod commit;
pub mod diff;

pub use branch::current_branch;
pub use command::check_git_installed;
pub use commit::make_commit;
pub use diff::fetch_diff;
