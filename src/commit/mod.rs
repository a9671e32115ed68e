//! Suggestion cleanup, branch prefixes, and message selection.

pub mod normalize;
pub mod prefix;
pub mod select;

pub use normalize::{normalize_message, normalize_messages};
pub use prefix::{TaskPrefix, apply_prefix, derive_task_id, prefix_for_branch};
pub use select::{CUSTOM_MESSAGE_CHOICE, choose_message};
