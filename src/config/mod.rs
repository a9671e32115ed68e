//! Configuration file handling.

pub mod settings;
pub mod store;

pub use settings::{API_KEY_PLACEHOLDER, Config, TASK_PREFIX_PLACEHOLDER};
pub use store::{default_config_path, load, resolve_secrets, save};
