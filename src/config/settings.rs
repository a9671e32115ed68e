//! The persisted configuration record.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Placeholder written to fresh config files in place of the API key.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_TOKEN_KEY";

/// Placeholder written to fresh config files in place of the task prefix.
pub const TASK_PREFIX_PLACEHOLDER: &str = "YOUR_TASK_PREFIX";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_BRANCH_PREFIX: &str = "feature/";
pub const DEFAULT_MAX_TOKEN_COUNT: usize = 4000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_MESSAGE_TEMPLATE: &str = "Below is the output of `{git_command}`.\n\n\
{diff}\n\n\
Suggest five concise commit messages for these changes. \
Start with a one-line introduction ending in a colon, then give one message per line \
as a numbered list. Use the imperative mood and keep each message under 72 characters.";

/// User settings, stored as JSON.
///
/// Keys keep the upper-snake-case names used by existing `config.json` files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct Config {
    pub model_name: String,
    #[serde(rename = "OPENAI_API_KEY")]
    pub api_key: String,
    #[serde(rename = "OPENAI_API_URL")]
    pub api_url: String,
    pub task_prefix: String,
    pub branch_prefix: String,
    pub message_template: String,
    pub max_token_count: usize,
    pub temperature: f32,
    /// Command whose output is described, e.g. `git diff --cached`.
    pub git_command: Vec<String>,
    /// Command used to commit; the message is appended as the last argument.
    pub commit_command: Vec<String>,
    pub request_timeout_secs: u64,
    /// Set when `api_key` came from the environment; such a key is never saved.
    #[serde(skip)]
    pub api_key_from_env: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL.to_string(),
            api_key: API_KEY_PLACEHOLDER.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            task_prefix: TASK_PREFIX_PLACEHOLDER.to_string(),
            branch_prefix: DEFAULT_BRANCH_PREFIX.to_string(),
            message_template: DEFAULT_MESSAGE_TEMPLATE.to_string(),
            max_token_count: DEFAULT_MAX_TOKEN_COUNT,
            temperature: DEFAULT_TEMPERATURE,
            git_command: vec!["git".into(), "diff".into(), "--cached".into()],
            commit_command: vec!["git".into(), "commit".into(), "-m".into()],
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            api_key_from_env: false,
        }
    }
}

impl Config {
    pub fn has_api_key_placeholder(&self) -> bool {
        self.api_key == API_KEY_PLACEHOLDER
    }

    pub fn has_task_prefix_placeholder(&self) -> bool {
        self.task_prefix == TASK_PREFIX_PLACEHOLDER
    }

    /// The task prefix to match against branch names, or `None` when unset.
    pub fn effective_task_prefix(&self) -> Option<&str> {
        let prefix = self.task_prefix.trim();
        if prefix.is_empty() || self.has_task_prefix_placeholder() {
            None
        } else {
            Some(prefix)
        }
    }

    /// The diff command as shown to the model, e.g. `git diff --cached`.
    pub fn git_command_line(&self) -> String {
        self.git_command.join(" ")
    }

    /// Check that every value the pipeline depends on is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model_name.trim().is_empty() {
            return Err(invalid("MODEL_NAME", "must not be empty"));
        }
        if self.api_url.trim().is_empty() {
            return Err(invalid("OPENAI_API_URL", "must not be empty"));
        }
        if self.git_command.first().is_none_or(|c| c.trim().is_empty()) {
            return Err(invalid("GIT_COMMAND", "must name a program"));
        }
        if self.commit_command.first().is_none_or(|c| c.trim().is_empty()) {
            return Err(invalid("COMMIT_COMMAND", "must name a program"));
        }
        if self.max_token_count == 0 {
            return Err(invalid("MAX_TOKEN_COUNT", "must be greater than zero"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(invalid(
                "TEMPERATURE",
                &format!("{} is outside 0.0..=2.0", self.temperature),
            ));
        }
        if !self.message_template.contains("{diff}") {
            return Err(invalid("MESSAGE_TEMPLATE", "must contain {diff}"));
        }
        Ok(())
    }
}

fn invalid(key: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.to_string(),
    }
}
