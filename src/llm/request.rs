//! Chat-completions request construction.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Body of a chat-completions request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

/// Fill the message template's `{git_command}` and `{diff}` placeholders.
///
/// `{git_command}` is substituted first so a diff that happens to contain the
/// literal text `{git_command}` is left untouched.
pub fn render_template(template: &str, git_command: &str, diff: &str) -> String {
    template
        .replace("{git_command}", git_command)
        .replace("{diff}", diff)
}

/// Build the request asking for commit suggestions for `diff`.
pub fn build_request(config: &Config, diff: &str) -> ChatRequest {
    let content = render_template(&config.message_template, &config.git_command_line(), diff);

    ChatRequest {
        model: config.model_name.clone(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content,
        }],
        temperature: config.temperature,
    }
}
