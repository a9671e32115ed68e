//! Terminal interaction behind a mockable trait.

use dialoguer::{Confirm, Input, Password, Select};

use crate::error::PromptError;

/// Questions the pipeline asks the user.
///
/// This abstraction allows scripting the user's answers in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Pick one of `items`; returns its index.
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, PromptError>;

    /// Free-form line input, pre-filled with `initial` (may be empty).
    fn input(&self, prompt: &str, initial: &str) -> Result<String, PromptError>;

    /// Hidden input for secrets.
    fn password(&self, prompt: &str) -> Result<String, PromptError>;

    /// Yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError>;
}

/// Prompter backed by `dialoguer` on the controlling terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, PromptError> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(interaction)
    }

    fn input(&self, prompt: &str, initial: &str) -> Result<String, PromptError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
            .map_err(interaction)
    }

    fn password(&self, prompt: &str) -> Result<String, PromptError> {
        Password::new()
            .with_prompt(prompt)
            .interact()
            .map_err(interaction)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(interaction)
    }
}

fn interaction(e: dialoguer::Error) -> PromptError {
    PromptError::Interaction(e.to_string())
}
