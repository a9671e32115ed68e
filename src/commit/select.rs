//! Letting the user pick, edit, or write the commit message.

use tracing::{debug, warn};

use crate::error::PromptError;
use crate::interact::Prompter;

use super::prefix::TaskPrefix;

/// Menu entry that switches to free-form input.
pub const CUSTOM_MESSAGE_CHOICE: &str = "Enter your own commit message";

/// Ask the user for the final commit message.
///
/// Shows the suggestions plus a free-form entry. A picked suggestion can be
/// edited inline when `edit` is set. Free-form messages get the task prefix.
/// With no suggestions the user goes straight to free-form input.
pub fn choose_message<P: Prompter + ?Sized>(
    suggestions: &[String],
    prefix: Option<&TaskPrefix>,
    prompter: &P,
    edit: bool,
) -> Result<String, PromptError> {
    if suggestions.is_empty() {
        warn!("No usable suggestions, asking for a commit message");
        return custom_message(prefix, prompter);
    }

    let mut items = suggestions.to_vec();
    items.push(CUSTOM_MESSAGE_CHOICE.to_string());

    let picked = prompter.select("Choose your commit message", &items)?;
    debug!(index = picked, "User picked menu entry");

    let message = match suggestions.get(picked) {
        Some(suggestion) if edit => prompter.input("Commit message", suggestion)?,
        Some(suggestion) => suggestion.clone(),
        None => return custom_message(prefix, prompter),
    };

    non_empty(message)
}

fn custom_message<P: Prompter + ?Sized>(
    prefix: Option<&TaskPrefix>,
    prompter: &P,
) -> Result<String, PromptError> {
    let message = non_empty(prompter.input("Enter your commit message", "")?)?;
    Ok(match prefix {
        Some(prefix) => prefix.apply(&message),
        None => message,
    })
}

fn non_empty(message: String) -> Result<String, PromptError> {
    let message = message.trim();
    if message.is_empty() {
        Err(PromptError::EmptyMessage)
    } else {
        Ok(message.to_string())
    }
}
