//! gitcommit - A CLI tool that suggests commit messages for a diff and commits the one you pick.
//!
//! # Overview
//!
//! gitcommit runs a diff command (by default `git diff --cached`), asks an
//! OpenAI-compatible chat-completions API for candidate commit messages,
//! cleans them up, prefixes them with the task id found in the branch name,
//! and lets the user pick, edit, or write the message before committing.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod interact;
pub mod llm;
pub mod pipeline;

// Re-export commonly used types
pub use commit::TaskPrefix;
pub use config::Config;
pub use error::{ApiError, ConfigError, GitError, PipelineError, PromptError};
pub use interact::{Prompter, TerminalPrompter};
pub use llm::{ChatClient, ChatRequest, CompletionProvider};
pub use pipeline::{Outcome, RunOptions, run_pipeline};
