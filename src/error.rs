//! Error types for gitcommit modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading, validating, or saving the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine a config directory. Pass --config or set GITCOMMIT_CONFIG")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Errors from git commands and repository access.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git was not found on PATH")]
    NotInstalled,

    #[error("Command is empty: configure {0} in the config file")]
    EmptyCommand(&'static str),

    #[error("Failed to spawn `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Nothing to commit: the diff is empty. Stage your changes with `git add` first")]
    EmptyDiff,
}

/// Errors from the chat-completions API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to the API failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("API returned invalid JSON: {0}")]
    InvalidJson(String),

    #[error("API response contained no message content")]
    EmptyResponse,

    #[error("All retry attempts failed: {0}")]
    RetriesExhausted(#[source] Box<ApiError>),
}

impl ApiError {
    /// Whether another attempt could succeed: network failures, rate limits,
    /// and server-side errors.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Request(e) => !e.is_builder() && !e.is_decode(),
            ApiError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Errors from interactive prompts.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt failed: {0}")]
    Interaction(String),

    #[error("Commit message is empty")]
    EmptyMessage,
}

/// Errors from the end-to-end pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Failed to serialize request: {0}")]
    Serialize(#[source] serde_json::Error),
}
