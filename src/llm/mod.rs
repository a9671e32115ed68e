//! Chat-completions request building, token estimation, and the API client.

pub mod client;
pub mod request;
pub mod retry;
pub mod tokens;

pub use client::{ChatClient, CompletionProvider, extract_content};
pub use request::{ChatMessage, ChatRequest, build_request, render_template};
pub use tokens::{TokenBudget, check_budget, estimate_tokens};
