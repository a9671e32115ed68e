//! Token estimation against the configured request limit.

use crate::error::PipelineError;

use super::request::ChatRequest;

/// Rough approximation: ~4 characters per token for English text and code.
const CHARS_PER_TOKEN: usize = 4;

/// Estimated token count of `text`, rounded up.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(CHARS_PER_TOKEN)
}

/// Estimated request size compared with the configured limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBudget {
    pub estimated: usize,
    pub limit: usize,
}

impl TokenBudget {
    pub fn is_exceeded(&self) -> bool {
        self.estimated > self.limit
    }
}

/// Estimate the size of `request` as it will be sent over the wire.
pub fn check_budget(request: &ChatRequest, limit: usize) -> Result<TokenBudget, PipelineError> {
    let body = serde_json::to_string(request).map_err(PipelineError::Serialize)?;
    Ok(TokenBudget {
        estimated: estimate_tokens(&body),
        limit,
    })
}
