//! HTTP client for OpenAI-compatible chat-completions endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ApiError;

use super::request::ChatRequest;
use super::retry::retry_with_backoff;

/// Source of completions for a chat request.
///
/// This abstraction allows mocking the API in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the request and return the text of the first choice.
    async fn complete(&self, request: &ChatRequest) -> Result<String, ApiError>;
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for a chat-completions endpoint.
pub struct ChatClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl ChatClient {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(
            config.api_url.clone(),
            config.api_key.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Single request without retries.
    async fn send_once(&self, request: &ChatRequest) -> Result<String, ApiError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(ApiError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::Request)?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        debug!("Response received from API: {} bytes", body.len());
        extract_content(&body)
    }
}

#[async_trait]
impl CompletionProvider for ChatClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ApiError> {
        info!("Sending request for commit suggestions to {}", self.api_url);
        retry_with_backoff(
            || self.send_once(request),
            ApiError::is_transient,
            |e| ApiError::RetriesExhausted(Box::new(e)),
        )
        .await
    }
}

/// Pull the first choice's message content out of a response body.
pub fn extract_content(body: &str) -> Result<String, ApiError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| ApiError::InvalidJson(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(ApiError::EmptyResponse)
}

/// The API's own error message when the body carries one, else the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.trim().chars().take(500).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_content_first_choice() {
        let body = r#"{"choices": [
            {"message": {"role": "assistant", "content": "Here are some:\n1. Add x"}},
            {"message": {"role": "assistant", "content": "ignored"}}
        ]}"#;
        assert_eq!(extract_content(body).unwrap(), "Here are some:\n1. Add x");
    }

    #[test]
    fn test_extract_content_no_choices() {
        let result = extract_content(r#"{"choices": []}"#);
        assert!(matches!(result, Err(ApiError::EmptyResponse)));
    }

    #[test]
    fn test_extract_content_null_content() {
        let result = extract_content(r#"{"choices": [{"message": {"content": null}}]}"#);
        assert!(matches!(result, Err(ApiError::EmptyResponse)));
    }

    #[test]
    fn test_extract_content_invalid_json() {
        let result = extract_content("<html>Bad Gateway</html>");
        assert!(matches!(result, Err(ApiError::InvalidJson(_))));
    }

    #[test]
    fn test_error_message_prefers_api_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error", "code": "invalid_api_key"}}"#;
        assert_eq!(error_message(body), "Incorrect API key provided");
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("  upstream timeout \n"), "upstream timeout");
    }

    #[test]
    fn test_status_transience() {
        let status = |code| ApiError::Status {
            status: code,
            message: String::new(),
        };
        assert!(status(429).is_transient());
        assert!(status(500).is_transient());
        assert!(status(503).is_transient());
        assert!(!status(401).is_transient());
        assert!(!status(400).is_transient());
        assert!(!ApiError::EmptyResponse.is_transient());
    }
}
