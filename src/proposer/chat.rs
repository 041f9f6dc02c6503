//! Chat transport behind the proposer adapter.
//!
//! [`ChatClient`] is the seam between the engine and the language model:
//! one blocking call per proposal, free text in both directions. The engine
//! owns parsing; the capability owns only natural-language generation.
//!
//! [`OllamaClient`] speaks the Ollama-style `/api/chat` endpoint. Tests use
//! canned implementations of the trait instead.

use std::time::Duration;

use serde_json::json;

use crate::error::ChatError;

/// Blocking chat completion capability.
pub trait ChatClient {
    /// Send one prompt, receive one free-text reply.
    fn complete(&self, prompt: &str) -> Result<String, ChatError>;
}

/// Chat client for an Ollama-compatible HTTP endpoint.
pub struct OllamaClient {
    http: reqwest::blocking::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Default request timeout. A timed-out call surfaces as a declined
    /// proposal, so the fallback policy still applies.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

    /// Create a client for `base_url` (e.g. `http://localhost:11434`) and a
    /// model name.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self, ChatError> {
        Self::with_timeout(base_url, model, Self::DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ChatError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    /// The configured model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl ChatClient for OllamaClient {
    fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        let body = json!({
            "model": self.model,
            "stream": false,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let reply: serde_json::Value = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        reply
            .get("message")
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .map(str::to_string)
            .ok_or(ChatError::MissingContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = OllamaClient::new("http://localhost:11434/", "llama3.2").unwrap();
        assert_eq!(client.base_url, "http://localhost:11434");
        assert_eq!(client.model(), "llama3.2");
    }
}
