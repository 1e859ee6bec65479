//! Ollama compute backend.
//!
//! Speaks the Ollama REST API directly (`POST /api/generate`). Generation
//! options are pinned for short, fast answers: a small context window, a
//! bounded completion length, and punctuation stop tokens.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use super::error::BackendError;
use super::ComputeBackend;

/// Timeout for the `/api/tags` reachability probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Backend calling a local or remote Ollama instance.
#[derive(Clone)]
pub struct OllamaBackend {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaBackend {
    /// Creates a backend for `base_url` (e.g. `http://127.0.0.1:11434`).
    ///
    /// `timeout` bounds every generate call end to end; an elapsed timeout
    /// surfaces as [`BackendError::Request`].
    pub fn new(base_url: &str, model: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    fn tags_url(&self) -> String {
        format!("{}/api/tags", self.base_url)
    }
}

impl std::fmt::Debug for OllamaBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllamaBackend")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Builds the generate request payload for `model` and `prompt`.
pub(crate) fn generate_request_body(model: &str, prompt: &str) -> Value {
    json!({
        "model": model,
        "prompt": format!("Answer briefly: {prompt}"),
        "stream": false,
        "options": {
            "num_ctx": 512,
            "temperature": 0.3,
            "top_p": 0.9,
            "repeat_penalty": 1.0,
            "num_predict": 100,
            "stop": [".", "?", "!"]
        }
    })
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[async_trait]
impl ComputeBackend for OllamaBackend {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        let payload = generate_request_body(&self.model, prompt);

        debug!(model = %self.model, "calling Ollama generate");
        let response = self
            .client
            .post(self.generate_url())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response.json().await?;
        Ok(body.response.trim().to_string())
    }

    async fn is_reachable(&self) -> bool {
        self.client
            .get(self.tags_url())
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_body_shape() {
        let body = generate_request_body("tinyllama:latest", "What is Rust?");

        assert_eq!(body["model"], "tinyllama:latest");
        assert_eq!(body["prompt"], "Answer briefly: What is Rust?");
        assert_eq!(body["stream"], false);
        assert_eq!(body["options"]["num_predict"], 100);
        assert_eq!(body["options"]["stop"], json!([".", "?", "!"]));
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let backend = OllamaBackend::new(
            "http://127.0.0.1:11434/",
            "tinyllama:latest",
            Duration::from_secs(15),
        )
        .unwrap();

        assert_eq!(backend.generate_url(), "http://127.0.0.1:11434/api/generate");
        assert_eq!(backend.tags_url(), "http://127.0.0.1:11434/api/tags");
    }
}
