//! Core `Summarizer` trait and `ApiSummarizer` implementation.
//!
//! The analysis core never writes prose itself; it hands normalized chunk
//! text plus an instruction block to a remote model behind [`Summarizer`].
//! `ApiSummarizer` calls any OpenAI-compatible `/v1/chat/completions`
//! endpoint — Ollama (OpenAI mode), OpenAI, Groq, LM Studio, vLLM, etc.
//! All connection details come from [`SummarizerConfig`]; nothing is
//! hardcoded.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::SummarizerConfig;

// ---------------------------------------------------------------------------
// RemoteServiceError
// ---------------------------------------------------------------------------

/// Errors that can occur while requesting a summary.
#[derive(Debug, Error)]
pub enum RemoteServiceError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("summary request timed out")]
    Timeout,

    /// The service refused the request because its quota is exhausted.
    #[error("summary service quota exhausted")]
    RateLimited,

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse summary response: {0}")]
    Parse(String),

    /// The service returned a response with no usable text content.
    #[error("summary service returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for RemoteServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RemoteServiceError::Timeout
        } else {
            RemoteServiceError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Summarizer trait
// ---------------------------------------------------------------------------

/// Async trait for remote text summarization.
///
/// Implementors must be `Send + Sync` so they can be shared across threads
/// (e.g. wrapped in `Arc<dyn Summarizer>`).
///
/// # Arguments
/// * `text`         – Normalized chunk text to summarize.
/// * `instructions` – What the summary should cover (see
///                    [`EXCERPT_INSTRUCTIONS`](super::EXCERPT_INSTRUCTIONS)).
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        text: &str,
        instructions: &str,
    ) -> Result<String, RemoteServiceError>;
}

// ---------------------------------------------------------------------------
// ApiSummarizer
// ---------------------------------------------------------------------------

/// Calls an OpenAI-compatible `/v1/chat/completions` endpoint.
///
/// Works with: Ollama (OpenAI mode), OpenAI, Groq, Together.ai, LM Studio,
/// vLLM — any provider that speaks the OpenAI chat-completions wire format.
///
/// # No hardcoded URLs
/// All connection details (`base_url`, `api_key`, `model`) come exclusively
/// from the [`SummarizerConfig`] passed to [`ApiSummarizer::from_config`].
pub struct ApiSummarizer {
    client: reqwest::Client,
    config: SummarizerConfig,
}

impl ApiSummarizer {
    /// Build an `ApiSummarizer` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.  A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).
    pub fn from_config(config: &SummarizerConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }
}

#[async_trait]
impl Summarizer for ApiSummarizer {
    /// Send one chunk to the configured OpenAI-compatible endpoint.
    ///
    /// The `Authorization: Bearer …` header is attached **only** when
    /// `config.api_key` is `Some(key)` and `key` is non-empty — safe for
    /// Ollama and other local providers that require no authentication.
    async fn summarize(
        &self,
        text: &str,
        instructions: &str,
    ) -> Result<String, RemoteServiceError> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);

        let body = serde_json::json!({
            "model":       self.config.model,
            "messages": [
                { "role": "system", "content": instructions },
                { "role": "user",   "content": text         }
            ],
            "stream":      false,
            "temperature": self.config.temperature
        });

        let mut req = self.client.post(&url).json(&body);

        // Attach Authorization header only when api_key is a non-empty string.
        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RemoteServiceError::RateLimited);
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RemoteServiceError::Parse(e.to_string()))?;

        let summary = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(RemoteServiceError::EmptyResponse)?
            .trim()
            .to_string();

        if summary.is_empty() {
            return Err(RemoteServiceError::EmptyResponse);
        }

        Ok(summary)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(api_key: Option<&str>) -> SummarizerConfig {
        SummarizerConfig {
            enabled: true,
            base_url: "http://localhost:11434".into(),
            api_key: api_key.map(|s| s.to_string()),
            model: "mistral".into(),
            temperature: 0.3,
            timeout_secs: 60,
        }
    }

    /// Canned summarizer used to exercise the trait surface without a server.
    struct MockSummarizer {
        reply: Result<&'static str, RemoteServiceError>,
    }

    #[async_trait]
    impl Summarizer for MockSummarizer {
        async fn summarize(
            &self,
            _text: &str,
            _instructions: &str,
        ) -> Result<String, RemoteServiceError> {
            match &self.reply {
                Ok(s) => Ok(s.to_string()),
                Err(RemoteServiceError::RateLimited) => Err(RemoteServiceError::RateLimited),
                Err(_) => Err(RemoteServiceError::EmptyResponse),
            }
        }
    }

    #[test]
    fn from_config_builds_without_panic() {
        let config = make_config(None);
        let _summarizer = ApiSummarizer::from_config(&config);
    }

    #[test]
    fn from_config_accepts_empty_api_key() {
        let config = make_config(Some(""));
        let _summarizer = ApiSummarizer::from_config(&config);
    }

    #[test]
    fn from_config_accepts_real_api_key() {
        let config = make_config(Some("sk-test-1234"));
        let _summarizer = ApiSummarizer::from_config(&config);
    }

    /// Verify that `ApiSummarizer` is object-safe (usable as `dyn Summarizer`).
    #[test]
    fn summarizer_is_object_safe() {
        let config = make_config(None);
        let summarizer: Box<dyn Summarizer> = Box::new(ApiSummarizer::from_config(&config));
        // Just holding the trait object is sufficient to verify object-safety.
        drop(summarizer);
    }

    #[tokio::test]
    async fn mock_summarizer_returns_reply() {
        let mock: Box<dyn Summarizer> = Box::new(MockSummarizer {
            reply: Ok("tight kick workflow"),
        });
        let out = mock.summarize("kick snare bass", "summarize").await.unwrap();
        assert_eq!(out, "tight kick workflow");
    }

    #[tokio::test]
    async fn mock_summarizer_propagates_rate_limit() {
        let mock = MockSummarizer {
            reply: Err(RemoteServiceError::RateLimited),
        };
        let err = mock.summarize("kick snare bass", "summarize").await.unwrap_err();
        assert!(matches!(err, RemoteServiceError::RateLimited));
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(
            RemoteServiceError::Timeout.to_string(),
            "summary request timed out"
        );
        assert_eq!(
            RemoteServiceError::RateLimited.to_string(),
            "summary service quota exhausted"
        );
        assert!(RemoteServiceError::Request("connection refused".into())
            .to_string()
            .starts_with("HTTP request failed"));
    }
}
