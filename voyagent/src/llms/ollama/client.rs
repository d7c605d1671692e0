//! HTTP client for the Ollama server and its `/api/chat` wire format.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::chat::ChatRequest;
use crate::error::{LlmError, Result};
use crate::message::Message;

use super::config::OllamaConfig;

/// Body of a non-streaming `/api/chat` call.
#[derive(Debug, Clone, Serialize)]
pub struct OllamaChatRequest {
    pub model: String,
    pub messages: Vec<OllamaMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OllamaOptions>,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<String>,
}

/// Sampling parameters Ollama reads from `options`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl OllamaOptions {
    /// Sampling options carried by `request`, `None` when it sets none.
    fn from_request(request: &ChatRequest) -> Option<Self> {
        let options = Self {
            temperature: request.temperature,
            top_p: request.top_p,
            num_predict: request
                .max_tokens
                .map(|max| i32::try_from(max).unwrap_or(i32::MAX)),
            seed: request.seed,
            stop: request.stop.clone(),
        };
        (options != Self::default()).then_some(options)
    }
}

/// A conversation turn on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OllamaMessage {
    pub role: String,
    pub content: String,
}

impl From<&Message> for OllamaMessage {
    fn from(msg: &Message) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// `{"error": "..."}` body returned on failures.
#[derive(Debug, Clone, Deserialize)]
struct OllamaErrorResponse {
    error: String,
}

/// Client for a single Ollama server.
///
/// Cheap to clone: the configuration is shared and `reqwest::Client` pools
/// connections internally.
#[derive(Debug, Clone)]
pub struct Ollama {
    pub(crate) config: Arc<OllamaConfig>,
    pub(crate) http_client: Client,
}

impl Ollama {
    /// Creates a client for the server described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an internal LLM error if the HTTP client cannot be built.
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let builder = config
            .timeout_secs
            .map_or_else(Client::builder, |secs| {
                Client::builder().timeout(Duration::from_secs(secs))
            });
        let http_client = builder
            .build()
            .map_err(|e| LlmError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            config: Arc::new(config),
            http_client,
        })
    }

    /// Creates a client for `http://localhost:11434` with default settings.
    ///
    /// # Errors
    ///
    /// See [`Ollama::new`].
    pub fn with_defaults() -> Result<Self> {
        Self::new(OllamaConfig::default())
    }

    /// Creates a client configured from `OLLAMA_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`Ollama::new`].
    pub fn from_env() -> Result<Self> {
        Self::new(OllamaConfig::from_env())
    }

    /// Server base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Model used when a request leaves its model empty.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) const fn client(&self) -> &Client {
        &self.http_client
    }

    pub(crate) fn chat_url(&self) -> String {
        format!("{}/api/chat", self.config.base_url.trim_end_matches('/'))
    }

    /// Maps a provider-neutral request onto the `/api/chat` body.
    pub(crate) fn build_body(&self, request: &ChatRequest) -> OllamaChatRequest {
        let model = if request.model.is_empty() {
            self.model()
        } else {
            &request.model
        };

        OllamaChatRequest {
            model: model.to_owned(),
            messages: request.messages.iter().map(OllamaMessage::from).collect(),
            options: OllamaOptions::from_request(request),
            stream: false,
            keep_alive: self.config.keep_alive.clone(),
        }
    }

    /// Turns a non-success response body into an error. Ollama reports most
    /// failures as `{"error": "..."}`; anything else keeps the raw body.
    pub(crate) fn parse_error(status: u16, body: &str) -> LlmError {
        serde_json::from_str::<OllamaErrorResponse>(body).map_or_else(
            |_| LlmError::http_status(status, body),
            |parsed| LlmError::provider("ollama", parsed.error),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod ollama_client {
        use super::*;

        #[test]
        fn new_creates_client_with_config() {
            let client = Ollama::new(OllamaConfig::default()).unwrap();

            assert_eq!(client.base_url(), OllamaConfig::DEFAULT_BASE_URL);
            assert_eq!(client.model(), OllamaConfig::DEFAULT_MODEL);
        }

        #[test]
        fn new_with_custom_config() {
            let config = OllamaConfig::new()
                .base_url("http://custom:11434")
                .model("llama3");
            let client = Ollama::new(config).unwrap();

            assert_eq!(client.base_url(), "http://custom:11434");
            assert_eq!(client.model(), "llama3");
        }

        #[test]
        fn client_is_debug() {
            let client = Ollama::with_defaults().unwrap();
            assert!(format!("{client:?}").contains("Ollama"));
        }
    }

    mod url_building {
        use super::*;

        #[test]
        fn chat_url_format() {
            let client = Ollama::with_defaults().unwrap();
            assert_eq!(client.chat_url(), "http://localhost:11434/api/chat");
        }

        #[test]
        fn trailing_slash_is_ignored() {
            let config = OllamaConfig::new().base_url("http://server:11434/");
            let client = Ollama::new(config).unwrap();

            assert_eq!(client.chat_url(), "http://server:11434/api/chat");
        }
    }

    mod request_body_building {
        use super::*;

        #[test]
        fn builds_basic_request() {
            let client = Ollama::with_defaults().unwrap();
            let request = ChatRequest::new("llama3")
                .system("You are a hotel specialist.")
                .user("Hello");

            let body = client.build_body(&request);

            assert_eq!(body.model, "llama3");
            assert_eq!(body.messages.len(), 2);
            assert_eq!(body.messages[0].role, "system");
            assert_eq!(body.messages[1].role, "user");
            assert!(!body.stream);
        }

        #[test]
        fn uses_default_model_when_empty() {
            let client = Ollama::with_defaults().unwrap();
            let body = client.build_body(&ChatRequest::new("").user("Hello"));

            assert_eq!(body.model, OllamaConfig::DEFAULT_MODEL);
        }

        #[test]
        fn no_options_when_defaults() {
            let client = Ollama::with_defaults().unwrap();
            let body = client.build_body(&ChatRequest::new("llama3").user("Hello"));

            assert!(body.options.is_none());
        }

        #[test]
        fn maps_sampling_options() {
            let client = Ollama::with_defaults().unwrap();
            let request = ChatRequest::new("llama3")
                .user("Hello")
                .temperature(0.3)
                .max_tokens(100)
                .seed(42)
                .stop(vec!["END".to_owned()]);

            let options = client.build_body(&request).options.unwrap();

            assert_eq!(options.temperature, Some(0.3));
            assert_eq!(options.num_predict, Some(100));
            assert_eq!(options.seed, Some(42));
            assert_eq!(options.stop, Some(vec!["END".to_owned()]));
            assert!(options.top_p.is_none());
        }

        #[test]
        fn includes_keep_alive_from_config() {
            let client = Ollama::new(OllamaConfig::new().keep_alive("5m")).unwrap();
            let body = client.build_body(&ChatRequest::new("llama3").user("Hello"));

            assert_eq!(body.keep_alive, Some("5m".to_owned()));
        }

        #[test]
        fn body_serializes_stream_false_and_skips_empty_fields() {
            let client = Ollama::with_defaults().unwrap();
            let body = client.build_body(&ChatRequest::new("llama3").user("Hello"));
            let json = serde_json::to_string(&body).unwrap();

            assert!(json.contains("\"stream\":false"));
            assert!(!json.contains("options"));
            assert!(!json.contains("keep_alive"));
        }
    }

    mod error_parsing {
        use super::*;

        #[test]
        fn parses_ollama_error_response() {
            let error = Ollama::parse_error(404, r#"{"error":"model 'mistral' not found"}"#);

            assert!(matches!(error, LlmError::Provider { .. }));
            assert!(error.to_string().contains("model 'mistral' not found"));
        }

        #[test]
        fn handles_non_json_error_body() {
            let error = Ollama::parse_error(500, "Internal Server Error");

            assert_eq!(error.to_string(), "HTTP 500: Internal Server Error");
        }

        #[test]
        fn handles_empty_error_body() {
            let error = Ollama::parse_error(502, "");

            assert!(error.to_string().contains("502"));
            assert!(error.is_retryable());
        }
    }
}
