//! Provider-neutral chat completion.
//!
//! A [`ChatRequest`] is a model name, a conversation and optional sampling
//! settings. Any backend that implements [`ChatProvider`] turns it into a
//! [`ChatResponse`]:
//!
//! ```rust,ignore
//! use voyagent::prelude::*;
//!
//! let request = ChatRequest::new("mistral")
//!     .system("You are a hotel booking specialist.")
//!     .user("Please recommend hotels in Paris for 2 nights")
//!     .temperature(0.3);
//!
//! let response = provider.chat(&request).await?;
//! println!("{}", response.text().unwrap_or_default());
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::Message;
use crate::usage::Usage;

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of the reply.
    #[default]
    Stop,
    /// The token limit cut the reply short.
    Length,
}

impl StopReason {
    /// Returns `true` if the model finished on its own.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Stop)
    }

    /// Returns `true` if the reply was truncated.
    #[must_use]
    pub const fn is_truncated(self) -> bool {
        matches!(self, Self::Length)
    }
}

/// A chat completion request to an LLM.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier. Empty means the provider's default model.
    #[serde(default)]
    pub model: String,

    /// Conversation messages.
    #[serde(default)]
    pub messages: Vec<Message>,

    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Stop sequences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,

    /// Random seed for reproducibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl ChatRequest {
    /// Creates a new request with the specified model.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Creates a request with messages.
    #[must_use]
    pub fn with_messages(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            ..Default::default()
        }
    }

    /// Adds a system message.
    #[must_use]
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::system(content));
        self
    }

    /// Adds a user message.
    #[must_use]
    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::user(content));
        self
    }

    /// Adds an assistant message.
    #[must_use]
    pub fn assistant(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::assistant(content));
        self
    }

    /// Adds a message.
    #[must_use]
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Sets max tokens.
    #[must_use]
    pub const fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets temperature.
    #[must_use]
    pub const fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets top_p.
    #[must_use]
    pub const fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Sets stop sequences.
    #[must_use]
    pub fn stop(mut self, stop: Vec<String>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the content of the first system message, if any.
    #[must_use]
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == crate::message::Role::System)
            .map(|m| m.content.as_str())
    }
}

/// A chat completion response from an LLM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The generated message.
    pub message: Message,

    /// Why the model stopped generating.
    pub stop_reason: StopReason,

    /// Token usage statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,

    /// Model identifier used for this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ChatResponse {
    /// Creates a new response with a message.
    #[must_use]
    pub const fn new(message: Message) -> Self {
        Self {
            message,
            stop_reason: StopReason::Stop,
            usage: None,
            model: None,
        }
    }

    /// Creates a response from text content.
    #[must_use]
    pub fn from_text(content: impl Into<String>) -> Self {
        Self::new(Message::assistant(content))
    }

    /// Sets the stop reason.
    #[must_use]
    pub const fn with_stop_reason(mut self, reason: StopReason) -> Self {
        self.stop_reason = reason;
        self
    }

    /// Sets usage statistics.
    #[must_use]
    pub const fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Sets the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Returns the text content of the response.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.message.text()
    }

    /// Returns `true` if the response was truncated due to length.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.stop_reason.is_truncated()
    }
}

impl Default for ChatResponse {
    fn default() -> Self {
        Self::new(Message::default())
    }
}

/// Trait for providers that support chat completions.
///
/// This is the seam every LLM backend implements; agents only ever talk to
/// a model through it.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a chat completion request and receive a complete response.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse>;

    /// Get the name of this provider.
    ///
    /// Used for error messages and logging.
    fn provider_name(&self) -> &'static str;

    /// Get the default model for this provider.
    fn default_model(&self) -> &str;
}

/// Type alias for an Arc-wrapped ChatProvider.
pub type SharedChatProvider = Arc<dyn ChatProvider>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::message::Role;

    mod chat_request {
        use super::*;

        #[test]
        fn new_creates_with_model() {
            let req = ChatRequest::new("mistral");
            assert_eq!(req.model, "mistral");
            assert!(req.messages.is_empty());
            assert!(req.temperature.is_none());
        }

        #[test]
        fn builder_appends_messages_in_order() {
            let req = ChatRequest::new("mistral")
                .system("You are a flight specialist.")
                .user("Recommend flights")
                .assistant("Sure");

            let roles: Vec<Role> = req.messages.iter().map(|m| m.role).collect();
            assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant]);
        }

        #[test]
        fn system_prompt_finds_first_system_message() {
            let req = ChatRequest::with_messages(
                "mistral",
                vec![Message::user("hi"), Message::system("rules")],
            );
            assert_eq!(req.system_prompt(), Some("rules"));
            assert!(ChatRequest::new("m").user("x").system_prompt().is_none());
        }

        #[test]
        fn sampling_options_are_set() {
            let req = ChatRequest::new("mistral")
                .temperature(0.3)
                .top_p(0.9)
                .max_tokens(256)
                .seed(7)
                .stop(vec!["END".to_owned()]);

            assert_eq!(req.temperature, Some(0.3));
            assert_eq!(req.top_p, Some(0.9));
            assert_eq!(req.max_tokens, Some(256));
            assert_eq!(req.seed, Some(7));
            assert_eq!(req.stop.as_deref(), Some(&["END".to_owned()][..]));
        }

        #[test]
        fn serialization_skips_unset_options() {
            let json = serde_json::to_string(&ChatRequest::new("m").user("x")).unwrap();
            assert!(!json.contains("temperature"));
            assert!(!json.contains("max_tokens"));
        }
    }

    mod chat_response {
        use super::*;

        #[test]
        fn from_text_is_assistant_message() {
            let resp = ChatResponse::from_text("BEST CHOICE: Budget");
            assert_eq!(resp.message.role, Role::Assistant);
            assert_eq!(resp.text(), Some("BEST CHOICE: Budget"));
            assert!(resp.stop_reason.is_complete());
        }

        #[test]
        fn empty_text_is_none() {
            assert!(ChatResponse::default().text().is_none());
        }

        #[test]
        fn builders_set_metadata() {
            let resp = ChatResponse::from_text("x")
                .with_model("mistral")
                .with_usage(Usage::new(1, 2))
                .with_stop_reason(StopReason::Length);

            assert_eq!(resp.model.as_deref(), Some("mistral"));
            assert_eq!(resp.usage, Some(Usage::new(1, 2)));
            assert!(resp.is_truncated());
        }
    }
}
