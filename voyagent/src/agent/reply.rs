//! Single-turn reply generation.

use serde::Serialize;
use tracing::{Instrument, debug, info_span, warn};

use crate::chat::ChatRequest;
use crate::error::{Error, Result};
use crate::message::Message;
use crate::usage::Usage;

use super::config::Agent;

/// The outcome of asking an agent for one reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Name of the agent that produced the reply.
    pub agent: String,
    /// Reply text, `None` when the model returned nothing.
    pub content: Option<String>,
    /// Token usage for the call.
    pub usage: Usage,
    /// Model that served the reply, when reported.
    pub model: Option<String>,
    /// Whether the reply was cut short by the token limit.
    pub truncated: bool,
}

impl Reply {
    /// Returns the reply text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Returns the reply text, or `fallback` when the model returned nothing.
    #[must_use]
    pub fn text_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.text().unwrap_or(fallback)
    }
}

impl Agent {
    /// Builds the chat request for a conversation: system instructions first,
    /// then `messages` in order.
    #[must_use]
    pub fn build_request(&self, messages: &[Message]) -> ChatRequest {
        let mut request = ChatRequest::new(self.model.clone());
        if !self.instructions.is_empty() {
            request = request.system(self.instructions.clone());
        }
        request.messages.extend_from_slice(messages);
        request.temperature = self.temperature;
        request.max_tokens = self.max_tokens;
        request
    }

    /// Generates a single reply to `messages`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Agent`] if no provider is configured, or the
    /// provider's error if the model call fails.
    pub async fn generate_reply(&self, messages: &[Message]) -> Result<Reply> {
        let provider = self.provider.as_deref().ok_or_else(|| {
            Error::agent(format!(
                "Agent '{}' has no provider configured. Call .provider() before generating replies.",
                self.name
            ))
        })?;

        let request = self.build_request(messages);
        let model = if request.model.is_empty() {
            provider.default_model().to_owned()
        } else {
            request.model.clone()
        };
        let span = info_span!(
            "agent.reply",
            agent = %self.name,
            provider = provider.provider_name(),
            model = %model,
        );

        async move {
            debug!(messages = request.messages.len(), "requesting reply");
            let response = provider.chat(&request).await?;

            if response.is_truncated() {
                warn!("reply truncated by token limit");
            }
            let usage = response.usage.unwrap_or_default();
            debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "reply received"
            );

            Ok::<_, Error>(Reply {
                agent: self.name.clone(),
                content: response.text().map(str::to_owned),
                usage,
                model: response.model.or(Some(model)),
                truncated: response.stop_reason.is_truncated(),
            })
        }
        .instrument(span)
        .await
    }
}
