//! Agent configuration types.
//!
//! The [`Agent`] struct defines an agent's identity, behavior and the LLM
//! provider it uses. Each agent owns its provider handle, so agents in the
//! same program can target different models or servers.

use std::fmt;

use crate::chat::SharedChatProvider;

/// A conversable agent: a named system prompt plus model settings.
#[derive(Clone)]
pub struct Agent {
    /// Agent name, used in logs and as the reply author.
    pub name: String,
    /// Short description of what the agent is for.
    pub description: Option<String>,
    /// System instructions sent ahead of every conversation.
    pub instructions: String,
    /// Model identifier. Empty means the provider's default model.
    pub model: String,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Maximum tokens per reply.
    pub max_tokens: Option<u32>,
    /// Provider used to generate replies.
    pub provider: Option<SharedChatProvider>,
}

impl Agent {
    /// Creates an agent with the given name and no provider.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            instructions: String::new(),
            model: String::new(),
            temperature: None,
            max_tokens: None,
            provider: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the system instructions.
    #[must_use]
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Sets the model identifier.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the sampling temperature.
    #[must_use]
    pub const fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the maximum tokens per reply.
    #[must_use]
    pub const fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Binds the agent to a provider.
    #[must_use]
    pub fn provider(mut self, provider: SharedChatProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Returns `true` if a provider is configured.
    #[must_use]
    pub const fn has_provider(&self) -> bool {
        self.provider.is_some()
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field(
                "provider",
                &self.provider.as_ref().map(|p| p.provider_name()),
            )
            .finish_non_exhaustive()
    }
}
