//! Unified error types for the voyagent runtime.
//!
//! This module provides the error hierarchy covering:
//! - LLM provider errors (network, HTTP status, malformed responses)
//! - Agent configuration errors

pub use crate::llms::error::LlmError;

/// Result type alias for voyagent operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the voyagent runtime.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// LLM provider error.
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Agent configuration or runtime error.
    #[error("Agent error: {0}")]
    Agent(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an agent error with a message.
    #[must_use]
    pub fn agent(msg: impl Into<String>) -> Self {
        Self::Agent(msg.into())
    }

    /// Returns `true` if retrying the same request might succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Llm(err) => err.is_retryable(),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Llm(err.into())
    }
}
