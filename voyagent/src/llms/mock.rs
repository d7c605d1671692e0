//! Mock provider implementation for testing.
//!
//! [`MockProvider`] answers chat requests without a model server, either by
//! cycling through predefined replies or by computing each reply from the
//! incoming request. Every request is recorded for later inspection.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::chat::{ChatProvider, ChatRequest, ChatResponse};
use crate::error::{LlmError, Result};
use crate::usage::Usage;

type Responder = dyn Fn(usize, &ChatRequest) -> Result<String> + Send + Sync;

/// A scripted chat provider.
///
/// # Example
///
/// ```rust,ignore
/// use voyagent::prelude::*;
///
/// let provider = MockProvider::new(vec!["Hello!".to_owned(), "Goodbye!".to_owned()]);
/// // First call returns "Hello!", second returns "Goodbye!", third returns "Hello!" again...
/// ```
pub struct MockProvider {
    model: String,
    responder: Box<Responder>,
    calls: AtomicUsize,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockProvider {
    /// Default model identifier reported by the mock.
    pub const DEFAULT_MODEL: &'static str = "mock-model";

    /// Create a provider that cycles through predefined replies.
    #[must_use]
    pub fn new(responses: Vec<String>) -> Self {
        Self::from_fn(move |index, _| {
            Ok(if responses.is_empty() {
                String::new()
            } else {
                responses[index % responses.len()].clone()
            })
        })
    }

    /// Create a provider that computes each reply from the call index and request.
    #[must_use]
    pub fn from_fn<F>(responder: F) -> Self
    where
        F: Fn(usize, &ChatRequest) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            model: Self::DEFAULT_MODEL.to_owned(),
            responder: Box::new(responder),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a provider whose every call fails with a network error.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::from_fn(move |_, _| Err(LlmError::network(message.clone()).into()))
    }

    /// Set the model identifier reported in responses.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Number of chat calls received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshot of every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl fmt::Debug for MockProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockProvider")
            .field("model", &self.model)
            .field("calls", &self.call_count())
            .finish_non_exhaustive()
    }
}

/// Rough whitespace token count, good enough for usage bookkeeping in tests.
fn word_count(text: &str) -> u32 {
    u32::try_from(text.split_whitespace().count()).unwrap_or(u32::MAX)
}

#[async_trait]
impl ChatProvider for MockProvider {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let text = (self.responder)(index, request)?;
        let input: u32 = request.messages.iter().map(|m| word_count(&m.content)).sum();
        let usage = Usage::new(input, word_count(&text));

        Ok(ChatResponse::from_text(text)
            .with_model(self.model.clone())
            .with_usage(usage))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn default_model(&self) -> &str {
        &self.model
    }
}
