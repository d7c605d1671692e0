//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use voyagent::prelude::*;
//! ```

#[cfg(feature = "ollama")]
pub use crate::llms::{Ollama, OllamaConfig};

pub use crate::agent::{Agent, Reply};
pub use crate::chat::{ChatProvider, ChatRequest, ChatResponse, SharedChatProvider, StopReason};
pub use crate::error::{Error, LlmError, Result};
pub use crate::llms::MockProvider;
pub use crate::message::{Message, Role};
pub use crate::usage::Usage;
