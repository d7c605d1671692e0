//! LLM backend implementations.
//!
//! # Available Backends
//!
//! - [`ollama`] - Ollama local LLM server
//! - [`mock`] - Scripted provider for tests and offline runs

pub mod error;
pub mod mock;

#[cfg(feature = "ollama")]
pub mod ollama;

pub use mock::MockProvider;

#[cfg(feature = "ollama")]
pub use ollama::{Ollama, OllamaConfig};
