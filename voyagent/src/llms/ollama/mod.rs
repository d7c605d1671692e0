//! Ollama API client implementation.
//!
//! This module provides a client for the Ollama local LLM server, speaking
//! the native non-streaming `/api/chat` endpoint.

mod chat;
mod client;
mod config;

pub use client::Ollama;
pub use config::OllamaConfig;
