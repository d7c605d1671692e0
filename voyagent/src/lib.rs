//! Voyagent - conversable LLM agents over pluggable chat providers.
//!
//! This crate provides the small agent runtime the travel planner is built on:
//! a provider-agnostic chat interface, an Ollama backend, and an [`Agent`]
//! type that turns a system prompt plus model settings into replies.
//!
//! [`Agent`]: agent::Agent

pub mod agent;
pub mod chat;
pub mod error;
pub mod llms;
pub mod message;
pub mod prelude;
pub mod usage;

pub use error::{Error, LlmError, Result};
