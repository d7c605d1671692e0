//! Agent module - conversable agents bound to a chat provider.
//!
//! An [`Agent`] is a named persona: system instructions plus model settings,
//! bound to the [`SharedChatProvider`](crate::chat::SharedChatProvider) it
//! talks through. Agents are cheap to clone and share one provider, so many
//! specialists can run side by side against a single model server.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use voyagent::prelude::*;
//!
//! let agent = Agent::new("FlightAgent")
//!     .instructions("You are a flight booking specialist.")
//!     .model("mistral")
//!     .temperature(0.3)
//!     .provider(provider.clone());
//!
//! let reply = agent.generate_reply(&[Message::user("Recommend flights")]).await?;
//! println!("{}", reply.text().unwrap_or("no output"));
//! ```

mod config;
mod reply;

pub use config::Agent;
pub use reply::Reply;
