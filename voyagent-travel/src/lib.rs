//! Multi-agent travel planning on a local Ollama model.
//!
//! Three specialist agents (flight, hotel and activity) each receive mock
//! travel options and reply in a fixed line format. The planner reads the
//! recommended cost out of each reply and checks the total against the
//! trip budget.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use voyagent::prelude::*;
//! use voyagent_travel::{TravelPlanner, TripRequest, summary};
//!
//! let trip = TripRequest::new(3500.0, "New York", "Tokyo", 3)?;
//! let planner = TravelPlanner::new(Arc::new(Ollama::with_defaults()?)).model("mistral");
//! let plan = planner.plan(&trip).await?;
//! println!("{}", summary::render_summary(&plan));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod money;
pub mod planner;
pub mod prompts;
pub mod specialist;
pub mod summary;
pub mod trip;

pub use catalog::{FixtureCatalog, SharedDataSource, TravelDataSource};
pub use error::{PlannerError, Result};
pub use planner::{Recommendation, TravelPlanner, TripPlan};
pub use specialist::Specialist;
pub use trip::TripRequest;
