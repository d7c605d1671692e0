//! Trip planning across the three specialists.
//!
//! [`TravelPlanner`] builds one [`Agent`] per [`Specialist`], hands each the
//! matching options from its data source, and totals the costs the agents
//! commit to. A specialist that cannot be reached does not sink the plan:
//! its section falls back to an error note with zero cost.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{Instrument, debug, info, info_span, warn};
use voyagent::prelude::*;

use crate::catalog::{FixtureCatalog, SharedDataSource};
use crate::error::{PlannerError, Result};
use crate::extract::{CostEstimate, extract_cost};
use crate::prompts;
use crate::specialist::Specialist;
use crate::trip::TripRequest;

/// Sampling temperature for every specialist unless overridden.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Reply text used when the model returns nothing.
pub const NO_RESPONSE: &str = "No response generated";

/// One specialist's answer and the cost read out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Which specialist answered.
    pub specialist: Specialist,
    /// The raw reply, or a fallback note.
    pub response: String,
    /// Recommended cost in whole dollars.
    pub cost: u64,
    /// The recommendation line the cost was read from.
    pub details: String,
    /// Whether the consultation failed.
    pub failed: bool,
    /// Tokens spent on the consultation.
    pub usage: Usage,
}

impl Recommendation {
    fn answered(specialist: Specialist, response: String, nights: u32, usage: Usage) -> Self {
        let CostEstimate { cost, details } = extract_cost(&response, specialist, nights);
        Self {
            specialist,
            response,
            cost,
            details,
            failed: false,
            usage,
        }
    }

    fn failed(specialist: Specialist) -> Self {
        let response = format!(
            "Error: Unable to get recommendation from {}",
            specialist.agent_name()
        );
        let CostEstimate { cost, details } = CostEstimate::default();
        Self {
            specialist,
            response,
            cost,
            details,
            failed: true,
            usage: Usage::default(),
        }
    }
}

/// A finished plan: the three recommendations and the budget arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPlan {
    /// The trip that was planned.
    pub trip: TripRequest,
    /// Flight recommendation.
    pub flight: Recommendation,
    /// Hotel recommendation.
    pub hotel: Recommendation,
    /// Activity recommendation.
    pub activity: Recommendation,
    /// Sum of the three costs.
    pub total_cost: u64,
    /// Budget minus total cost; negative when over budget.
    pub remaining_budget: f64,
    /// Whether the total cost fits the budget.
    pub within_budget: bool,
    /// Tokens spent across all consultations.
    pub usage: Usage,
}

impl TripPlan {
    fn new(
        trip: TripRequest,
        flight: Recommendation,
        hotel: Recommendation,
        activity: Recommendation,
    ) -> Self {
        let total_cost = flight
            .cost
            .saturating_add(hotel.cost)
            .saturating_add(activity.cost);
        let total = total_cost as f64;
        let usage = flight.usage + hotel.usage + activity.usage;

        Self {
            remaining_budget: trip.budget() - total,
            within_budget: total <= trip.budget(),
            trip,
            flight,
            hotel,
            activity,
            total_cost,
            usage,
        }
    }

    /// How far the plan exceeds the budget, 0 when it fits.
    #[must_use]
    pub fn over_budget_by(&self) -> f64 {
        (-self.remaining_budget).max(0.0)
    }

    /// The recommendations in consultation order.
    #[must_use]
    pub const fn recommendations(&self) -> [&Recommendation; 3] {
        [&self.flight, &self.hotel, &self.activity]
    }
}

/// Coordinates the flight, hotel and activity specialists.
#[derive(Clone)]
pub struct TravelPlanner {
    provider: SharedChatProvider,
    catalog: SharedDataSource,
    model: String,
    temperature: f32,
}

impl TravelPlanner {
    /// Creates a planner over `provider` with the fixture catalog, the
    /// provider's default model and [`DEFAULT_TEMPERATURE`].
    #[must_use]
    pub fn new(provider: SharedChatProvider) -> Self {
        Self {
            provider,
            catalog: Arc::new(FixtureCatalog::new()),
            model: String::new(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Sets the model every specialist uses.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the sampling temperature every specialist uses.
    #[must_use]
    pub const fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Replaces the source of travel options.
    #[must_use]
    pub fn catalog(mut self, catalog: SharedDataSource) -> Self {
        self.catalog = catalog;
        self
    }

    /// Builds the agent for `specialist` on this trip.
    #[must_use]
    pub fn specialist_agent(&self, specialist: Specialist, trip: &TripRequest) -> Agent {
        Agent::new(specialist.agent_name())
            .description(specialist.description())
            .instructions(prompts::instructions(specialist, trip))
            .model(self.model.clone())
            .temperature(self.temperature)
            .provider(Arc::clone(&self.provider))
    }

    /// Asks `specialist` once about `options` and reads the cost out of the
    /// reply. Never fails: provider errors become a failed recommendation.
    pub async fn consult(
        &self,
        specialist: Specialist,
        trip: &TripRequest,
        options: &str,
    ) -> Recommendation {
        let agent = self.specialist_agent(specialist, trip);
        let message = prompts::user_message(&prompts::request_context(specialist, trip), options);

        match agent.generate_reply(&[Message::user(message)]).await {
            Ok(reply) => {
                let response = reply.text_or(NO_RESPONSE).to_owned();
                debug!(chars = response.len(), "specialist replied");
                Recommendation::answered(specialist, response, trip.nights(), reply.usage)
            }
            Err(e) => {
                warn!(agent = specialist.agent_name(), error = %e, "consultation failed");
                Recommendation::failed(specialist)
            }
        }
    }

    /// Plans `trip`: gathers options, consults all three specialists
    /// concurrently and totals their costs against the budget.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::Json`](crate::PlannerError::Json) if the
    /// options cannot be serialized for the prompts.
    pub async fn plan(&self, trip: &TripRequest) -> Result<TripPlan> {
        let span = info_span!("plan", route = %trip.route(), nights = trip.nights());

        async move {
            info!("gathering travel options");
            let flights = self.catalog.flights(trip.origin(), trip.destination());
            let hotels = self.catalog.hotels(trip.destination());
            let activities = self.catalog.activities(trip.destination());
            info!(
                flights = flights.len(),
                hotels = hotels.len(),
                activities = activities.len(),
                "found travel options"
            );

            let flight_options = prompts::format_options(&flights)?;
            let hotel_options = prompts::format_options(&hotels)?;
            let activity_options = prompts::format_options(&activities)?;

            info!("consulting specialists");
            let (flight, hotel, activity) = futures::join!(
                self.consult(Specialist::Flight, trip, &flight_options),
                self.consult(Specialist::Hotel, trip, &hotel_options),
                self.consult(Specialist::Activity, trip, &activity_options),
            );

            let plan = TripPlan::new(trip.clone(), flight, hotel, activity);
            info!(
                total_cost = plan.total_cost,
                remaining = plan.remaining_budget,
                within_budget = plan.within_budget,
                "plan complete"
            );
            Ok::<_, PlannerError>(plan)
        }
        .instrument(span)
        .await
    }
}

impl fmt::Debug for TravelPlanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TravelPlanner")
            .field("provider", &self.provider.provider_name())
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}
