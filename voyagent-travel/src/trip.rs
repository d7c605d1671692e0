//! Validated trip parameters.

use serde::Serialize;

use crate::error::{PlannerError, Result};

/// Longest trip accepted, in nights.
pub const MAX_NIGHTS: u32 = 365;

/// A trip to plan: where from, where to, for how long and for how much.
///
/// Constructed only through [`TripRequest::new`], so every instance has a
/// positive budget, between one and [`MAX_NIGHTS`] nights and non-empty
/// place names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRequest {
    budget: f64,
    origin: String,
    destination: String,
    nights: u32,
}

impl TripRequest {
    /// Validates and builds a trip request. Place names are trimmed.
    ///
    /// Checks run in order: budget, nights, places.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidTrip`] if the budget is not a positive
    /// finite number, `nights` is not positive or exceeds [`MAX_NIGHTS`], or
    /// either place is blank.
    pub fn new(
        budget: f64,
        origin: impl AsRef<str>,
        destination: impl AsRef<str>,
        nights: i64,
    ) -> Result<Self> {
        if !(budget.is_finite() && budget > 0.0) {
            return Err(PlannerError::invalid_trip("Budget must be positive"));
        }
        if nights <= 0 {
            return Err(PlannerError::invalid_trip(
                "Number of nights must be positive",
            ));
        }
        let nights = u32::try_from(nights)
            .ok()
            .filter(|&n| n <= MAX_NIGHTS)
            .ok_or_else(|| {
                PlannerError::invalid_trip(format!("Number of nights must be at most {MAX_NIGHTS}"))
            })?;

        let origin = origin.as_ref().trim();
        let destination = destination.as_ref().trim();
        if origin.is_empty() || destination.is_empty() {
            return Err(PlannerError::invalid_trip(
                "Origin and destination are required",
            ));
        }

        Ok(Self {
            budget,
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            nights,
        })
    }

    /// Total budget in dollars.
    #[must_use]
    pub const fn budget(&self) -> f64 {
        self.budget
    }

    /// Departure city.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Destination city.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Length of stay in nights.
    #[must_use]
    pub const fn nights(&self) -> u32 {
        self.nights
    }

    /// `"{origin} → {destination}"`.
    #[must_use]
    pub fn route(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}
