//! Error types for trip planning.

use crate::config::ConfigError;

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, PlannerError>;

/// The main error type for the travel planner.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PlannerError {
    /// The trip request failed validation.
    #[error("Invalid trip: {0}")]
    InvalidTrip(String),

    /// Configuration could not be loaded, saved or validated.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Agent runtime or model provider error.
    #[error(transparent)]
    Agent(#[from] voyagent::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlannerError {
    /// Create an invalid trip error with a message.
    #[must_use]
    pub fn invalid_trip(msg: impl Into<String>) -> Self {
        Self::InvalidTrip(msg.into())
    }

    /// Create a config error for an invalid value.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(ConfigError::InvalidValue(msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_trip_keeps_message() {
        let err = PlannerError::invalid_trip("Budget must be positive");
        assert_eq!(err.to_string(), "Invalid trip: Budget must be positive");
    }

    #[test]
    fn agent_errors_pass_through() {
        let err: PlannerError = voyagent::Error::agent("no provider").into();
        assert_eq!(err.to_string(), "Agent error: no provider");
    }

    #[test]
    fn config_helper_wraps_invalid_value() {
        let err = PlannerError::config("temperature must be between 0 and 2");
        assert!(matches!(
            err,
            PlannerError::Config(ConfigError::InvalidValue(_))
        ));
    }
}
