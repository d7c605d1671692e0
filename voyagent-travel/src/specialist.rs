//! The three travel specialists.

use std::fmt;

use serde::Serialize;

/// A specialist persona consulted for one part of the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Specialist {
    /// Recommends a flight.
    Flight,
    /// Recommends a hotel for the whole stay.
    Hotel,
    /// Plans daily activities.
    Activity,
}

impl Specialist {
    /// Every specialist, in consultation order.
    pub const ALL: [Self; 3] = [Self::Flight, Self::Hotel, Self::Activity];

    /// Agent name used in logs and error messages.
    #[must_use]
    pub const fn agent_name(self) -> &'static str {
        match self {
            Self::Flight => "FlightAgent",
            Self::Hotel => "HotelAgent",
            Self::Activity => "ActivityAgent",
        }
    }

    /// Heading of the specialist's section in the trip summary.
    #[must_use]
    pub const fn section_title(self) -> &'static str {
        match self {
            Self::Flight => "FLIGHTS",
            Self::Hotel => "HOTELS",
            Self::Activity => "ACTIVITIES",
        }
    }

    /// One-line description of the agent.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Flight => "Recommends premium, standard and budget flights",
            Self::Hotel => "Recommends luxury, mid-range and budget hotels",
            Self::Activity => "Builds a day-by-day activity plan",
        }
    }

    /// Lowercase identifier, e.g. `flight`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Hotel => "hotel",
            Self::Activity => "activity",
        }
    }
}

impl fmt::Display for Specialist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_titles() {
        let names: Vec<_> = Specialist::ALL.iter().map(|s| s.agent_name()).collect();
        assert_eq!(names, ["FlightAgent", "HotelAgent", "ActivityAgent"]);
        assert_eq!(Specialist::Hotel.section_title(), "HOTELS");
        assert_eq!(Specialist::Activity.to_string(), "activity");
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Specialist::Flight).unwrap_or_default();
        assert_eq!(json, "\"flight\"");
    }
}
