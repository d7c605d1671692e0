//! Travel options offered to the specialists.
//!
//! [`FixtureCatalog`] serves a small fixed data set standing in for real
//! flight, hotel and activity APIs. Anything that implements
//! [`TravelDataSource`] can take its place.

use std::sync::Arc;

use serde::Serialize;

/// A flight between two cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightOption {
    /// Operating airline.
    pub airline: String,
    /// Fare in whole dollars.
    pub price: u64,
    /// Flight time, e.g. `14h 20m`.
    pub duration: String,
    /// `Direct` or a description of the stops.
    pub stops: String,
}

/// A place to stay at the destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelOption {
    /// Hotel name.
    pub name: String,
    /// Nightly rate in whole dollars.
    pub price_per_night: u64,
    /// Guest rating out of 5.
    pub rating: f64,
    /// Neighbourhood.
    pub location: String,
}

/// Something to do at the destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityOption {
    /// Activity name.
    pub name: String,
    /// Ticket price in whole dollars, 0 when free.
    pub price: u64,
    /// Kind of activity, e.g. `Cultural`.
    pub category: String,
}

/// Source of travel options for a trip.
pub trait TravelDataSource: Send + Sync {
    /// Flights from `origin` to `destination`.
    fn flights(&self, origin: &str, destination: &str) -> Vec<FlightOption>;

    /// Hotels at `destination`.
    fn hotels(&self, destination: &str) -> Vec<HotelOption>;

    /// Activities at `destination`.
    fn activities(&self, destination: &str) -> Vec<ActivityOption>;
}

/// Shared handle to a data source.
pub type SharedDataSource = Arc<dyn TravelDataSource>;

type FlightRow = (&'static str, u64, &'static str, &'static str);
type HotelRow = (&'static str, u64, f64, &'static str);
type ActivityRow = (&'static str, u64, &'static str);

const FLIGHTS: &[(&str, &str, &[FlightRow])] = &[
    (
        "New York",
        "Tokyo",
        &[
            ("United Airlines", 1850, "14h 20m", "Direct"),
            ("ANA", 2100, "13h 45m", "Direct"),
            ("Korean Air", 1320, "19h 10m", "1 stop (Seoul)"),
        ],
    ),
    (
        "London",
        "Paris",
        &[
            ("British Airways", 180, "1h 25m", "Direct"),
            ("Air France", 165, "1h 20m", "Direct"),
            ("Lufthansa", 220, "3h 45m", "1 stop (Frankfurt)"),
        ],
    ),
];

const GENERIC_FLIGHTS: &[FlightRow] = &[("Generic Airways", 800, "8h", "Direct")];

const HOTELS: &[(&str, &[HotelRow])] = &[
    (
        "Tokyo",
        &[
            ("Park Hyatt Tokyo", 450, 4.8, "Shinjuku"),
            ("Tokyo Station Hotel", 95, 4.2, "Tokyo Station"),
            ("Capsule Inn Akihabara", 35, 3.8, "Akihabara"),
        ],
    ),
    (
        "Paris",
        &[
            ("Le Meurice", 950, 4.9, "1st Arrondissement"),
            ("Hotel des Grands Boulevards", 180, 4.3, "2nd Arr."),
            ("Generator Paris", 45, 4.1, "10th Arr."),
        ],
    ),
];

const ACTIVITIES: &[(&str, &[ActivityRow])] = &[
    (
        "Tokyo",
        &[
            ("Senso-ji Temple", 0, "Cultural"),
            ("Tokyo Skytree", 25, "Sightseeing"),
            ("Tsukiji Market Tour", 45, "Food"),
            ("teamLab Borderless", 35, "Art"),
        ],
    ),
    (
        "Paris",
        &[
            ("Louvre Museum", 17, "Museum"),
            ("Eiffel Tower", 29, "Sightseeing"),
            ("Seine River Cruise", 15, "Sightseeing"),
            ("Versailles Palace", 20, "Historical"),
        ],
    ),
];

fn same_place(query: &str, known: &str) -> bool {
    query.trim().eq_ignore_ascii_case(known)
}

/// Built-in mock data for New York → Tokyo and London → Paris.
///
/// Unknown routes and destinations get a single generic option so the
/// specialists always have something to work with.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCatalog;

impl FixtureCatalog {
    /// Creates the catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TravelDataSource for FixtureCatalog {
    fn flights(&self, origin: &str, destination: &str) -> Vec<FlightOption> {
        let rows = FLIGHTS
            .iter()
            .find(|(from, to, _)| same_place(origin, from) && same_place(destination, to))
            .map_or(GENERIC_FLIGHTS, |(_, _, rows)| *rows);

        rows.iter()
            .map(|&(airline, price, duration, stops)| FlightOption {
                airline: airline.to_owned(),
                price,
                duration: duration.to_owned(),
                stops: stops.to_owned(),
            })
            .collect()
    }

    fn hotels(&self, destination: &str) -> Vec<HotelOption> {
        let Some((_, rows)) = HOTELS.iter().find(|(city, _)| same_place(destination, city))
        else {
            return vec![HotelOption {
                name: format!("Hotel {}", destination.trim()),
                price_per_night: 120,
                rating: 4.0,
                location: "City Center".to_owned(),
            }];
        };

        rows.iter()
            .map(|&(name, price_per_night, rating, location)| HotelOption {
                name: name.to_owned(),
                price_per_night,
                rating,
                location: location.to_owned(),
            })
            .collect()
    }

    fn activities(&self, destination: &str) -> Vec<ActivityOption> {
        let Some((_, rows)) = ACTIVITIES
            .iter()
            .find(|(city, _)| same_place(destination, city))
        else {
            return vec![ActivityOption {
                name: format!("{} City Tour", destination.trim()),
                price: 30,
                category: "Sightseeing".to_owned(),
            }];
        };

        rows.iter()
            .map(|&(name, price, category)| ActivityOption {
                name: name.to_owned(),
                price,
                category: category.to_owned(),
            })
            .collect()
    }
}
