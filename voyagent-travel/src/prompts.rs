//! System prompts and user messages for the specialists.
//!
//! The prompts pin each agent to a line-oriented reply format that
//! [`extract`](crate::extract) knows how to read costs back out of.

use serde::Serialize;

use crate::error::Result;
use crate::money::format_usd;
use crate::specialist::Specialist;
use crate::trip::TripRequest;

/// Returns the system prompt for `specialist` on this trip.
#[must_use]
pub fn instructions(specialist: Specialist, trip: &TripRequest) -> String {
    match specialist {
        Specialist::Flight => flight_instructions(trip),
        Specialist::Hotel => hotel_instructions(trip),
        Specialist::Activity => activity_instructions(trip),
    }
}

fn flight_instructions(trip: &TripRequest) -> String {
    format!(
        "You are a flight booking specialist for trips from {origin} to {destination}.\n\
         Budget: {budget}\n\
         \n\
         When given flight options, analyze them and respond in this EXACT format:\n\
         \n\
         FLIGHT RECOMMENDATIONS:\n\
         Premium: [Airline] - $[price] ([duration], [stops])\n\
         Standard: [Airline] - $[price] ([duration], [stops])\n\
         Budget: [Airline] - $[price] ([duration], [stops])\n\
         \n\
         BEST CHOICE: [Premium/Standard/Budget]\n\
         REASON: [Brief explanation]\n\
         \n\
         Always recommend the option that best balances price, duration, and convenience within budget.",
        origin = trip.origin(),
        destination = trip.destination(),
        budget = format_usd(trip.budget()),
    )
}

fn hotel_instructions(trip: &TripRequest) -> String {
    format!(
        "You are a hotel booking specialist for {destination}.\n\
         Trip length: {nights} nights\n\
         Total budget: {budget}\n\
         \n\
         When given hotel options, analyze them and respond in this EXACT format:\n\
         \n\
         HOTEL RECOMMENDATIONS:\n\
         Luxury: [Hotel Name] - $[price per night] ([location], {nights} nights = $[total])\n\
         Mid-Range: [Hotel Name] - $[price per night] ([location], {nights} nights = $[total])\n\
         Budget: [Hotel Name] - $[price per night] ([location], {nights} nights = $[total])\n\
         \n\
         BEST CHOICE: [Luxury/Mid-Range/Budget]\n\
         REASON: [Brief explanation considering location and value]\n\
         \n\
         Consider total cost for {nights} nights and recommend based on best value.",
        destination = trip.destination(),
        nights = trip.nights(),
        budget = format_usd(trip.budget()),
    )
}

fn activity_instructions(trip: &TripRequest) -> String {
    let days = (1..=trip.nights())
        .map(|day| format!("Day {day}: [Activity 1] + [Activity 2] - Cost: $[total]"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an activities specialist for {destination}.\n\
         Trip length: {nights} days\n\
         Budget: {budget}\n\
         \n\
         When given activity options, create a {nights}-day plan in this EXACT format:\n\
         \n\
         ACTIVITY PLAN:\n\
         {days}\n\
         \n\
         TOTAL ACTIVITIES: $[sum of all days]\n\
         HIGHLIGHTS: [Top 3 must-see activities]\n\
         \n\
         Mix free and paid activities. Prioritize must-see attractions while staying within budget.",
        destination = trip.destination(),
        nights = trip.nights(),
        budget = format_usd(trip.budget()),
    )
}

/// The request line that opens the user message for `specialist`.
#[must_use]
pub fn request_context(specialist: Specialist, trip: &TripRequest) -> String {
    match specialist {
        Specialist::Flight => format!(
            "Please recommend flights from {} to {}",
            trip.origin(),
            trip.destination()
        ),
        Specialist::Hotel => format!(
            "Please recommend hotels in {} for {} nights",
            trip.destination(),
            trip.nights()
        ),
        Specialist::Activity => format!(
            "Please create a {}-day activity plan for {}",
            trip.nights(),
            trip.destination()
        ),
    }
}

/// Renders options as a numbered list, one JSON object per line.
///
/// # Errors
///
/// Returns [`PlannerError::Json`](crate::PlannerError::Json) if an option
/// fails to serialize.
pub fn format_options<T: Serialize>(options: &[T]) -> Result<String> {
    if options.is_empty() {
        return Ok("No data available".to_owned());
    }

    let mut formatted = String::from("Available Options:\n");
    for (i, option) in options.iter().enumerate() {
        formatted.push_str(&format!("{}. {}\n", i + 1, serde_json::to_string(option)?));
    }
    Ok(formatted)
}

/// Joins the request line and the option list into the user message.
#[must_use]
pub fn user_message(context: &str, options: &str) -> String {
    format!("{context}\n\n{options}")
}
