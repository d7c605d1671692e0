//! Console rendering of the trip header, summary and verdict.

use crate::money::{format_usd, group_thousands};
use crate::planner::{Recommendation, TripPlan};
use crate::trip::TripRequest;

const WIDTH: usize = 50;

/// Reply lines worth repeating in the summary.
const SECTION_KEYWORDS: [&str; 8] = [
    "Premium:",
    "Standard:",
    "Budget:",
    "Luxury:",
    "Mid-Range:",
    "Day ",
    "BEST CHOICE:",
    "HIGHLIGHTS:",
];

/// The banner printed before planning starts.
#[must_use]
pub fn render_header(trip: &TripRequest) -> String {
    [
        String::new(),
        "AI Travel Planner".to_owned(),
        trip.route(),
        format!(
            "{} nights - {} budget",
            trip.nights(),
            format_usd(trip.budget())
        ),
        "─".repeat(WIDTH),
    ]
    .join("\n")
}

/// The recommendation lines of a reply, indented for the summary.
///
/// `BEST CHOICE` lines are indented further so they stand out.
#[must_use]
pub fn agent_section(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(str::trim)
        .filter(|line| SECTION_KEYWORDS.iter().any(|keyword| line.contains(keyword)))
        .map(|line| {
            if line.contains("BEST CHOICE:") {
                format!("     {line}")
            } else {
                format!("   {line}")
            }
        })
        .collect()
}

fn section_lines(rec: &Recommendation) -> Vec<String> {
    if rec.failed {
        vec![format!("   {}", rec.response)]
    } else {
        agent_section(&rec.response)
    }
}

/// The full trip summary: per-specialist sections, cost breakdown and
/// whether the trip fits the budget.
#[must_use]
pub fn render_summary(plan: &TripPlan) -> String {
    let rule = "=".repeat(WIDTH);
    let mut out = vec![String::new(), rule.clone(), "TRIP SUMMARY".to_owned(), rule.clone()];

    for (i, rec) in plan.recommendations().into_iter().enumerate() {
        if i > 0 {
            out.push(String::new());
        }
        out.push(format!("{}:", rec.specialist.section_title()));
        out.extend(section_lines(rec));
    }

    out.extend([
        String::new(),
        "COST BREAKDOWN:".to_owned(),
        format!("   Flights:    ${}", group_thousands(plan.flight.cost)),
        format!("   Hotels:     ${}", group_thousands(plan.hotel.cost)),
        format!("   Activities: ${}", group_thousands(plan.activity.cost)),
        format!("   {}", "─".repeat(22)),
        format!("   Total:      ${}", group_thousands(plan.total_cost)),
        format!("   Remaining:  {}", format_usd(plan.remaining_budget)),
        String::new(),
    ]);

    if plan.within_budget {
        out.push("TRIP FITS BUDGET!".to_owned());
        out.push(format!(
            "Ready for your {}-night adventure!",
            plan.trip.nights()
        ));
    } else {
        out.push(format!(
            "Over budget by {}",
            format_usd(plan.over_budget_by())
        ));
        out.push("Consider reducing accommodation or activities".to_owned());
    }
    out.push(rule);

    out.join("\n")
}

/// The closing verdict printed after the summary.
#[must_use]
pub fn render_verdict(plan: &TripPlan) -> String {
    let lines = if plan.within_budget {
        vec![
            "SUCCESS! Trip planned within budget".to_owned(),
            format!("Total cost: ${}", group_thousands(plan.total_cost)),
            format!("Money left: {}", format_usd(plan.remaining_budget)),
        ]
    } else {
        vec![
            "Trip planned but over budget".to_owned(),
            "Consider adjusting your preferences".to_owned(),
        ]
    };
    format!("\n{}", lines.join("\n"))
}
