//! Cost extraction from specialist replies.
//!
//! Replies are free-form model output. Extraction is best effort: it follows
//! the line formats the prompts ask for, and falls back to a zero cost when
//! the model strayed from them.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::specialist::Specialist;

static DOLLAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d[\d,]*)").expect("valid regex"));
static NIGHTS_TOTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"nights\s*=\s*\$(\d[\d,]*)").expect("valid regex"));

const BEST_CHOICE: &str = "BEST CHOICE:";
const TOTAL_ACTIVITIES: &str = "TOTAL ACTIVITIES:";

/// Details shown when nothing could be extracted.
pub const NO_DETAILS: &str = "No details available";

/// Details shown for a successfully read activity plan.
pub const ACTIVITY_DETAILS: &str = "Activity plan created";

/// The cost a specialist committed to, and the line it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostEstimate {
    /// Cost in whole dollars.
    pub cost: u64,
    /// The recommendation line, or a fixed note.
    pub details: String,
}

impl CostEstimate {
    fn new(cost: u64, details: impl Into<String>) -> Self {
        Self {
            cost,
            details: details.into(),
        }
    }
}

impl Default for CostEstimate {
    fn default() -> Self {
        Self::new(0, NO_DETAILS)
    }
}

/// Splits a reply into trimmed, non-blank lines with `*` emphasis removed.
#[must_use]
pub fn cleaned_lines(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(|line| line.replace('*', "").trim().to_owned())
        .filter(|line| !line.is_empty())
        .collect()
}

/// The lowercased choice after the first `BEST CHOICE:` line, or an empty
/// string when the reply has none.
#[must_use]
pub fn best_choice(lines: &[String]) -> String {
    lines
        .iter()
        .find_map(|line| line.strip_prefix(BEST_CHOICE))
        .map(|choice| choice.trim().to_lowercase())
        .unwrap_or_default()
}

/// Parses the first `$amount` in `text`, accepting thousands separators.
#[must_use]
pub fn first_dollar_amount(text: &str) -> Option<u64> {
    capture_amount(&DOLLAR_RE, text)
}

fn capture_amount(re: &Regex, text: &str) -> Option<u64> {
    let digits: String = re
        .captures(text)?
        .get(1)?
        .as_str()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Reads the recommended cost out of `reply`.
///
/// `nights` converts a nightly hotel rate to a stay total when the reply
/// does not state one.
#[must_use]
pub fn extract_cost(reply: &str, specialist: Specialist, nights: u32) -> CostEstimate {
    let lines = cleaned_lines(reply);

    match specialist {
        Specialist::Flight => {
            let choice = best_choice(&lines);
            recommended_lines(&lines, &choice)
                .find_map(|line| {
                    first_dollar_amount(line).map(|cost| CostEstimate::new(cost, line))
                })
                .unwrap_or_default()
        }
        Specialist::Hotel => {
            let choice = best_choice(&lines);
            recommended_lines(&lines, &choice)
                .next()
                .map(|line| {
                    let cost = capture_amount(&NIGHTS_TOTAL_RE, line)
                        .or_else(|| {
                            first_dollar_amount(line)
                                .map(|rate| rate.saturating_mul(u64::from(nights)))
                        })
                        .unwrap_or(0);
                    CostEstimate::new(cost, line.as_str())
                })
                .unwrap_or_default()
        }
        Specialist::Activity => lines
            .iter()
            .filter(|line| line.starts_with(TOTAL_ACTIVITIES))
            .find_map(|line| first_dollar_amount(line))
            .map_or_else(CostEstimate::default, |cost| {
                CostEstimate::new(cost, ACTIVITY_DETAILS)
            }),
    }
}

/// Lines that mention `choice` (case-insensitively) and a dollar sign.
fn recommended_lines<'a>(
    lines: &'a [String],
    choice: &'a str,
) -> impl Iterator<Item = &'a String> + 'a {
    lines
        .iter()
        .filter(move |line| line.contains('$') && line.to_lowercase().contains(choice))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLIGHT_REPLY: &str = "\
FLIGHT RECOMMENDATIONS:
Premium: ANA - $2,100 (13h 45m, Direct)
Standard: United Airlines - $1,850 (14h 20m, Direct)
Budget: Korean Air - $1,320 (19h 10m, 1 stop (Seoul))

BEST CHOICE: Budget
REASON: Leaves the most room in the budget.";

    const HOTEL_REPLY: &str = "\
HOTEL RECOMMENDATIONS:
Luxury: Park Hyatt Tokyo - $450 (Shinjuku, 3 nights = $1,350)
Mid-Range: Tokyo Station Hotel - $95 (Tokyo Station, 3 nights = $285)
Budget: Capsule Inn Akihabara - $35 (Akihabara, 3 nights = $105)

BEST CHOICE: Mid-Range
REASON: Central and good value.";

    const ACTIVITY_REPLY: &str = "\
ACTIVITY PLAN:
Day 1: Senso-ji Temple + Tokyo Skytree - Cost: $25
Day 2: Tsukiji Market Tour + teamLab Borderless - Cost: $80
Day 3: Senso-ji Temple + Tokyo Skytree - Cost: $25

TOTAL ACTIVITIES: $130
HIGHLIGHTS: teamLab Borderless, Tsukiji Market, Senso-ji";

    mod lines {
        use super::*;

        #[test]
        fn strips_emphasis_and_blanks() {
            let lines = cleaned_lines("  **BEST CHOICE:** Budget  \n\n   \n*REASON*: cheap\n");
            assert_eq!(lines, ["BEST CHOICE: Budget", "REASON: cheap"]);
        }

        #[test]
        fn best_choice_is_lowercased() {
            let lines = cleaned_lines(HOTEL_REPLY);
            assert_eq!(best_choice(&lines), "mid-range");
        }

        #[test]
        fn missing_best_choice_is_empty() {
            assert_eq!(best_choice(&cleaned_lines("nothing here")), "");
        }

        #[test]
        fn dollar_amounts_accept_separators() {
            assert_eq!(first_dollar_amount("ANA - $2,100 (Direct)"), Some(2100));
            assert_eq!(first_dollar_amount("costs $45, paid on site"), Some(45));
            assert_eq!(first_dollar_amount("no price"), None);
            assert_eq!(first_dollar_amount("$ 45"), None);
        }
    }

    mod flight {
        use super::*;

        #[test]
        fn picks_recommended_line() {
            let estimate = extract_cost(FLIGHT_REPLY, Specialist::Flight, 3);
            assert_eq!(estimate.cost, 1320);
            assert_eq!(
                estimate.details,
                "Budget: Korean Air - $1,320 (19h 10m, 1 stop (Seoul))"
            );
        }

        #[test]
        fn markdown_reply() {
            let reply = "**Premium:** ANA - $2,100\n**Standard:** United - $1,850\n\
                         **BEST CHOICE:** Standard";
            let estimate = extract_cost(reply, Specialist::Flight, 3);
            assert_eq!(estimate.cost, 1850);
            assert_eq!(estimate.details, "Standard: United - $1,850");
        }

        #[test]
        fn without_best_choice_first_priced_line_wins() {
            let reply = "Premium: ANA - $2,100\nBudget: Korean Air - $1,320";
            assert_eq!(extract_cost(reply, Specialist::Flight, 3).cost, 2100);
        }

        #[test]
        fn unpriced_reply_falls_back() {
            let estimate = extract_cost("I cannot help with that.", Specialist::Flight, 3);
            assert_eq!(estimate, CostEstimate::default());
            assert_eq!(estimate.details, NO_DETAILS);
        }
    }

    mod hotel {
        use super::*;

        #[test]
        fn prefers_stated_total() {
            let estimate = extract_cost(HOTEL_REPLY, Specialist::Hotel, 3);
            assert_eq!(estimate.cost, 285);
            assert!(estimate.details.starts_with("Mid-Range: Tokyo Station Hotel"));
        }

        #[test]
        fn multiplies_nightly_rate_without_total() {
            let reply = "Budget: Generator Paris - $45 (10th Arr.)\nBEST CHOICE: Budget";
            let estimate = extract_cost(reply, Specialist::Hotel, 4);
            assert_eq!(estimate.cost, 180);
            assert_eq!(estimate.details, "Budget: Generator Paris - $45 (10th Arr.)");
        }

        #[test]
        fn stops_at_first_matching_line() {
            let reply = "Budget: see below $\nBudget: Generator Paris - $45\nBEST CHOICE: Budget";
            let estimate = extract_cost(reply, Specialist::Hotel, 2);
            assert_eq!(estimate.cost, 0);
            assert_eq!(estimate.details, "Budget: see below $");
        }
    }

    mod activity {
        use super::*;

        #[test]
        fn reads_total_line() {
            let estimate = extract_cost(ACTIVITY_REPLY, Specialist::Activity, 3);
            assert_eq!(estimate.cost, 130);
            assert_eq!(estimate.details, ACTIVITY_DETAILS);
        }

        #[test]
        fn skips_unpriced_total_lines() {
            let reply = "TOTAL ACTIVITIES: see above\nTOTAL ACTIVITIES: $1,045";
            assert_eq!(extract_cost(reply, Specialist::Activity, 3).cost, 1045);
        }

        #[test]
        fn day_costs_alone_are_not_totalled() {
            let reply = "Day 1: Louvre - Cost: $17\nDay 2: Eiffel Tower - Cost: $29";
            assert_eq!(
                extract_cost(reply, Specialist::Activity, 2),
                CostEstimate::default()
            );
        }
    }
}
