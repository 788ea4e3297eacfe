//! Canonical ordering for days and meals, plus meal-name formatting.
//!
//! Day names found in the canonical week sort by their position in it; any
//! other name sorts after the whole week, lexicographically among its peers.
//! Meals follow the same scheme against the canonical meal sequence, except
//! that the match is ASCII-case-insensitive because menu documents
//! conventionally spell meal types in uppercase.

use std::cmp::Ordering;

pub const WEEK_ORDER: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const MEAL_ORDER: [&str; 4] = ["Breakfast", "Lunch", "Snacks", "Dinner"];

fn week_rank(day: &str) -> Option<usize> {
    WEEK_ORDER.iter().position(|name| *name == day)
}

fn meal_rank(meal: &str) -> Option<usize> {
    MEAL_ORDER.iter().position(|name| name.eq_ignore_ascii_case(meal))
}

fn canonical_cmp(rank_a: Option<usize>, rank_b: Option<usize>, a: &str, b: &str) -> Ordering {
    match (rank_a, rank_b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Sorts day names into canonical week order, unknown names last.
pub fn order_days(mut days: Vec<String>) -> Vec<String> {
    days.sort_by(|a, b| canonical_cmp(week_rank(a), week_rank(b), a, b));
    days
}

/// Sorts meal-type names into canonical meal order, unknown names last.
pub fn order_meals(mut meals: Vec<String>) -> Vec<String> {
    meals.sort_by(|a, b| canonical_cmp(meal_rank(a), meal_rank(b), a, b));
    meals
}

/// Formats a raw meal-type name for display: the whole name lower-cased,
/// then the first letter of each space-separated word raised. Runs of
/// spaces collapse because empty segments are dropped.
///
/// `"BREAKFAST"` becomes `"Breakfast"`, `"SPECIAL LUNCH"` becomes
/// `"Special Lunch"`.
pub fn format_meal_name(raw: &str) -> String {
    raw.to_lowercase()
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
