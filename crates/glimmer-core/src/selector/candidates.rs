//! Candidate-set builder.
//!
//! For each render tick the builder produces two ordered pools:
//! the time/weather/anytime pool and the date-matched pool. Both are
//! copies; the category map is never mutated.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::categories::Categories;

/// Half-open hour windows `[start, end)` selecting the time-of-day list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindows {
    pub morning_start: u32,
    pub morning_end: u32,
    pub afternoon_start: u32,
    pub afternoon_end: u32,
}

impl Default for TimeWindows {
    fn default() -> Self {
        Self {
            morning_start: 3,
            morning_end: 12,
            afternoon_start: 12,
            afternoon_end: 17,
        }
    }
}

impl TimeWindows {
    pub fn is_morning(&self, hour: u32) -> bool {
        hour >= self.morning_start && hour < self.morning_end
    }

    pub fn is_afternoon(&self, hour: u32) -> bool {
        hour >= self.afternoon_start && hour < self.afternoon_end
    }
}

/// The two candidate pools for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSets {
    /// Time-of-day list, then weather entries, then `anytime`.
    pub timed: Vec<String>,
    /// Entries of every category whose key, as a regex, matches today.
    pub dated: Vec<String>,
}

/// Build the candidate pools for the given hour, date and weather.
///
/// Exactly one of morning/afternoon/evening is chosen (never merged):
/// morning wins inside its window, afternoon inside its own, and
/// `evening` is the fallback for all remaining hours. A missing list
/// lets the next rule take over.
pub fn build(
    categories: &Categories,
    hour: u32,
    date: &str,
    windows: &TimeWindows,
    weather: Option<&str>,
) -> CandidateSets {
    let mut timed: Vec<String> = if windows.is_morning(hour) && categories.contains("morning") {
        categories.get("morning").to_vec()
    } else if windows.is_afternoon(hour) && categories.contains("afternoon") {
        categories.get("afternoon").to_vec()
    } else if categories.contains("evening") {
        categories.get("evening").to_vec()
    } else {
        Vec::new()
    };

    if let Some(weather) = weather {
        timed.extend_from_slice(categories.get(weather));
    }

    timed.extend_from_slice(categories.get("anytime"));

    let dated = date_matched(categories, date);

    CandidateSets { timed, dated }
}

/// Concatenate the lists of every key that matches `date` as a regex.
///
/// Keys that fail to compile (or simply never match a date string, like
/// `morning`) contribute nothing.
fn date_matched(categories: &Categories, date: &str) -> Vec<String> {
    let mut matched = Vec::new();
    for (key, entries) in categories.iter() {
        match Regex::new(key) {
            Ok(re) => {
                if re.is_match(date) {
                    matched.extend_from_slice(entries);
                }
            }
            Err(_) => {
                tracing::debug!(key = %key, "category key is not a valid pattern, skipping");
            }
        }
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Categories {
        let mut cats = Categories::new();
        cats.insert("morning", vec!["A".into()]);
        cats.insert("afternoon", vec!["B".into()]);
        cats.insert("evening", vec!["C".into()]);
        cats.insert("anytime", vec!["D".into()]);
        cats
    }

    #[test]
    fn morning_window_uses_morning_list_only() {
        let cats = categories();
        let windows = TimeWindows::default();
        for hour in 3..12 {
            let sets = build(&cats, hour, "2024-03-05", &windows, None);
            assert_eq!(sets.timed, ["A", "D"], "hour {hour}");
        }
    }

    #[test]
    fn afternoon_window_uses_afternoon_list() {
        let sets = build(
            &categories(),
            13,
            "2024-03-05",
            &TimeWindows::default(),
            None,
        );
        assert_eq!(sets.timed, ["B", "D"]);
    }

    #[test]
    fn off_window_hours_fall_back_to_evening() {
        let windows = TimeWindows::default();
        for hour in [0, 1, 2, 17, 20, 23] {
            let sets = build(&categories(), hour, "2024-03-05", &windows, None);
            assert_eq!(sets.timed, ["C", "D"], "hour {hour}");
        }
    }

    #[test]
    fn missing_morning_list_falls_through_to_evening() {
        let mut cats = categories();
        cats.0.remove("morning");
        let sets = build(&cats, 8, "2024-03-05", &TimeWindows::default(), None);
        assert_eq!(sets.timed, ["C", "D"]);
    }

    #[test]
    fn no_lists_at_all_yields_empty_pool() {
        let sets = build(
            &Categories::new(),
            8,
            "2024-03-05",
            &TimeWindows::default(),
            None,
        );
        assert!(sets.timed.is_empty());
        assert!(sets.dated.is_empty());
    }

    #[test]
    fn weather_entries_sit_between_time_and_anytime() {
        let mut cats = categories();
        cats.insert("rain", vec!["Bring an umbrella".into()]);
        let sets = build(
            &cats,
            8,
            "2024-03-05",
            &TimeWindows::default(),
            Some("rain"),
        );
        assert_eq!(sets.timed, ["A", "Bring an umbrella", "D"]);
    }

    #[test]
    fn unknown_weather_category_adds_nothing() {
        let sets = build(
            &categories(),
            8,
            "2024-03-05",
            &TimeWindows::default(),
            Some("snow"),
        );
        assert_eq!(sets.timed, ["A", "D"]);
    }

    #[test]
    fn date_pattern_matches_new_years_day_in_any_year() {
        let mut cats = categories();
        cats.insert("....-01-01", vec!["Happy new year!".into()]);

        let on = build(&cats, 8, "2024-01-01", &TimeWindows::default(), None);
        assert_eq!(on.dated, ["Happy new year!"]);

        let off = build(&cats, 8, "2024-06-01", &TimeWindows::default(), None);
        assert!(off.dated.is_empty());
    }

    #[test]
    fn plain_keys_never_match_a_date() {
        let sets = build(&categories(), 8, "2024-01-01", &TimeWindows::default(), None);
        assert!(sets.dated.is_empty());
    }

    #[test]
    fn invalid_regex_key_is_skipped() {
        let mut cats = categories();
        cats.insert("(", vec!["never".into()]);
        let sets = build(&cats, 8, "2024-01-01", &TimeWindows::default(), None);
        assert!(sets.dated.is_empty());
    }

    #[test]
    fn building_does_not_mutate_categories() {
        let cats = categories();
        let before = cats.clone();
        let mut sets = build(&cats, 8, "2024-03-05", &TimeWindows::default(), None);
        sets.timed.push("mutated".into());
        assert_eq!(cats, before);
    }
}
