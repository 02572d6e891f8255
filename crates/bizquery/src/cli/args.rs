//! CLI argument structs for all commands.
//!
//! Every command accepts the same filter flags ([`FilterArgs`]); they are
//! applied as successive chain steps before the command runs.

use clap::Args;

use super::validators::{validate_day, validate_min_stars, validate_non_empty};
use crate::query::QueryChain;

/// Filter flags shared by every command
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct FilterArgs {
    /// Keep businesses in this city (exact, case-sensitive; requires --state)
    #[arg(long, requires = "state", value_parser = validate_non_empty)]
    pub city: Option<String>,

    /// Keep businesses in this state (exact, case-sensitive; requires --city)
    #[arg(long, requires = "city", value_parser = validate_non_empty)]
    pub state: Option<String>,

    /// Keep businesses rated at least this many stars
    #[arg(
        short = 's',
        long,
        allow_negative_numbers = true,
        value_parser = validate_min_stars
    )]
    pub min_stars: Option<f64>,

    /// Keep businesses tagged with this category
    #[arg(short, long, value_parser = validate_non_empty)]
    pub category: Option<String>,

    /// Keep businesses open on all of these days (comma-separated)
    #[arg(short, long, value_delimiter = ',', value_parser = validate_day)]
    pub days: Vec<String>,

    /// Keep businesses whose ambience has this flag set
    #[arg(short, long, value_parser = validate_non_empty)]
    pub ambience: Option<String>,
}

impl FilterArgs {
    /// Apply the requested filters to `chain`.
    ///
    /// Steps run in a fixed order: location, stars, category, days, ambience.
    /// Flags that were not given are skipped.
    #[must_use]
    pub fn apply(&self, chain: &QueryChain) -> QueryChain {
        let mut result = chain.clone();

        if let (Some(city), Some(state)) = (&self.city, &self.state) {
            result = result.from_city_in_state(city, state);
        }
        if let Some(threshold) = self.min_stars {
            result = result.has_stars_geq(threshold);
        }
        if let Some(category) = &self.category {
            result = result.in_category(category);
        }
        if !self.days.is_empty() {
            result = result.has_hours_on_days(self.days.as_slice());
        }
        if let Some(ambience) = &self.ambience {
            result = result.has_ambience(ambience);
        }

        result
    }
}

/// Arguments for the `filter` command
#[derive(Args, Debug, Clone)]
pub struct FilterCommandArgs {
    /// Filters to apply
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Maximum number of businesses to display (defaults to the configured limit)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for the `best-place`, `most-reviews` and `count` commands
#[derive(Args, Debug, Clone)]
pub struct AggregateArgs {
    /// Filters to apply before aggregating
    #[command(flatten)]
    pub filters: FilterArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Business;

    fn chain() -> QueryChain {
        QueryChain::new(vec![
            Business::new("1", "Diner")
                .with_location("Charlotte", "NC")
                .with_stars(4.0)
                .with_categories(["Food"])
                .with_hours([("Monday", "8-5"), ("Tuesday", "8-5")])
                .with_ambience("casual", true),
            Business::new("2", "Garage")
                .with_location("Charlotte", "NC")
                .with_stars(2.0),
            Business::new("3", "Cafe")
                .with_location("Boston", "MA")
                .with_stars(5.0)
                .with_categories(["Food"]),
        ])
    }

    fn names(chain: &QueryChain) -> Vec<String> {
        chain.iter().map(|b| b.name.clone()).collect()
    }

    #[test]
    fn no_flags_keeps_everything() {
        let result = FilterArgs::default().apply(&chain());
        assert_eq!(names(&result), vec!["Diner", "Garage", "Cafe"]);
    }

    #[test]
    fn flags_combine_conjunctively() {
        let filters = FilterArgs {
            city: Some("Charlotte".to_string()),
            state: Some("NC".to_string()),
            min_stars: Some(3.0),
            ..FilterArgs::default()
        };

        assert_eq!(names(&filters.apply(&chain())), vec!["Diner"]);
    }

    #[test]
    fn days_and_ambience_filters() {
        let filters = FilterArgs {
            category: Some("Food".to_string()),
            days: vec!["Tuesday".to_string(), "Monday".to_string()],
            ambience: Some("casual".to_string()),
            ..FilterArgs::default()
        };

        assert_eq!(names(&filters.apply(&chain())), vec!["Diner"]);
    }
}
