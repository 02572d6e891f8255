//! Output formatting for CLI commands.
//!
//! Results are printed either as human-readable text or as JSON for
//! programmatic use. The `write_*` functions take any [`Write`] so output can
//! be captured in tests; the `print_*` functions target stdout.

mod color;

use crate::domain::Business;
use color::{bold, colorize_stars, cyan, dimmed};
use serde::Serialize;
use std::env;
use std::io::{self, Write};
use std::sync::Arc;

/// Message printed when an aggregate query finds nothing.
pub const NO_MATCH_MESSAGE: &str = "No matching business.";

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Configuration for text output styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create an `OutputConfig` from environment variables.
    ///
    /// Colors are disabled when `NO_COLOR` is set (any value), or when
    /// `BIZQUERY_COLOR` is `0` or `false`.
    #[must_use]
    pub fn from_env() -> Self {
        // https://no-color.org/
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("BIZQUERY_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self { use_colors }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

#[derive(Serialize)]
struct CountJson {
    count: usize,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print a list of businesses, at most `limit` of them.
pub fn print_businesses(
    businesses: &[Arc<Business>],
    limit: usize,
    mode: OutputMode,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_businesses(&mut handle, businesses, limit, mode, &OutputConfig::from_env())
}

/// Print the result of an aggregate query.
pub fn print_business(business: Option<&Business>, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_business(&mut handle, business, mode, &OutputConfig::from_env())
}

/// Print a record count.
pub fn print_count(count: usize, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_count(&mut handle, count, mode)
}

// ============================================================================
// Writers
// ============================================================================

/// Write a list of businesses, at most `limit` of them.
///
/// Text output notes how many matches were left out. JSON output is an array
/// of the printed records.
pub fn write_businesses<W: Write>(
    w: &mut W,
    businesses: &[Arc<Business>],
    limit: usize,
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    let shown = &businesses[..businesses.len().min(limit)];

    match mode {
        OutputMode::Json => {
            let records: Vec<&Business> = shown.iter().map(|b| &**b).collect();
            write_json(w, &records)
        }
        OutputMode::Text => {
            if businesses.is_empty() {
                return writeln!(w, "No businesses found.");
            }

            writeln!(w, "Found {} business(es):", businesses.len())?;
            writeln!(w)?;
            for business in shown {
                write_business_line(w, business, config)?;
            }

            let hidden = businesses.len() - shown.len();
            if hidden > 0 {
                writeln!(w)?;
                writeln!(w, "{}", dimmed(&format!("... and {hidden} more"), config))?;
            }
            Ok(())
        }
    }
}

/// Write the result of an aggregate query; `None` means nothing matched.
pub fn write_business<W: Write>(
    w: &mut W,
    business: Option<&Business>,
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match (mode, business) {
        (OutputMode::Json, business) => write_json(w, &business),
        (OutputMode::Text, Some(business)) => write_business_line(w, business, config),
        (OutputMode::Text, None) => writeln!(w, "{NO_MATCH_MESSAGE}"),
    }
}

/// Write a record count.
pub fn write_count<W: Write>(w: &mut W, count: usize, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(w, &CountJson { count }),
        OutputMode::Text => writeln!(w, "{count}"),
    }
}

// ============================================================================
// Formatting
// ============================================================================

fn write_business_line<W: Write>(
    w: &mut W,
    business: &Business,
    config: &OutputConfig,
) -> io::Result<()> {
    let location = match (&business.city, &business.state) {
        (Some(city), Some(state)) => format!("({city}, {state})"),
        (Some(place), None) | (None, Some(place)) => format!("({place})"),
        (None, None) => "(unknown location)".to_string(),
    };
    let reviews = business
        .review_count
        .map_or_else(|| "no reviews".to_string(), |n| format!("{n} reviews"));

    writeln!(
        w,
        "{}  {}  {}  {}  {}",
        cyan(business.business_id.as_str(), config),
        bold(&business.name, config),
        dimmed(&location, config),
        colorize_stars(business.stars, config),
        dimmed(&reviews, config),
    )
}

fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> OutputConfig {
        OutputConfig { use_colors: false }
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn sample() -> Vec<Arc<Business>> {
        vec![
            Arc::new(
                Business::new("abcd", "Applebee's")
                    .with_location("Charlotte", "NC")
                    .with_stars(4.0)
                    .with_review_count(6),
            ),
            Arc::new(Business::new("cdef", "Cristiano Romero Angile").with_stars(3.0)),
        ]
    }

    #[test]
    fn text_list_shows_every_business() {
        let out = render(|w| write_businesses(w, &sample(), 50, OutputMode::Text, &plain()));

        assert!(out.starts_with("Found 2 business(es):"));
        assert!(out.contains("abcd  Applebee's  (Charlotte, NC)  4.0★  6 reviews"));
        assert!(out.contains("cdef  Cristiano Romero Angile  (unknown location)  3.0★  no reviews"));
    }

    #[test]
    fn text_list_reports_hidden_matches() {
        let out = render(|w| write_businesses(w, &sample(), 1, OutputMode::Text, &plain()));

        assert!(out.contains("Applebee's"));
        assert!(!out.contains("Cristiano"));
        assert!(out.contains("... and 1 more"));
    }

    #[test]
    fn empty_text_list() {
        let out = render(|w| write_businesses(w, &[], 50, OutputMode::Text, &plain()));
        assert_eq!(out, "No businesses found.\n");
    }

    #[test]
    fn json_list_respects_limit() {
        let out = render(|w| write_businesses(w, &sample(), 1, OutputMode::Json, &plain()));

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["name"], "Applebee's");
    }

    #[test]
    fn missing_aggregate_result() {
        let text = render(|w| write_business(w, None, OutputMode::Text, &plain()));
        let json = render(|w| write_business(w, None, OutputMode::Json, &plain()));

        assert_eq!(text, format!("{NO_MATCH_MESSAGE}\n"));
        assert_eq!(json.trim(), "null");
    }

    #[test]
    fn json_aggregate_result_is_an_object() {
        let business = sample().remove(0);
        let out = render(|w| write_business(w, Some(&*business), OutputMode::Json, &plain()));

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["business_id"], "abcd");
        assert_eq!(value["review_count"], 6);
    }

    #[test]
    fn count_in_both_modes() {
        assert_eq!(render(|w| write_count(w, 4, OutputMode::Text)), "4\n");

        let json = render(|w| write_count(w, 4, OutputMode::Json));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["count"], 4);
    }
}
