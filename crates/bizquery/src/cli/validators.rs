//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

/// Reject empty values while keeping the value verbatim.
///
/// Filters compare strings exactly, so surrounding whitespace is preserved
/// rather than trimmed.
pub fn validate_non_empty(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("Value cannot be empty".to_string());
    }
    Ok(s.to_string())
}

/// Validate a minimum star rating.
///
/// Any finite number is accepted; ratings are not assumed to lie on a
/// particular scale.
pub fn validate_min_stars(s: &str) -> Result<f64, String> {
    let stars: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid star rating: '{s}'. Expected a number such as 4 or 3.5"))?;

    if !stars.is_finite() {
        return Err(format!("Star rating must be a finite number, got '{s}'"));
    }

    Ok(stars)
}

/// Validate a day name for `--days`.
///
/// Day names are matched exactly against the keys of a business's hours, so
/// only emptiness and stray whitespace are rejected.
pub fn validate_day(s: &str) -> Result<String, String> {
    let day = s.trim();

    if day.is_empty() {
        return Err("Day name cannot be empty".to_string());
    }

    if day != s {
        return Err(format!(
            "Day name '{s}' has surrounding whitespace. Use e.g. --days Monday,Tuesday"
        ));
    }

    Ok(day.to_string())
}
