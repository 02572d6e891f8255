//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Reference: cyan    (business IDs)
//!   - Rating:    yellow  (star ratings)
//!   - Emphasis:  bold    (business names, headers)
//!   - Muted:     dimmed  (locations, review counts, missing values)

use colored::Colorize;

use super::OutputConfig;

/// Bold text, used for business names.
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Cyan text, used for business IDs.
pub(crate) fn cyan(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Dimmed text for secondary details.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Format a star rating, yellow when present and dimmed when unknown.
pub(crate) fn colorize_stars(stars: Option<f64>, config: &OutputConfig) -> String {
    match stars {
        Some(stars) => {
            let text = format!("{stars:.1}★");
            if config.use_colors {
                text.yellow().to_string()
            } else {
                text
            }
        }
        None => dimmed("unrated", config),
    }
}
