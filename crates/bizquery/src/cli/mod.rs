//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `filter`: List businesses matching the filter flags
//! - `best-place`: Show the highest-rated match (ties broken by review count)
//! - `most-reviews`: Show the most-reviewed match (ties broken by rating)
//! - `count`: Count the matches
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format
//! - `--data <PATH>`: Dataset to query (overrides the configured `data-file`)
//! - `--config <PATH>`: Configuration file (defaults to `./bizquery.yaml`)
//!
//! # Example
//!
//! ```bash
//! bizquery --data yelp.jsonl filter --city Charlotte --state NC --min-stars 4
//! bizquery --data yelp.jsonl best-place --category Pizza --days Friday,Saturday
//! bizquery --json most-reviews --ambience romantic
//! ```

mod args;
mod execute;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{AggregateArgs, FilterArgs, FilterCommandArgs};
pub use validators::{validate_day, validate_min_stars, validate_non_empty};

/// Bizquery - fluent queries over business datasets
///
/// Loads a JSONL dataset of businesses and narrows it down with chained
/// filters on location, rating, category, opening days and ambience.
#[derive(Parser, Debug)]
#[command(name = "bizquery")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// JSONL dataset to query
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List matching businesses
    ///
    /// Shows businesses in dataset order, up to the display limit.
    Filter(FilterCommandArgs),

    /// Show the best place among the matches
    ///
    /// Picks the highest star rating; among equally rated businesses, the one
    /// with the most reviews; on a full tie, the first in dataset order.
    BestPlace(AggregateArgs),

    /// Show the most-reviewed business among the matches
    ///
    /// Picks the highest review count; among equally reviewed businesses, the
    /// best rated; on a full tie, the first in dataset order.
    MostReviews(AggregateArgs),

    /// Count the matches
    Count(AggregateArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or dataset cannot be loaded, or
    /// if writing the output fails.
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let Some(command) = &self.command else {
            println!("Bizquery business dataset queries");
            println!("Use --help for more information");
            return Ok(());
        };

        let working_dir = std::env::current_dir()?;
        let app = App::load(self.data.as_deref(), self.config.as_deref(), &working_dir).await?;

        if !app.warnings().is_empty() {
            tracing::warn!(
                skipped = app.warnings().len(),
                path = %app.data_file().display(),
                "Some dataset lines were skipped"
            );
        }

        match command {
            Commands::Filter(args) => execute::execute_filter(&app, args, output_mode),
            Commands::BestPlace(args) => execute::execute_best_place(&app, args, output_mode),
            Commands::MostReviews(args) => execute::execute_most_reviews(&app, args, output_mode),
            Commands::Count(args) => execute::execute_count(&app, args, output_mode),
        }
    }
}
