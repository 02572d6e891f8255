//! Command execution functions.

use anyhow::Result;

use super::args::{AggregateArgs, FilterCommandArgs};
use crate::app::App;
use crate::output::{self, OutputMode};

/// Execute the filter command
pub fn execute_filter(app: &App, args: &FilterCommandArgs, output_mode: OutputMode) -> Result<()> {
    let matches = args.filters.apply(app.chain());
    let limit = args.limit.unwrap_or(app.config().limit);

    tracing::debug!(matches = matches.len(), limit, "Executing filter");

    output::print_businesses(matches.data(), limit, output_mode)?;
    Ok(())
}

/// Execute the best-place command
pub fn execute_best_place(app: &App, args: &AggregateArgs, output_mode: OutputMode) -> Result<()> {
    let best = args.filters.apply(app.chain()).best_place();
    output::print_business(best.as_deref(), output_mode)?;
    Ok(())
}

/// Execute the most-reviews command
pub fn execute_most_reviews(
    app: &App,
    args: &AggregateArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let best = args.filters.apply(app.chain()).most_reviews();
    output::print_business(best.as_deref(), output_mode)?;
    Ok(())
}

/// Execute the count command
pub fn execute_count(app: &App, args: &AggregateArgs, output_mode: OutputMode) -> Result<()> {
    let matches = args.filters.apply(app.chain());
    output::print_count(matches.len(), output_mode)?;
    Ok(())
}
