//! Loading business datasets from JSONL files.
//!
//! This is the bridge between the file on disk and the in-memory
//! [`QueryChain`]: it reads the file resiliently, logs every skipped line and
//! hands back a seed chain together with the warnings.

use crate::domain::Business;
use crate::error::Result;
use crate::query::QueryChain;
use bizquery_jsonl::{Warning, read_jsonl_resilient};
use std::path::Path;

/// Load a JSONL dataset into a seed [`QueryChain`].
///
/// Each line must hold one business record. Malformed lines are skipped and
/// returned as warnings; they are also logged at WARN level. Records keep
/// their file order.
///
/// # Errors
///
/// Returns [`Error::Dataset`](crate::error::Error::Dataset) if the file
/// cannot be opened or read.
///
/// # Examples
///
/// ```no_run
/// # use bizquery::loader::load_businesses;
/// # use std::path::Path;
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> anyhow::Result<()> {
/// let (chain, warnings) = load_businesses(Path::new("yelp.jsonl")).await?;
/// println!("{} businesses, {} lines skipped", chain.len(), warnings.len());
///
/// let best = chain.from_city_in_state("Charlotte", "NC").best_place();
/// # Ok(())
/// # }
/// ```
pub async fn load_businesses(path: &Path) -> Result<(QueryChain, Vec<Warning>)> {
    let (businesses, warnings) = read_jsonl_resilient::<Business, _>(path).await?;

    for warning in &warnings {
        tracing::warn!(
            path = %path.display(),
            line = warning.line_number(),
            kind = warning.kind(),
            "Skipped dataset line: {warning}"
        );
    }

    tracing::info!(
        path = %path.display(),
        businesses = businesses.len(),
        skipped = warnings.len(),
        "Loaded dataset"
    );

    Ok((QueryChain::new(businesses), warnings))
}
