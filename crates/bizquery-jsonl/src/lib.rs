//! Resilient JSON Lines loading for business datasets.
//!
//! Business datasets are distributed as JSONL files with one record per line.
//! This crate reads such files into typed records, skipping corrupt lines
//! and reporting them as [`Warning`]s rather than failing the whole load.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod reader;
pub mod warning;

pub use error::{Error, Result};
pub use reader::JsonlReader;
pub use warning::{Warning, WarningCollector};

use futures::StreamExt;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads every valid record from a JSONL file.
///
/// Blank lines are ignored. Lines that are malformed or that do not
/// deserialize into `T` are skipped and returned as warnings. Records keep
/// their file order.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened.
///
/// # Examples
///
/// ```no_run
/// use bizquery_jsonl::read_jsonl_resilient;
///
/// # async fn example() -> bizquery_jsonl::Result<()> {
/// let (records, warnings) =
///     read_jsonl_resilient::<serde_json::Value, _>("businesses.jsonl").await?;
/// for warning in &warnings {
///     eprintln!("{warning}");
/// }
/// println!("{} records", records.len());
/// # Ok(())
/// # }
/// ```
pub async fn read_jsonl_resilient<T, P>(path: P) -> Result<(Vec<T>, Vec<Warning>)>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = tokio::fs::File::open(path).await?;

    let (stream, warnings) = JsonlReader::new(file).stream_resilient::<T>();
    let records: Vec<T> = stream.collect().await;
    let warnings = warnings.into_warnings();

    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        warnings = warnings.len(),
        "Read JSONL file"
    );

    Ok((records, warnings))
}
