//! JSONL reading operations.
//!
//! [`JsonlReader`] reads one JSON document per line from any async source,
//! tracking line numbers so problems can be pinned to a place in the file.
//! It offers a strict mode ([`JsonlReader::read_line`]) that fails on the
//! first bad line and a resilient mode ([`JsonlReader::stream_resilient`])
//! that skips bad lines and reports them as warnings.

use crate::error::{Error, Result};
use crate::warning::{Warning, WarningCollector};
use futures::stream::{self, Stream};
use serde::de::DeserializeOwned;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Async reader for JSONL (JSON Lines) data.
///
/// Blank and whitespace-only lines are ignored in both reading modes; they
/// still count towards line numbers.
///
/// # Examples
///
/// ```no_run
/// use bizquery_jsonl::reader::JsonlReader;
/// use tokio::fs::File;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let file = File::open("businesses.jsonl").await?;
/// let mut reader = JsonlReader::new(file);
/// while let Some(record) = reader.read_line::<serde_json::Value>().await? {
///     println!("{record}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct JsonlReader<R> {
    reader: BufReader<R>,
    /// 1-based number of the last line read, 0 before any read.
    line_number: usize,
    buffer: Vec<u8>,
}

impl<R: AsyncRead + Unpin> JsonlReader<R> {
    /// Creates a new `JsonlReader` wrapping the given async reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    /// Creates a new `JsonlReader` with a custom buffer capacity in bytes.
    ///
    /// Useful for datasets with long lines, such as records carrying large
    /// attribute maps.
    #[must_use]
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    /// Returns the 1-based number of the last line read, or 0 before any
    /// line has been read.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads and deserializes the next non-blank line.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the underlying reader fails
    /// - [`Error::InvalidFormat`] if the line is not UTF-8 or not valid JSON
    ///   for `T`
    pub async fn read_line<T: DeserializeOwned>(&mut self) -> Result<Option<T>> {
        let Some(line_number) = self.next_content_line().await? else {
            return Ok(None);
        };

        let invalid = |message: String| Error::InvalidFormat {
            line_number,
            message,
        };
        let line = std::str::from_utf8(&self.buffer).map_err(|e| invalid(e.to_string()))?;

        serde_json::from_str(line.trim())
            .map(Some)
            .map_err(|e| invalid(e.to_string()))
    }

    /// Turns the reader into a stream of records that skips bad lines.
    ///
    /// Lines that are not UTF-8, are not JSON objects, or fail to deserialize
    /// into `T` are recorded in the returned [`WarningCollector`] and skipped.
    /// An I/O error from the underlying source is recorded as a warning and
    /// ends the stream.
    ///
    /// The stream is not `Unpin`; pin it before polling.
    pub fn stream_resilient<T: DeserializeOwned>(
        self,
    ) -> (impl Stream<Item = T>, WarningCollector) {
        let warnings = WarningCollector::new();
        let collector = warnings.clone();

        let records = stream::unfold((self, collector), |(mut reader, collector)| async move {
            loop {
                match reader.next_content_line().await {
                    Ok(Some(line_number)) => {
                        match parse_record::<T>(line_number, &reader.buffer) {
                            Ok(record) => return Some((record, (reader, collector))),
                            Err(warning) => collector.add(warning),
                        }
                    }
                    Ok(None) => return None,
                    Err(e) => {
                        collector.add(Warning::SkippedLine {
                            line_number: reader.line_number + 1,
                            reason: format!("read failed, stopping: {e}"),
                        });
                        return None;
                    }
                }
            }
        });

        (records, warnings)
    }

    /// Advances to the next line with non-whitespace content, leaving its raw
    /// bytes in `self.buffer`. Returns its line number, or `None` at end of
    /// input.
    ///
    /// Lines are read as bytes so that invalid UTF-8 stays a problem of that
    /// one line instead of a read error.
    async fn next_content_line(&mut self) -> Result<Option<usize>> {
        loop {
            self.buffer.clear();
            let bytes = self.reader.read_until(b'\n', &mut self.buffer).await?;
            if bytes == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            if !self.buffer.trim_ascii().is_empty() {
                return Ok(Some(self.line_number));
            }
        }
    }
}

fn parse_record<T: DeserializeOwned>(
    line_number: usize,
    line: &[u8],
) -> std::result::Result<T, Warning> {
    let malformed = |error: String| Warning::MalformedJson { line_number, error };

    let line = std::str::from_utf8(line).map_err(|e| malformed(e.to_string()))?;
    let value: serde_json::Value =
        serde_json::from_str(line.trim()).map_err(|e| malformed(e.to_string()))?;

    if !value.is_object() {
        return Err(Warning::SkippedLine {
            line_number,
            reason: format!("expected a JSON object, found {}", json_kind(&value)),
        });
    }

    serde_json::from_value(value).map_err(|e| malformed(e.to_string()))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
