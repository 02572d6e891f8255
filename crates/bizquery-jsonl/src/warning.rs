//! Non-fatal problems found while loading a JSONL dataset.
//!
//! Business datasets are large and rarely pristine. A loader that stops at the
//! first corrupt line is useless for them, so the resilient reading functions
//! skip bad lines and report each one as a [`Warning`] instead. Warnings are
//! accumulated in a [`WarningCollector`] that can be shared with the stream
//! producing records.
//!
//! # Examples
//!
//! ```
//! use bizquery_jsonl::warning::{Warning, WarningCollector};
//!
//! let collector = WarningCollector::new();
//! collector.add(Warning::MalformedJson {
//!     line_number: 3,
//!     error: "expected value".to_string(),
//! });
//!
//! let warnings = collector.into_warnings();
//! assert_eq!(warnings[0].line_number(), 3);
//! ```

use std::sync::{Arc, Mutex};

/// A line that was skipped while loading.
///
/// Every variant carries the 1-based line number of the skipped line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The line was not valid JSON, or did not deserialize into the
    /// requested record type.
    MalformedJson {
        /// The 1-based line number where the error occurred.
        line_number: usize,
        /// The parser's description of the problem.
        error: String,
    },

    /// The line was valid JSON but could not be used as a record, e.g. a
    /// bare array or scalar where an object was expected.
    SkippedLine {
        /// The 1-based line number that was skipped.
        line_number: usize,
        /// Why the line was skipped.
        reason: String,
    },
}

impl Warning {
    /// Returns the line number associated with this warning.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedJson { line_number, .. } | Self::SkippedLine { line_number, .. } => {
                *line_number
            }
        }
    }

    /// Returns a human-readable description of the warning.
    ///
    /// ```
    /// use bizquery_jsonl::warning::Warning;
    ///
    /// let warning = Warning::SkippedLine {
    ///     line_number: 7,
    ///     reason: "not a JSON object".to_string(),
    /// };
    /// assert_eq!(warning.description(), "line 7: skipped: not a JSON object");
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::MalformedJson { line_number, error } => {
                format!("line {line_number}: malformed JSON: {error}")
            }
            Self::SkippedLine {
                line_number,
                reason,
            } => format!("line {line_number}: skipped: {reason}"),
        }
    }

    /// Returns a static identifier for the warning kind, for grouping
    /// warnings without matching on variants.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedJson { .. } => "malformed_json",
            Self::SkippedLine { .. } => "skipped_line",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

impl std::error::Error for Warning {}

/// Shared accumulator of [`Warning`]s.
///
/// Clones share the same underlying list, so one handle can be moved into a
/// record stream while the caller keeps another to inspect the warnings once
/// the stream is drained.
///
/// All methods panic if the internal mutex is poisoned, which only happens if
/// another thread panicked while adding a warning.
#[derive(Debug, Clone, Default)]
pub struct WarningCollector {
    warnings: Arc<Mutex<Vec<Warning>>>,
}

impl WarningCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a warning.
    pub fn add(&self, warning: Warning) {
        tracing::trace!(kind = warning.kind(), line = warning.line_number(), "Collected warning");
        self.warnings
            .lock()
            .expect("warning collector mutex should not be poisoned")
            .push(warning);
    }

    /// Returns the number of warnings collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings
            .lock()
            .expect("warning collector mutex should not be poisoned")
            .len()
    }

    /// Returns `true` if nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the warnings collected so far, in insertion order.
    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings
            .lock()
            .expect("warning collector mutex should not be poisoned")
            .clone()
    }

    /// Discards all collected warnings.
    pub fn clear(&self) {
        self.warnings
            .lock()
            .expect("warning collector mutex should not be poisoned")
            .clear();
    }

    /// Consumes the collector and returns its warnings.
    ///
    /// Moves the list out when this is the last handle, clones it otherwise.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        match Arc::try_unwrap(self.warnings) {
            Ok(mutex) => mutex
                .into_inner()
                .expect("warning collector mutex should not be poisoned"),
            Err(shared) => shared
                .lock()
                .expect("warning collector mutex should not be poisoned")
                .clone(),
        }
    }
}
