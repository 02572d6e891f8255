//! Fluent, chainable queries over business records.
//!
//! A [`QueryChain`] holds an ordered snapshot of records. Every filter returns
//! a new chain over the matching records in their original relative order and
//! leaves the receiver untouched, so intermediate steps can be kept and reused:
//!
//! ```
//! use bizquery::domain::Business;
//! use bizquery::query::QueryChain;
//!
//! let chain = QueryChain::new(vec![
//!     Business::new("a", "Applebee's")
//!         .with_location("Charlotte", "NC")
//!         .with_stars(4.0)
//!         .with_review_count(6),
//!     Business::new("b", "China Garden")
//!         .with_location("Charlotte", "NC")
//!         .with_stars(4.0)
//!         .with_review_count(10),
//!     Business::new("c", "Beach Ventures Roofing")
//!         .with_location("Phoenix", "AZ")
//!         .with_stars(3.0),
//! ]);
//!
//! let charlotte = chain.from_city_in_state("Charlotte", "NC");
//! assert_eq!(charlotte.len(), 2);
//! assert_eq!(chain.len(), 3);
//!
//! let best = charlotte.best_place().unwrap();
//! assert_eq!(best.name, "China Garden");
//! ```
//!
//! Records are shared between chains through [`Arc`], so deriving a chain
//! copies pointers, never records.

mod tie_break;

use crate::domain::Business;
use std::sync::Arc;

/// An immutable, ordered snapshot of business records.
#[derive(Debug, Clone, Default)]
pub struct QueryChain {
    records: Vec<Arc<Business>>,
}

impl QueryChain {
    /// Create a chain over `records`, keeping their order and any duplicates.
    pub fn new(records: impl IntoIterator<Item = Business>) -> Self {
        records.into_iter().collect()
    }

    /// The current snapshot, in order.
    #[must_use]
    pub fn data(&self) -> &[Arc<Business>] {
        &self.records
    }

    /// Number of records in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in order
    pub fn iter(&self) -> impl Iterator<Item = &Business> {
        self.records.iter().map(|record| &**record)
    }

    /// Consume the chain, returning its records
    #[must_use]
    pub fn into_records(self) -> Vec<Arc<Business>> {
        self.records
    }

    /// Keep the records satisfying `predicate`.
    ///
    /// This is the building block of the named filters and accepts any
    /// caller-defined condition.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&Business) -> bool,
    {
        self.retain("filter", predicate)
    }

    /// Keep businesses located in exactly `city` and `state`.
    ///
    /// Matching is case-sensitive; a business missing either field never
    /// matches.
    #[must_use]
    pub fn from_city_in_state(&self, city: &str, state: &str) -> Self {
        self.retain("from_city_in_state", |b| b.is_located_in(city, state))
    }

    /// Keep businesses rated `threshold` stars or more.
    ///
    /// Unrated businesses never match, whatever the threshold.
    #[must_use]
    pub fn has_stars_geq(&self, threshold: f64) -> Self {
        self.retain("has_stars_geq", |b| b.has_stars_at_least(threshold))
    }

    /// Keep businesses tagged with `category` (exact match).
    #[must_use]
    pub fn in_category(&self, category: &str) -> Self {
        self.retain("in_category", |b| b.has_category(category))
    }

    /// Keep businesses that list hours for every one of `days`.
    ///
    /// The order of `days` does not matter. An empty `days` keeps every
    /// business that has an hours map at all.
    #[must_use]
    pub fn has_hours_on_days<S: AsRef<str>>(&self, days: &[S]) -> Self {
        self.retain("has_hours_on_days", |b| b.is_open_on_all(days))
    }

    /// Keep businesses whose `Ambience` attribute sets `name` to `true`.
    ///
    /// A flag that is present but `false` does not match.
    #[must_use]
    pub fn has_ambience(&self, name: &str) -> Self {
        self.retain("has_ambience", |b| b.ambience(name) == Some(true))
    }

    /// The highest-rated business, ties broken by review count.
    ///
    /// Among the businesses sharing the maximum star rating, returns the first
    /// (in snapshot order) with the maximum review count. Returns `None` when
    /// no business is rated, or when none of the top-rated ones has a review
    /// count.
    #[must_use]
    pub fn best_place(&self) -> Option<Arc<Business>> {
        let best = tie_break::first_best(&self.records, |b| b.stars, |b| b.review_count);
        tracing::debug!(
            candidates = self.records.len(),
            winner = ?best.map(|b| &b.business_id),
            "best_place"
        );
        best.cloned()
    }

    /// The most-reviewed business, ties broken by star rating.
    ///
    /// Among the businesses sharing the maximum review count, returns the
    /// first (in snapshot order) with the maximum star rating. Returns `None`
    /// when no business has a review count, or when none of the most-reviewed
    /// ones is rated.
    #[must_use]
    pub fn most_reviews(&self) -> Option<Arc<Business>> {
        let best = tie_break::first_best(&self.records, |b| b.review_count, |b| b.stars);
        tracing::debug!(
            candidates = self.records.len(),
            winner = ?best.map(|b| &b.business_id),
            "most_reviews"
        );
        best.cloned()
    }

    fn retain<P>(&self, step: &'static str, predicate: P) -> Self
    where
        P: Fn(&Business) -> bool,
    {
        let records: Vec<Arc<Business>> = self
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect();

        tracing::trace!(
            step,
            input = self.records.len(),
            output = records.len(),
            "Filtered chain"
        );

        Self { records }
    }
}

impl From<Vec<Business>> for QueryChain {
    fn from(records: Vec<Business>) -> Self {
        Self::new(records)
    }
}

impl From<Vec<Arc<Business>>> for QueryChain {
    fn from(records: Vec<Arc<Business>>) -> Self {
        Self { records }
    }
}

impl FromIterator<Business> for QueryChain {
    fn from_iter<I: IntoIterator<Item = Business>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a QueryChain {
    type Item = &'a Arc<Business>;
    type IntoIter = std::slice::Iter<'a, Arc<Business>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
