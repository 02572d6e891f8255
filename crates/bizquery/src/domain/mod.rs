//! Domain types for business records.
//!
//! Field names follow the Yelp open dataset so records deserialize straight
//! from its JSONL files. Everything except the id and the name is optional:
//! a missing field means "unknown", and unknown values never satisfy a
//! filter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a business.
///
/// Ids are opaque and not required to be unique within a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessId(pub String);

impl BusinessId {
    /// Create a new business ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BusinessId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BusinessId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single business entry in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Identifier of the business
    pub business_id: BusinessId,

    /// Display name
    pub name: String,

    /// City the business is located in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State (or province) the business is located in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Average star rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<f64>,

    /// Number of reviews
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u64>,

    /// Category tags, in dataset order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    /// Opening hours keyed by day name ("Monday", ...).
    ///
    /// A key being present means the business opens that day; the time range
    /// value is free-form and never inspected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<BTreeMap<String, String>>,

    /// Nested attribute flags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

/// Attribute section of a business record.
///
/// Only `Ambience` is modelled; the remaining attributes are kept as raw JSON
/// so that records round-trip without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    /// Ambience flags keyed by ambience name.
    ///
    /// Values are kept as raw JSON: real datasets hold `null` and other
    /// non-boolean flags, which must not make the whole record unreadable.
    #[serde(
        rename = "Ambience",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ambience: Option<BTreeMap<String, serde_json::Value>>,

    /// Any other attributes, untouched
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

impl Business {
    /// Create a business with only an id and a name; every optional field is
    /// absent.
    pub fn new(business_id: impl Into<BusinessId>, name: impl Into<String>) -> Self {
        Self {
            business_id: business_id.into(),
            name: name.into(),
            city: None,
            state: None,
            stars: None,
            review_count: None,
            categories: None,
            hours: None,
            attributes: None,
        }
    }

    /// Set the city and state
    #[must_use]
    pub fn with_location(mut self, city: impl Into<String>, state: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self.state = Some(state.into());
        self
    }

    /// Set the star rating
    #[must_use]
    pub fn with_stars(mut self, stars: f64) -> Self {
        self.stars = Some(stars);
        self
    }

    /// Set the review count
    #[must_use]
    pub fn with_review_count(mut self, review_count: u64) -> Self {
        self.review_count = Some(review_count);
        self
    }

    /// Set the category tags
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Set the opening hours from `(day, range)` pairs
    #[must_use]
    pub fn with_hours<I, D, R>(mut self, hours: I) -> Self
    where
        I: IntoIterator<Item = (D, R)>,
        D: Into<String>,
        R: Into<String>,
    {
        self.hours = Some(
            hours
                .into_iter()
                .map(|(day, range)| (day.into(), range.into()))
                .collect(),
        );
        self
    }

    /// Set a single ambience flag, creating the attribute layers as needed
    #[must_use]
    pub fn with_ambience(mut self, name: impl Into<String>, flag: bool) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::default)
            .ambience
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), serde_json::Value::Bool(flag));
        self
    }

    /// Whether the business is in exactly this city and state.
    ///
    /// Comparison is case-sensitive.
    #[must_use]
    pub fn is_located_in(&self, city: &str, state: &str) -> bool {
        self.city.as_deref() == Some(city) && self.state.as_deref() == Some(state)
    }

    /// Whether the business has a rating of at least `threshold`
    #[must_use]
    pub fn has_stars_at_least(&self, threshold: f64) -> bool {
        self.stars.is_some_and(|stars| stars >= threshold)
    }

    /// Whether the category tags contain `category` exactly
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories
            .as_ref()
            .is_some_and(|categories| categories.iter().any(|c| c == category))
    }

    /// Whether the business lists hours for every one of `days`.
    ///
    /// An empty `days` is satisfied by any hours map, even an empty one, but
    /// never by a business without hours.
    #[must_use]
    pub fn is_open_on_all<S: AsRef<str>>(&self, days: &[S]) -> bool {
        self.hours
            .as_ref()
            .is_some_and(|hours| days.iter().all(|day| hours.contains_key(day.as_ref())))
    }

    /// Looks up `attributes.Ambience.<name>` and reports whether it is truthy.
    ///
    /// Returns `None` as soon as any layer is missing. A present flag is
    /// truthy unless it is `false`, `null`, zero or an empty string.
    #[must_use]
    pub fn ambience(&self, name: &str) -> Option<bool> {
        let attributes = self.attributes.as_ref()?;
        let ambience = attributes.ambience.as_ref()?;
        ambience.get(name).map(is_truthy)
    }
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}
