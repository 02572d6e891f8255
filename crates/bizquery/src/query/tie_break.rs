//! Two-pass "best of" selection shared by the aggregate queries.

use crate::domain::Business;
use std::sync::Arc;

/// Pick the first record that maximises `primary`, breaking ties by `secondary`.
///
/// 1. Find the maximum `primary` value among records that have one.
/// 2. Keep the records sharing that maximum (the tie-break subset).
/// 3. Find the maximum `secondary` value within the subset.
/// 4. Return the first subset member, in input order, holding that value.
///
/// Records without a metric never take part in that metric's maximum.
/// Returns `None` when no record has a `primary` value, or when no member of
/// the tie-break subset has a `secondary` value.
pub(super) fn first_best<'a, P, S, A, B>(
    records: &'a [Arc<Business>],
    primary: P,
    secondary: S,
) -> Option<&'a Arc<Business>>
where
    P: Fn(&Business) -> Option<A>,
    S: Fn(&Business) -> Option<B>,
    A: PartialOrd + Copy,
    B: PartialOrd + Copy,
{
    let top = running_max(records.iter().filter_map(|record| primary(record)))?;

    let tied: Vec<&Arc<Business>> = records
        .iter()
        .filter(|record| primary(record) == Some(top))
        .collect();

    let top_secondary = running_max(tied.iter().filter_map(|record| secondary(record)))?;

    tied.into_iter()
        .find(|record| secondary(record) == Some(top_secondary))
}

/// Largest value seen, `None` until the first comparable value arrives.
///
/// Values that do not compare equal to themselves (NaN) are skipped, so they
/// can never become the maximum.
fn running_max<T: PartialOrd + Copy>(values: impl Iterator<Item = T>) -> Option<T> {
    values.fold(None, |max, value| {
        if value.partial_cmp(&value).is_none() {
            return max;
        }
        match max {
            Some(current) if current >= value => Some(current),
            _ => Some(value),
        }
    })
}
