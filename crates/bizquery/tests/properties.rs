//! Property-based tests for query chains.
//!
//! Filters must always produce an order-preserving subsequence of their input,
//! be idempotent and commute with each other. Aggregates must pick a record
//! that no other record beats.

use bizquery::domain::Business;
use bizquery::query::QueryChain;
use proptest::prelude::*;
use std::sync::Arc;

const CITIES: &[(&str, &str)] = &[
    ("Charlotte", "NC"),
    ("Phoenix", "AZ"),
    ("Boston", "MA"),
    ("Amherst", "MA"),
];
const CATEGORIES: &[&str] = &["Tornado", "Macma", "Tsunami", "Food"];
const DAYS: &[&str] = &["Monday", "Tuesday", "Thursday", "Saturday"];

// Ratings on a half-star grid so ties are common
fn stars() -> impl Strategy<Value = Option<f64>> {
    prop::option::of((0u8..=10).prop_map(|half| f64::from(half) / 2.0))
}

fn review_count() -> impl Strategy<Value = Option<u64>> {
    prop::option::of(0u64..5)
}

fn arb_business() -> impl Strategy<Value = Business> {
    (
        0..1000u32,
        prop::option::of(0..CITIES.len()),
        stars(),
        review_count(),
        prop::collection::vec(0..CATEGORIES.len(), 0..3),
        prop::option::of(prop::collection::vec(0..DAYS.len(), 0..4)),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(id, city, stars, reviews, categories, days, ambience)| {
            let mut business = Business::new(id.to_string(), format!("Business {id}"));
            if let Some(index) = city {
                let (city, state) = CITIES[index];
                business = business.with_location(city, state);
            }
            if let Some(stars) = stars {
                business = business.with_stars(stars);
            }
            if let Some(reviews) = reviews {
                business = business.with_review_count(reviews);
            }
            if !categories.is_empty() {
                business = business.with_categories(categories.into_iter().map(|i| CATEGORIES[i]));
            }
            if let Some(days) = days {
                business = business.with_hours(days.into_iter().map(|i| (DAYS[i], "8:0-18:0")));
            }
            if let Some(flag) = ambience {
                business = business.with_ambience("casual", flag);
            }
            business
        })
}

fn arb_chain() -> impl Strategy<Value = QueryChain> {
    prop::collection::vec(arb_business(), 0..20).prop_map(QueryChain::new)
}

/// Whether every record of `sub` appears in `chain` in the same relative order
fn is_subsequence(sub: &QueryChain, chain: &QueryChain) -> bool {
    let mut remaining = chain.data().iter();
    sub.data()
        .iter()
        .all(|record| remaining.any(|candidate| Arc::ptr_eq(candidate, record)))
}

fn same_records(a: &QueryChain, b: &QueryChain) -> bool {
    a.len() == b.len()
        && a.data()
            .iter()
            .zip(b.data())
            .all(|(x, y)| Arc::ptr_eq(x, y))
}

proptest! {
    /// Property: Every filter yields an order-preserving subsequence
    #[test]
    fn prop_filters_yield_subsequences(chain in arb_chain(), threshold in 0.0f64..5.0) {
        let steps = [
            chain.from_city_in_state("Charlotte", "NC"),
            chain.has_stars_geq(threshold),
            chain.in_category("Tornado"),
            chain.has_hours_on_days(&["Monday", "Thursday"]),
            chain.has_ambience("casual"),
        ];

        for step in &steps {
            prop_assert!(is_subsequence(step, &chain));
        }
    }

    /// Property: Applying a filter twice equals applying it once
    #[test]
    fn prop_filters_are_idempotent(chain in arb_chain(), threshold in 0.0f64..5.0) {
        let once = chain.has_stars_geq(threshold);
        prop_assert!(same_records(&once, &once.has_stars_geq(threshold)));

        let once = chain.has_hours_on_days(&["Tuesday"]);
        prop_assert!(same_records(&once, &once.has_hours_on_days(&["Tuesday"])));
    }

    /// Property: Filter order does not change the result
    #[test]
    fn prop_filters_commute(chain in arb_chain(), threshold in 0.0f64..5.0) {
        let a = chain.in_category("Food").has_stars_geq(threshold).has_ambience("casual");
        let b = chain.has_ambience("casual").has_stars_geq(threshold).in_category("Food");
        prop_assert!(same_records(&a, &b));

        let a = chain.from_city_in_state("Charlotte", "NC").has_stars_geq(threshold);
        let b = chain.has_stars_geq(threshold).from_city_in_state("Charlotte", "NC");
        prop_assert!(same_records(&a, &b));

        let a = chain.from_city_in_state("Boston", "MA").has_hours_on_days(&["Monday"]);
        let b = chain.has_hours_on_days(&["Monday"]).from_city_in_state("Boston", "MA");
        prop_assert!(same_records(&a, &b));
    }

    /// Property: Filtering never changes the receiver
    #[test]
    fn prop_receiver_is_unchanged(chain in arb_chain()) {
        let before = chain.clone();
        let _ = chain.in_category("Macma").best_place();
        prop_assert!(same_records(&before, &chain));
    }

    /// Property: No record beats the best place
    #[test]
    fn prop_best_place_is_unbeaten(chain in arb_chain()) {
        if let Some(best) = chain.best_place() {
            let stars = best.stars.unwrap_or_default();
            let reviews = best.review_count.unwrap_or_default();

            let first = chain
                .data()
                .iter()
                .position(|record| Arc::ptr_eq(record, &best))
                .unwrap_or_default();

            for (index, record) in chain.data().iter().enumerate() {
                let Some(other) = record.stars else { continue };
                prop_assert!(other <= stars);
                if other < stars {
                    continue;
                }
                if let Some(other_reviews) = record.review_count {
                    prop_assert!(other_reviews <= reviews);
                    if other_reviews == reviews {
                        prop_assert!(index >= first);
                    }
                }
            }
        }
    }

    /// Property: No record beats the most-reviewed business
    #[test]
    fn prop_most_reviews_is_unbeaten(chain in arb_chain()) {
        if let Some(best) = chain.most_reviews() {
            let reviews = best.review_count.unwrap_or_default();
            let stars = best.stars.unwrap_or_default();

            for record in chain.data() {
                let Some(other) = record.review_count else { continue };
                prop_assert!(other <= reviews);
                if other == reviews {
                    if let Some(other_stars) = record.stars {
                        prop_assert!(other_stars <= stars);
                    }
                }
            }
        }
    }

    /// Property: A best place exists iff a top-rated record has a review count
    #[test]
    fn prop_best_place_exists_when_top_rated_is_reviewed(chain in arb_chain()) {
        let top_stars = chain.iter().filter_map(|b| b.stars).fold(f64::NEG_INFINITY, f64::max);
        let top = chain.has_stars_geq(top_stars);

        prop_assert_eq!(
            chain.best_place().is_some(),
            top.iter().any(|b| b.review_count.is_some())
        );
    }
}
