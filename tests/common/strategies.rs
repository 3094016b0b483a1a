//! Proptest strategies for shelves, pages and schedules.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use curator_core::models::{
    Domain, FilterRule, PersonalizationAlgorithm, SelectionStrategy, ShelfConfig,
};
use proptest::prelude::*;
use proptest::sample::select;

/// Strategy for generating item ids
pub fn item_id_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

/// Strategy for generating sequences of distinct ids
pub fn unique_ids_strategy(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(item_id_strategy(), 0..=max_len)
        .prop_map(|ids| ids.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Non-empty id sequence plus two indices into it
pub fn ids_with_pair_strategy() -> impl Strategy<Value = (Vec<String>, usize, usize)> {
    prop::collection::hash_set(item_id_strategy(), 1..=20)
        .prop_map(|ids| ids.into_iter().collect::<Vec<_>>())
        .prop_flat_map(|ids| {
            let len = ids.len();
            (Just(ids), 0..len, 0..len)
        })
}

pub fn domain_strategy() -> impl Strategy<Value = Domain> {
    select(Domain::ALL.to_vec())
}

pub fn selection_strategy_strategy() -> impl Strategy<Value = SelectionStrategy> {
    prop_oneof![
        Just(SelectionStrategy::Manual),
        Just(SelectionStrategy::Automatic),
        Just(SelectionStrategy::Personalized),
    ]
}

pub fn filter_rule_strategy() -> impl Strategy<Value = FilterRule> {
    prop_oneof![
        Just(FilterRule::Random),
        Just(FilterRule::Recent),
        Just(FilterRule::Alphabetical),
        Just(FilterRule::Top),
    ]
}

pub fn algorithm_strategy() -> impl Strategy<Value = PersonalizationAlgorithm> {
    prop_oneof![
        Just(PersonalizationAlgorithm::BecauseYouWatched),
        Just(PersonalizationAlgorithm::SuggestionsForYou),
    ]
}

/// Shelf configs with every parameter independently present or absent,
/// including stale parameters an older editor might have left behind
pub fn shelf_config_strategy() -> impl Strategy<Value = ShelfConfig> {
    (
        selection_strategy_strategy(),
        domain_strategy(),
        unique_ids_strategy(8),
        prop::option::of(domain_strategy()),
        prop::option::of(filter_rule_strategy()),
        prop::option::of(("[a-z]{1,8}", "[a-z]{1,8}")),
        prop::option::of(0u32..150),
        prop::option::of(algorithm_strategy()),
    )
        .prop_map(
            |(strategy, domain, items, filter_domain, filter_rule, field, limit, algorithm)| {
                let mut config = ShelfConfig::manual("shelf", domain).with_selected_items(items);
                config.strategy = strategy;
                config.filter_domain = filter_domain;
                config.filter_rule = filter_rule;
                if let Some((field, value)) = field {
                    config = config.with_field_filter(field, value);
                }
                config.limit = limit;
                config.algorithm = algorithm;
                config
            },
        )
}

/// Optional schedule date within a few days of `now`
pub fn schedule_strategy(now: DateTime<Utc>) -> impl Strategy<Value = Option<DateTime<Utc>>> {
    prop::option::of(
        (-7 * 24 * 60i64..7 * 24 * 60).prop_map(move |minutes| now + Duration::minutes(minutes)),
    )
}
