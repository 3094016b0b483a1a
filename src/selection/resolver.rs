//! Strategy switching, domain switching and resolving a shelf to content.
//!
//! The two change handlers keep the stale-parameter invariant: after either
//! one, a [`ShelfConfig`] carries only the parameters of its active
//! strategy.

use crate::constants::events;
use crate::error::Result;
use crate::log_shelf;
use crate::lookup::ContentLookup;
use crate::models::{ContentReference, Domain, SelectionStrategy, ShelfConfig};
use crate::validation::ShelfValidator;

/// Switch `config` to `strategy`, clearing parameters that no longer apply.
///
/// `limit` is shared by Automatic and Personalized and only dropped when
/// switching to Manual. Banner falls back to Content outside Manual.
pub fn on_strategy_change(mut config: ShelfConfig, strategy: SelectionStrategy) -> ShelfConfig {
    let previous = config.strategy;
    config.strategy = strategy;

    if strategy != SelectionStrategy::Manual {
        config.selected_items.clear();
        if config.domain.is_manual_only() {
            config.domain = Domain::Content;
        }
    }
    if strategy != SelectionStrategy::Automatic {
        config.filter_domain = None;
        config.filter_rule = None;
        config.filter_field = None;
        config.filter_value = None;
    }
    if strategy != SelectionStrategy::Personalized {
        config.algorithm = None;
    }
    if strategy == SelectionStrategy::Manual {
        config.limit = None;
    }

    log_shelf!(
        debug,
        events::SHELF_STRATEGY_CHANGED,
        shelf_id: config.id,
        from: previous,
        to: strategy,
    );
    config
}

/// Change the manual domain. Selected ids belong to the old domain's id
/// space, so a manual shelf always starts over with an empty selection.
pub fn on_domain_change(mut config: ShelfConfig, domain: Domain) -> ShelfConfig {
    let previous = config.domain;
    config.domain = domain;

    if config.is_manual() {
        config.selected_items.clear();
    }

    log_shelf!(
        debug,
        events::SHELF_DOMAIN_CHANGED,
        shelf_id: config.id,
        from: previous,
        to: domain,
        cleared: config.is_manual(),
    );
    config
}

/// Resolve `config` to the ordered references it renders, using the default
/// limit bounds.
pub fn resolve<L: ContentLookup + ?Sized>(
    config: &ShelfConfig,
    lookup: &L,
) -> Result<Vec<ContentReference>> {
    resolve_with(&ShelfValidator::default(), config, lookup)
}

/// Resolve with explicit validator bounds.
///
/// Fails only when the active strategy is missing a parameter it needs or
/// the lookup itself fails; ids that no longer resolve are dropped.
pub fn resolve_with<L: ContentLookup + ?Sized>(
    validator: &ShelfValidator,
    config: &ShelfConfig,
    lookup: &L,
) -> Result<Vec<ContentReference>> {
    let plan = validator.plan(config)?;
    let items = plan.execute(&config.id, lookup)?;

    log_shelf!(
        debug,
        events::SHELF_RESOLVED,
        shelf_id: config.id,
        strategy: plan.strategy(),
        count: items.len(),
    );
    Ok(items)
}
