//! Field-level validation for shelf and page configurations.
//!
//! Validation never aborts: every problem becomes a [`FieldError`] keyed by
//! its wire field name, and the collected [`ValidationReport`] only blocks
//! the save action. [`ShelfValidator::plan`] runs the subset of checks the
//! active strategy needs in order to resolve.

use crate::config::LimitConfig;
use crate::constants::fields;
use crate::lookup::FilterQuery;
use crate::models::{PageConfig, SelectionStrategy, ShelfConfig};
use crate::ordering::Ordered;
use crate::selection::SelectionPlan;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The active strategy needs this field
    Required,
    OutOfRange { min: u32, max: u32, actual: u32 },
    /// Value not permitted in this context
    NotAllowed { reason: String },
    /// Parameter belongs to a strategy other than the active one
    Stale,
    Duplicate { value: String },
    /// Position field does not match the element's index
    OutOfSequence { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: &'static str, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FieldErrorKind::Required => write!(f, "{} is required", self.field),
            FieldErrorKind::OutOfRange { min, max, actual } => write!(
                f,
                "{} must be between {min} and {max}, got {actual}",
                self.field
            ),
            FieldErrorKind::NotAllowed { reason } => {
                write!(f, "{} is not allowed: {reason}", self.field)
            }
            FieldErrorKind::Stale => write!(
                f,
                "{} does not apply to the selected strategy",
                self.field
            ),
            FieldErrorKind::Duplicate { value } => {
                write!(f, "{} contains duplicate value {value}", self.field)
            }
            FieldErrorKind::OutOfSequence { expected, actual } => write!(
                f,
                "{} expected {expected} at this position, found {actual}",
                self.field
            ),
        }
    }
}

/// Collected field errors for one configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, kind: FieldErrorKind) {
        self.errors.push(FieldError::new(field, kind));
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Errors reported against one wire field
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |error| error.field == field)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.for_field(field).next().is_some()
    }

    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "no errors");
        }
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Shelf configuration checks against configured limit bounds
#[derive(Debug, Clone, Copy, Default)]
pub struct ShelfValidator {
    limits: LimitConfig,
}

impl ShelfValidator {
    pub fn new(limits: LimitConfig) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> LimitConfig {
        self.limits
    }

    /// Every check that gates saving a shelf
    pub fn validate(&self, config: &ShelfConfig) -> ValidationReport {
        let mut report = ValidationReport::new();

        if config.id.trim().is_empty() {
            report.push(fields::ID, FieldErrorKind::Required);
        }
        self.check_active_parameters(config, &mut report);

        if config.is_manual() {
            if config.selected_items.is_empty() {
                report.push(fields::SELECTED_ITEMS, FieldErrorKind::Required);
            }
            check_unique_items(config, &mut report);
        }
        check_stale_parameters(config, &mut report);

        report
    }

    /// Build the typed selection the active strategy describes.
    ///
    /// Stale parameters and duplicate manual ids do not block resolving;
    /// they are reported by [`validate`](Self::validate) only.
    pub fn plan(&self, config: &ShelfConfig) -> Result<SelectionPlan, ValidationReport> {
        let mut report = ValidationReport::new();
        self.check_active_parameters(config, &mut report);
        if !report.is_valid() {
            return Err(report);
        }

        match config.strategy {
            SelectionStrategy::Manual => Ok(SelectionPlan::Manual {
                domain: config.domain,
                ids: config.selected_items.clone(),
            }),
            SelectionStrategy::Automatic => {
                match (config.filter_domain, config.filter_rule, config.limit) {
                    (Some(domain), Some(rule), Some(limit)) => {
                        Ok(SelectionPlan::Automatic(FilterQuery {
                            domain,
                            rule,
                            field: config.filter_field.clone(),
                            value: config.filter_value.clone(),
                            limit,
                        }))
                    }
                    _ => Err(report),
                }
            }
            SelectionStrategy::Personalized => match (config.algorithm, config.limit) {
                (Some(algorithm), Some(limit)) => {
                    Ok(SelectionPlan::Personalized { algorithm, limit })
                }
                _ => Err(report),
            },
        }
    }

    fn check_active_parameters(&self, config: &ShelfConfig, report: &mut ValidationReport) {
        if !config.is_manual() && config.domain.is_manual_only() {
            report.push(
                fields::DOMAIN,
                FieldErrorKind::NotAllowed {
                    reason: format!("{} is only available to manual shelves", config.domain),
                },
            );
        }

        match config.strategy {
            SelectionStrategy::Manual => {}
            SelectionStrategy::Automatic => {
                match config.filter_domain {
                    None => report.push(fields::FILTER_DOMAIN, FieldErrorKind::Required),
                    Some(domain) if domain.is_manual_only() => report.push(
                        fields::FILTER_DOMAIN,
                        FieldErrorKind::NotAllowed {
                            reason: format!("{domain} is only available to manual shelves"),
                        },
                    ),
                    Some(_) => {}
                }
                if config.filter_rule.is_none() {
                    report.push(fields::FILTER_RULE, FieldErrorKind::Required);
                }
                if config.filter_value.is_some() && config.filter_field.is_none() {
                    report.push(fields::FILTER_FIELD, FieldErrorKind::Required);
                }
                self.check_limit(config.limit, report);
            }
            SelectionStrategy::Personalized => {
                if config.algorithm.is_none() {
                    report.push(fields::ALGORITHM, FieldErrorKind::Required);
                }
                self.check_limit(config.limit, report);
            }
        }
    }

    fn check_limit(&self, limit: Option<u32>, report: &mut ValidationReport) {
        match limit {
            None => report.push(fields::LIMIT, FieldErrorKind::Required),
            Some(actual) if !self.limits.contains(actual) => report.push(
                fields::LIMIT,
                FieldErrorKind::OutOfRange {
                    min: self.limits.min,
                    max: self.limits.max,
                    actual,
                },
            ),
            Some(_) => {}
        }
    }
}

fn check_unique_items(config: &ShelfConfig, report: &mut ValidationReport) {
    let mut seen = HashSet::new();
    for id in &config.selected_items {
        if !seen.insert(id.as_str()) {
            report.push(
                fields::SELECTED_ITEMS,
                FieldErrorKind::Duplicate { value: id.clone() },
            );
        }
    }
}

fn check_stale_parameters(config: &ShelfConfig, report: &mut ValidationReport) {
    let strategy = config.strategy;
    let mut stale = |present: bool, field: &'static str| {
        if present {
            report.push(field, FieldErrorKind::Stale);
        }
    };

    if strategy != SelectionStrategy::Manual {
        stale(!config.selected_items.is_empty(), fields::SELECTED_ITEMS);
    }
    if strategy != SelectionStrategy::Automatic {
        stale(config.filter_domain.is_some(), fields::FILTER_DOMAIN);
        stale(config.filter_rule.is_some(), fields::FILTER_RULE);
        stale(config.filter_field.is_some(), fields::FILTER_FIELD);
        stale(config.filter_value.is_some(), fields::FILTER_VALUE);
    }
    if strategy != SelectionStrategy::Personalized {
        stale(config.algorithm.is_some(), fields::ALGORITHM);
    }
    if strategy == SelectionStrategy::Manual {
        stale(config.limit.is_some(), fields::LIMIT);
    }
}

/// Check a page's shelf list: contiguous `order` and no repeated shelf
pub fn validate_page(page: &PageConfig) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut seen = HashSet::new();

    for (position, entry) in page.shelves.iter().enumerate() {
        if entry.order() != position {
            report.push(
                fields::ORDER,
                FieldErrorKind::OutOfSequence {
                    expected: position,
                    actual: entry.order(),
                },
            );
        }
        if !seen.insert(entry.shelf_id.as_str()) {
            report.push(
                fields::SHELF_ID,
                FieldErrorKind::Duplicate {
                    value: entry.shelf_id.clone(),
                },
            );
        }
    }

    report
}
