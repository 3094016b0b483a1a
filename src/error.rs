//! Error types for the curator core.
//!
//! Editing rejections are not errors here: they travel as
//! [`EditOutcome::Rejected`](crate::outcome::EditOutcome) values. The types
//! below cover what a caller has to branch on when an operation cannot
//! produce a value at all.

use crate::lookup::LookupError;
use crate::validation::ValidationReport;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CuratorError {
    #[error("Validation error: {0}")]
    Validation(ValidationReport),
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<ValidationReport> for CuratorError {
    fn from(report: ValidationReport) -> Self {
        CuratorError::Validation(report)
    }
}

impl From<serde_json::Error> for CuratorError {
    fn from(error: serde_json::Error) -> Self {
        CuratorError::Serialization(error.to_string())
    }
}

impl From<crate::config::ConfigurationError> for CuratorError {
    fn from(error: crate::config::ConfigurationError) -> Self {
        CuratorError::Configuration(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CuratorError>;
