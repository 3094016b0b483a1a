//! Configuration Error Types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The underlying config source could not be read or merged
    #[error("Failed to load configuration from {source_name}: {error}")]
    LoadFailed { source_name: String, error: String },

    /// A value is present but outside what the core accepts
    #[error("Invalid value '{value}' for field '{field}': {context}")]
    InvalidValue {
        field: String,
        value: String,
        context: String,
    },
}

impl ConfigurationError {
    pub fn load_failed(source_name: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self::LoadFailed {
            source_name: source_name.into(),
            error: error.to_string(),
        }
    }

    pub fn invalid_value(
        field: impl Into<String>,
        value: impl std::fmt::Display,
        context: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            context: context.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigurationError>;
