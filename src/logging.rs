//! # Structured Logging Module
//!
//! Environment-aware console logging on the tracing ecosystem, plus
//! domain-specific macros that stamp every event with an `operation` name
//! and an RFC 3339 timestamp.
//!
//! The core itself only emits events; installing a subscriber is left to the
//! embedding application, which may call [`init_structured_logging`] or bring
//! its own.

use crate::config::LoggingConfig;
use std::io::IsTerminal;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize console logging from environment variables
pub fn init_structured_logging() {
    let environment = get_environment();
    let config = LoggingConfig {
        level: get_log_level(&environment),
        json: std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false),
    };
    init_with_config(&config, &environment);
}

/// Initialize console logging from a loaded configuration
pub fn init_with_config(config: &LoggingConfig, environment: &str) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

        let layer = if config.json {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .json()
                .with_filter(filter)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(std::io::stdout().is_terminal())
                .with_filter(filter)
                .boxed()
        };

        // A subscriber may already be installed by the host application
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized - keeping it");
            return;
        }

        tracing::info!(
            environment = %environment,
            level = %config.level,
            json = config.json,
            "Structured logging initialized"
        );
    });
}

/// Current environment name from environment variables
pub fn get_environment() -> String {
    std::env::var("CURATOR_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Log level from `LOG_LEVEL`/`RUST_LOG`, falling back to environment defaults
fn get_log_level(environment: &str) -> String {
    if let Ok(level) = std::env::var("LOG_LEVEL") {
        return level.to_lowercase();
    }

    if let Ok(level) = std::env::var("RUST_LOG") {
        return level.to_lowercase();
    }

    default_level_for(environment).to_string()
}

fn default_level_for(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

/// Log shelf configuration operations
#[macro_export]
macro_rules! log_shelf {
    // Full form with shelf_id
    ($level:ident, $operation:expr, shelf_id: $shelf_id:expr, $($key:ident: $value:expr),* $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            shelf_id = %$shelf_id,
            $($key = ?$value,)*
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "{} (shelf: {})", $operation, $shelf_id
        )
    };
    // Simple form - just operation
    ($level:ident, $operation:expr $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "{}", $operation
        )
    };
}

/// Log page composition operations
#[macro_export]
macro_rules! log_page {
    // Full form with page_id
    ($level:ident, $operation:expr, page_id: $page_id:expr, $($key:ident: $value:expr),* $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            page_id = %$page_id,
            $($key = ?$value,)*
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "{} (page: {})", $operation, $page_id
        )
    };
    // Simple form - just operation
    ($level:ident, $operation:expr $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "{}", $operation
        )
    };
}

/// Log schedule gate decisions
#[macro_export]
macro_rules! log_schedule {
    // Full form with subject
    ($level:ident, $operation:expr, subject: $subject:expr, $($key:ident: $value:expr),* $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            subject = %$subject,
            $($key = ?$value,)*
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "{} ({})", $operation, $subject
        )
    };
    // Simple form - just operation
    ($level:ident, $operation:expr $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "{}", $operation
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(default_level_for("test"), "debug");
        assert_eq!(default_level_for("development"), "debug");
        assert_eq!(default_level_for("production"), "info");
        assert_eq!(default_level_for("unknown"), "debug");
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            json: false,
        };
        init_with_config(&config, "test");
        init_with_config(&config, "test");
        crate::log_shelf!(debug, "test.operation", shelf_id: "s1", items: 3);
        crate::log_page!(info, "test.page");
    }

    #[test]
    fn test_macros_usable_as_match_arms() {
        for item in [Some("s1"), None] {
            match item {
                Some(id) => crate::log_shelf!(debug, "test.found", shelf_id: id, items: 1),
                None => crate::log_schedule!(warn, "test.missing"),
            }
        }
    }
}
