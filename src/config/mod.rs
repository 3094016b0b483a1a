//! # Curator Configuration
//!
//! Settings for the composition core: the `limit` bounds shelves are
//! validated against and how logging is set up. Values are layered by
//! [`ConfigManager`]: built-in defaults, then an optional TOML file, then
//! `CURATOR__SECTION__KEY` environment variables.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use curator_core::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! let limits = manager.config().limits;
//! assert!(limits.min <= limits.max);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use crate::constants::{LIMIT_MAX, LIMIT_MIN};
use serde::{Deserialize, Serialize};

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigManager;

/// Root configuration structure mirroring `config/curator.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CuratorConfig {
    /// Deployment environment (development, test, production)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Bounds for automatic and personalized shelf limits
    #[serde(default)]
    pub limits: LimitConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Inclusive bounds for a shelf's `limit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitConfig {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `curator_core=debug`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            limits: LimitConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            min: LIMIT_MIN,
            max: LIMIT_MAX,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LimitConfig {
    pub fn contains(&self, limit: u32) -> bool {
        (self.min..=self.max).contains(&limit)
    }
}

impl CuratorConfig {
    /// Reject bounds the core cannot honor.
    ///
    /// Configured limits may narrow `LIMIT_MIN..=LIMIT_MAX` but never widen it.
    pub fn validate(&self) -> ConfigResult<()> {
        let LimitConfig { min, max } = self.limits;

        if min < LIMIT_MIN {
            return Err(ConfigurationError::invalid_value(
                "limits.min",
                min,
                format!("must be at least {LIMIT_MIN}"),
            ));
        }
        if max > LIMIT_MAX {
            return Err(ConfigurationError::invalid_value(
                "limits.max",
                max,
                format!("must be at most {LIMIT_MAX}"),
            ));
        }
        if min > max {
            return Err(ConfigurationError::invalid_value(
                "limits.min",
                min,
                format!("must not exceed limits.max ({max})"),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigurationError::invalid_value(
                "logging.level",
                "",
                "must not be empty",
            ));
        }

        Ok(())
    }
}
