//! Configuration Loader
//!
//! Layers built-in defaults, an optional TOML file and `CURATOR__*`
//! environment variables into a validated [`CuratorConfig`].

use super::error::{ConfigResult, ConfigurationError};
use super::CuratorConfig;
use ::config::{Config, ConfigBuilder, Environment, File, FileFormat};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Default location of the configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/curator.toml";

type Builder = ConfigBuilder<::config::builder::DefaultState>;

/// Loaded, validated configuration plus where it came from
#[derive(Debug)]
pub struct ConfigManager {
    config: CuratorConfig,
    source_file: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration with the file taken from `CURATOR_CONFIG`
    /// (default `config/curator.toml`). A missing file is not an error.
    pub fn load() -> ConfigResult<Arc<ConfigManager>> {
        let path = env::var("CURATOR_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::build(&path, false)
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from_path(path: impl AsRef<Path>) -> ConfigResult<Arc<ConfigManager>> {
        Self::build(path.as_ref(), true)
    }

    /// Wrap an already-built configuration, validating it first
    pub fn from_config(config: CuratorConfig) -> ConfigResult<Arc<ConfigManager>> {
        config.validate()?;
        Ok(Arc::new(ConfigManager {
            config,
            source_file: None,
        }))
    }

    pub fn config(&self) -> &CuratorConfig {
        &self.config
    }

    /// File the configuration was read from, if one was found
    pub fn source_file(&self) -> Option<&Path> {
        self.source_file.as_deref()
    }

    fn build(path: &Path, required: bool) -> ConfigResult<Arc<ConfigManager>> {
        let source_name = path.display().to_string();
        debug!(path = %source_name, required, "Loading curator configuration");

        let built = Self::with_defaults()?
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("CURATOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("environment", env::var("CURATOR_ENV").ok())
            .map_err(|e| ConfigurationError::load_failed("CURATOR_ENV", e))?
            .build()
            .map_err(|e| ConfigurationError::load_failed(&source_name, e))?;

        let config: CuratorConfig = built
            .try_deserialize()
            .map_err(|e| ConfigurationError::load_failed(&source_name, e))?;
        config.validate()?;

        debug!(
            environment = %config.environment,
            limit_min = config.limits.min,
            limit_max = config.limits.max,
            "Configuration loaded successfully"
        );

        let source_file = path.exists().then(|| path.to_path_buf());
        Ok(Arc::new(ConfigManager {
            config,
            source_file,
        }))
    }

    fn with_defaults() -> ConfigResult<Builder> {
        let defaults = CuratorConfig::default();
        let set = |builder: Builder, key: &str, value: ::config::Value| {
            builder
                .set_default(key, value)
                .map_err(|e| ConfigurationError::load_failed("defaults", e))
        };

        let builder = Config::builder();
        let builder = set(builder, "environment", defaults.environment.into())?;
        let builder = set(builder, "limits.min", i64::from(defaults.limits.min).into())?;
        let builder = set(builder, "limits.max", i64::from(defaults.limits.max).into())?;
        let builder = set(builder, "logging.level", defaults.logging.level.into())?;
        set(builder, "logging.json", defaults.logging.json.into())
    }
}
