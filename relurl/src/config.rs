//! Classifier configuration.

use serde::{Deserialize, Serialize};

use relurl_cache::CacheConfig;
use relurl_core::constants::{ENV_ALLOW_PROTOCOL_RELATIVE, ENV_CACHE_CAPACITY, ENV_ENABLE_CACHE};
use relurl_core::error::{RelUrlError, Result};
use relurl_core::types::ClassifyOptions;

/// Classifier configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Whether to memoize verdicts
    pub enable_cache: bool,
    /// Result cache settings
    pub cache: CacheConfig,
    /// Options used by [`crate::Classifier::is_relative_url`]
    pub defaults: ClassifyOptions,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            enable_cache: true,
            cache: CacheConfig::default(),
            defaults: ClassifyOptions::default(),
        }
    }
}

impl ClassifierConfig {
    /// Sets the cache capacity.
    pub fn with_capacity(mut self, max_entries: usize) -> Self {
        self.cache.max_entries = max_entries;
        self
    }

    /// Disables caching.
    pub fn no_cache(mut self) -> Self {
        self.enable_cache = false;
        self
    }

    /// Sets the default classification options.
    pub fn with_defaults(mut self, defaults: ClassifyOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Reads the configuration from the environment, loading `.env` first if
    /// present. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_ENABLE_CACHE) {
            config.enable_cache = parse_flag(ENV_ENABLE_CACHE, &value)?;
        }
        if let Some(value) = lookup(ENV_CACHE_CAPACITY) {
            config.cache.max_entries = value.trim().parse().map_err(|_| {
                RelUrlError::ConfigError(format!("{ENV_CACHE_CAPACITY}={value} is not a number"))
            })?;
        }
        if let Some(value) = lookup(ENV_ALLOW_PROTOCOL_RELATIVE) {
            config.defaults.allow_protocol_relative = parse_flag(ENV_ALLOW_PROTOCOL_RELATIVE, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for unusable values.
    pub fn validate(&self) -> Result<()> {
        if self.enable_cache {
            self.cache.validate()?;
        }
        Ok(())
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(RelUrlError::ConfigError(format!(
            "{name}={value} is not a boolean"
        ))),
    }
}
