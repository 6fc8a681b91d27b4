//! Configuration for the operation builder

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding `permlink_max_len`
pub const ENV_PERMLINK_MAX_LEN: &str = "STEEM_OPS_PERMLINK_MAX_LEN";
/// Environment variable overriding `default_app`
pub const ENV_DEFAULT_APP: &str = "STEEM_OPS_DEFAULT_APP";

/// Builder configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Characters kept from the title/seed before slugging (timestamp excluded)
    pub permlink_max_len: usize,
    /// App name written to `json_metadata` when a call passes an empty app
    pub default_app: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            permlink_max_len: 35,
            default_app: String::new(),
        }
    }
}

impl BuilderConfig {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_PERMLINK_MAX_LEN) {
            config.permlink_max_len = parse_env(ENV_PERMLINK_MAX_LEN, &raw)?;
        }

        if let Some(app) = lookup(ENV_DEFAULT_APP) {
            config.default_app = app;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.permlink_max_len == 0 {
            return Err(ConfigError::InvalidPermlinkLength);
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    let invalid = || ConfigError::InvalidEnvValue {
        key,
        value: raw.to_string(),
    };
    raw.trim().parse().map_err(|_| invalid())
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("permlink_max_len cannot be 0")]
    InvalidPermlinkLength,

    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnvValue { key: &'static str, value: String },
}
