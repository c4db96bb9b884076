use std::time::Duration;

use thiserror::Error;

use crate::{audio::config::AudioConfig, http::ApiConfig};

pub const ENDPOINT_VAR: &str = "TUNESEARCH_ENDPOINT";
pub const TIMEOUT_VAR: &str = "TUNESEARCH_TIMEOUT_SECS";
pub const VOLUME_VAR: &str = "TUNESEARCH_VOLUME";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be between 0 and 100, got {value}")]
    OutOfRange { var: &'static str, value: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api: ApiConfig,
    pub audio: AudioConfig,
}

impl Config {
    /// Defaults overridden by the process environment (and `.env`, once
    /// loaded by the caller).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|v| !v.trim().is_empty()) {
            config.api.endpoint = endpoint.trim().to_string();
        }

        if let Some(secs) = parse_number(&lookup, TIMEOUT_VAR)? {
            config.api.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        if let Some(volume) = parse_number(&lookup, VOLUME_VAR)? {
            if volume > 100 {
                return Err(ConfigError::OutOfRange {
                    var: VOLUME_VAR,
                    value: volume,
                });
            }
            config.audio.volume = volume as u8;
        }

        Ok(config)
    }
}

fn parse_number<F>(lookup: &F, var: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}
