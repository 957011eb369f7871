//! Configuration module
//!
//! Settings come from the environment (a `.env` file is loaded by the binary
//! before this runs). Unset variables fall back to defaults; set but invalid
//! ones are rejected.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use validator::Validate;

use crate::error::{AppError, AppResult};

pub const ENV_OUTPUT: &str = "FEATURESCOPE_OUTPUT";
pub const ENV_LOG_FORMAT: &str = "FEATURESCOPE_LOG_FORMAT";
pub const ENV_MAX_INPUT_BYTES: &str = "FEATURESCOPE_MAX_INPUT_BYTES";

/// 1 MiB
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 1024 * 1024;
/// 64 MiB
pub const MAX_INPUT_BYTES_LIMIT: u64 = 64 * 1024 * 1024;

/// How the CLI prints a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::Config(format!("Unknown output format: {}", other))),
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Report output format
    pub output: OutputFormat,

    /// Log line format
    pub log_format: LogFormat,

    /// Largest source file or stdin payload accepted, in bytes
    #[validate(range(min = 1, max = 67108864))]
    pub max_input_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            log_format: LogFormat::default(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

fn env_parse<T>(name: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{}: {}", name, e))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(AppError::Config(format!("{}: {}", name, e))),
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let config = Self {
            output: env_parse(ENV_OUTPUT)?.unwrap_or(defaults.output),
            log_format: env_parse(ENV_LOG_FORMAT)?.unwrap_or(defaults.log_format),
            max_input_bytes: env_parse(ENV_MAX_INPUT_BYTES)?.unwrap_or(defaults.max_input_bytes),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = Config {
            max_input_bytes: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let at_limit = Config {
            max_input_bytes: MAX_INPUT_BYTES_LIMIT,
            ..Config::default()
        };
        assert!(at_limit.validate().is_ok());

        let over_limit = Config {
            max_input_bytes: MAX_INPUT_BYTES_LIMIT + 1,
            ..Config::default()
        };
        assert!(over_limit.validate().is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
