//! Configuration Tests
//!
//! Environment-driven configuration: defaults, overrides, and rejection of
//! bad values.

use crate::config::{
    Config, LogFormat, OutputFormat, DEFAULT_MAX_INPUT_BYTES, ENV_LOG_FORMAT, ENV_MAX_INPUT_BYTES,
    ENV_OUTPUT,
};
use crate::error::AppError;

#[cfg(test)]
mod env_tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        temp_env::with_vars_unset([ENV_OUTPUT, ENV_LOG_FORMAT, ENV_MAX_INPUT_BYTES], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.output, OutputFormat::Text);
            assert_eq!(config.log_format, LogFormat::Pretty);
            assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
        });
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                (ENV_OUTPUT, Some("json")),
                (ENV_LOG_FORMAT, Some("JSON")),
                (ENV_MAX_INPUT_BYTES, Some("2048")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.output, OutputFormat::Json);
                assert_eq!(config.log_format, LogFormat::Json);
                assert_eq!(config.max_input_bytes, 2048);
            },
        );
    }

    #[test]
    fn test_empty_value_uses_default() {
        temp_env::with_vars(
            [
                (ENV_OUTPUT, Some("  ")),
                (ENV_LOG_FORMAT, None),
                (ENV_MAX_INPUT_BYTES, None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.output, OutputFormat::Text);
            },
        );
    }

    #[test]
    fn test_unknown_output_rejected() {
        temp_env::with_vars(
            [
                (ENV_OUTPUT, Some("yaml")),
                (ENV_LOG_FORMAT, None),
                (ENV_MAX_INPUT_BYTES, None),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(matches!(err, AppError::Config(_)));
                assert!(err.to_string().contains(ENV_OUTPUT));
            },
        );
    }

    #[test]
    fn test_non_numeric_limit_rejected() {
        temp_env::with_vars(
            [
                (ENV_OUTPUT, None),
                (ENV_LOG_FORMAT, None),
                (ENV_MAX_INPUT_BYTES, Some("lots")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(matches!(err, AppError::Config(_)));
            },
        );
    }

    #[test]
    fn test_zero_limit_fails_validation() {
        temp_env::with_vars(
            [
                (ENV_OUTPUT, None),
                (ENV_LOG_FORMAT, None),
                (ENV_MAX_INPUT_BYTES, Some("0")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(matches!(err, AppError::Config(_)));
            },
        );
    }
}
