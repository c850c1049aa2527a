//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;

/// Default number of account numbers the in-memory registry holds
pub const DEFAULT_REGISTRY_CAPACITY: usize = 100_000;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Collisions tolerated before account number allocation gives up
    pub account_number_max_attempts: u32,

    /// Account numbers kept in the in-memory registry before allocation is refused
    pub account_number_registry_capacity: usize,

    /// Log output format (text or json)
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let account_number_max_attempts = lookup("ACCOUNT_NUMBER_MAX_ATTEMPTS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("ACCOUNT_NUMBER_MAX_ATTEMPTS"))?;

        let account_number_registry_capacity = lookup("ACCOUNT_NUMBER_REGISTRY_CAPACITY")
            .map(|value| value.parse::<usize>())
            .transpose()
            .map_err(|_| ConfigError::InvalidValue("ACCOUNT_NUMBER_REGISTRY_CAPACITY"))?
            .unwrap_or(DEFAULT_REGISTRY_CAPACITY);

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(_) => return Err(ConfigError::InvalidValue("LOG_FORMAT")),
        };

        Ok(Self {
            host,
            port,
            environment,
            account_number_max_attempts,
            account_number_registry_capacity,
            log_format,
        })
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.account_number_max_attempts, 5);
        assert_eq!(config.account_number_registry_capacity, 100_000);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("ENVIRONMENT", "production"),
            ("ACCOUNT_NUMBER_MAX_ATTEMPTS", "12"),
            ("ACCOUNT_NUMBER_REGISTRY_CAPACITY", "250"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.account_number_max_attempts, 12);
        assert_eq!(config.account_number_registry_capacity, 250);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("PORT")));

        let err = Config::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("LOG_FORMAT")));

        let err = Config::from_lookup(lookup_from(&[("ACCOUNT_NUMBER_REGISTRY_CAPACITY", "-1")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("ACCOUNT_NUMBER_REGISTRY_CAPACITY")));
    }
}
