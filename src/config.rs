//! Configuration module
//!
//! Loads configuration from environment variables. Every value has a
//! default, so the application runs with no environment at all.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bank name shown in the menu banner
    pub bank_name: String,

    /// Currency symbol used when printing amounts
    pub currency_symbol: String,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let bank_name = env::var("BANK_NAME").unwrap_or_else(|_| "SecureBank".to_string());
        if bank_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue("BANK_NAME"));
        }

        let currency_symbol = env::var("CURRENCY_SYMBOL").unwrap_or_else(|_| "$".to_string());

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Self {
            bank_name,
            currency_symbol,
            environment,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bank_name: "SecureBank".to_string(),
            currency_symbol: "$".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
