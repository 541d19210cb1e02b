//! Error handling module
//!
//! Centralized error types and console message conversion. The interactive
//! loop reports recoverable errors to the user and keeps running; only I/O
//! and configuration failures terminate the program.

use crate::domain::{AmountError, DomainError};

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input that could not be parsed into a menu choice or value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Amount(#[from] AmountError),

    // Fatal errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Whether the interactive loop can recover by re-prompting.
    /// I/O and configuration failures are fatal; everything else is a
    /// rejected operation that left state unchanged.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            AppError::Io(_) | AppError::Config(_) | AppError::Internal(_)
        )
    }

    /// Message shown to the user on the console
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => format!("Invalid input: {}", msg),
            AppError::Domain(err) => err.to_string(),
            AppError::Amount(err) => err.to_string(),
            AppError::Internal(_) | AppError::Io(_) | AppError::Config(_) => self.to_string(),
        }
    }
}
