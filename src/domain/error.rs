//! Domain Error Types
//!
//! Business rule violations raised by account and registry operations.
//! A rejected operation never mutates state; every error here is recoverable.

use thiserror::Error;

/// Domain-specific errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Non-positive (or malformed) amount supplied to deposit/withdraw
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Withdrawal exceeds the available balance
    /// (for checking accounts, `requested` includes the transaction fee)
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: rust_decimal::Decimal,
        available: rust_decimal::Decimal,
    },

    /// Registry add with an account number that is already taken
    #[error("An account with number {0} already exists")]
    DuplicateAccount(String),

    /// Registry lookup miss
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Operation not supported by this account kind
    /// (e.g. applying interest to a checking account)
    #[error("Operation not supported for this account: {0}")]
    UnsupportedOperation(String),
}

impl DomainError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(
        requested: rust_decimal::Decimal,
        available: rust_decimal::Decimal,
    ) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    /// Check if this error is the caller's fault (bad input or bad request)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::InsufficientFunds { .. }
                | Self::DuplicateAccount(_)
                | Self::UnsupportedOperation(_)
        )
    }
}

impl From<super::AmountError> for DomainError {
    fn from(err: super::AmountError) -> Self {
        DomainError::InvalidAmount(err.to_string())
    }
}
