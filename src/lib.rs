//! SecureBank Library
//!
//! Re-exports modules for integration testing and external use.

pub mod account;
pub mod bank;
pub mod cli;

// Private modules (used only by the securebank binary)
pub mod config;
pub mod domain;
mod error;

pub use account::{Account, AccountKind};
pub use bank::Bank;
pub use cli::Session;
pub use config::Config;
pub use domain::{Amount, AmountError, Balance, DomainError, TransactionKind, TransactionRecord};
pub use error::{AppError, AppResult};
