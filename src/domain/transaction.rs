//! Transaction records
//!
//! Immutable audit entries describing balance-affecting or informational
//! events on an account. Records are append-only: once written they are
//! never truncated, edited, or reordered.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::Amount;

/// Kinds of transaction records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money was deposited (balance increased)
    Deposit,

    /// Money was withdrawn (balance decreased)
    Withdrawal,

    /// A transaction fee was charged
    Fee,

    /// Interest was applied
    Interest,

    /// Informational note with no balance effect of its own
    Note,
}

impl TransactionKind {
    /// Get the kind as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Fee => "fee",
            TransactionKind::Interest => "interest",
            TransactionKind::Note => "note",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in an account's transaction history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    id: Uuid,
    kind: TransactionKind,
    /// Amount involved, if the record describes a monetary event
    amount: Option<Decimal>,
    description: String,
    recorded_at: DateTime<Utc>,
}

impl TransactionRecord {
    fn new(kind: TransactionKind, amount: Option<Decimal>, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            description,
            recorded_at: Utc::now(),
        }
    }

    /// Record for a successful deposit
    pub fn deposit(amount: &Amount, balance_after: Decimal) -> Self {
        Self::new(
            TransactionKind::Deposit,
            Some(amount.value()),
            format!("Deposited {} (balance: {:.2})", amount, balance_after),
        )
    }

    /// Record for a successful withdrawal
    pub fn withdrawal(amount: &Amount, balance_after: Decimal) -> Self {
        Self::new(
            TransactionKind::Withdrawal,
            Some(amount.value()),
            format!("Withdrew {} (balance: {:.2})", amount, balance_after),
        )
    }

    /// Record announcing a withdrawal before the fee is charged
    pub fn withdrawal_requested(amount: &Amount) -> Self {
        Self::new(
            TransactionKind::Withdrawal,
            Some(amount.value()),
            format!("Withdrew {}", amount),
        )
    }

    /// Record for a charged transaction fee
    pub fn fee(fee: &Amount) -> Self {
        Self::new(
            TransactionKind::Fee,
            Some(fee.value()),
            format!("Transaction fee applied: {}", fee),
        )
    }

    /// Record for applied interest
    pub fn interest(amount: &Amount, rate: Decimal) -> Self {
        Self::new(
            TransactionKind::Interest,
            Some(amount.value()),
            format!("Interest applied: {} at rate {}%", amount, rate),
        )
    }

    /// Free-form informational record
    pub fn note(message: impl Into<String>) -> Self {
        Self::new(TransactionKind::Note, None, message.into())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Option<Decimal> {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}
