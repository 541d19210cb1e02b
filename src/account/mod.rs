//! Account entity
//!
//! An account holds identity, a balance, and an append-only transaction
//! history. The account kind (standard, savings, checking) decides how
//! withdrawals and interest behave; state is only ever mutated through the
//! validated operations here, so a rejected operation leaves both balance
//! and history untouched.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::amount::MAX_SCALE;
use crate::domain::{Amount, Balance, DomainError, TransactionRecord};

/// Account kind with its kind-specific parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountKind {
    /// Plain account with no fees or interest
    Standard,

    /// Savings account accruing interest at a fixed percentage rate
    Savings { interest_rate: Decimal },

    /// Checking account charging a fixed fee per withdrawal
    Checking { transaction_fee: Amount },
}

impl AccountKind {
    /// Human-readable label for listings
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Standard => "Account",
            AccountKind::Savings { .. } => "Savings Account",
            AccountKind::Checking { .. } => "Checking Account",
        }
    }
}

/// A customer account
///
/// Fields are private; callers go through the operations below. The history
/// is append-only and its insertion order is chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account holder's display name
    name: String,

    /// Unique account number, the registry key
    number: String,

    /// Current balance, never negative
    balance: Balance,

    /// Kind-specific behavior parameters
    kind: AccountKind,

    /// Append-only transaction history
    history: Vec<TransactionRecord>,

    /// When the account was opened
    created_at: DateTime<Utc>,
}

impl Account {
    /// Open an account with a zero balance
    pub fn new(name: impl Into<String>, number: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            balance: Balance::zero(),
            kind,
            history: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Open a standard account
    pub fn standard(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self::new(name, number, AccountKind::Standard)
    }

    /// Open a savings account with the given interest rate
    /// (percentage: 2.5 means 2.5%)
    pub fn savings(
        name: impl Into<String>,
        number: impl Into<String>,
        interest_rate: Decimal,
    ) -> Self {
        Self::new(name, number, AccountKind::Savings { interest_rate })
    }

    /// Open a checking account with the given per-withdrawal fee
    pub fn checking(
        name: impl Into<String>,
        number: impl Into<String>,
        transaction_fee: Amount,
    ) -> Self {
        Self::new(name, number, AccountKind::Checking { transaction_fee })
    }

    /// Set an opening balance (builder style, used at creation only)
    pub fn with_opening_balance(mut self, balance: Balance) -> Self {
        self.balance = balance;
        self
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Deposit money into the account.
    ///
    /// # Errors
    /// `DomainError::InvalidAmount` if `amount <= 0`; the account is left
    /// unchanged.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Balance, DomainError> {
        let amount = Amount::new(amount)?;
        self.credit(&amount)
    }

    /// Withdraw money from the account.
    ///
    /// For checking accounts the fixed transaction fee is charged on top of
    /// the requested amount, and sufficiency is checked against
    /// `amount + fee` before anything is deducted.
    ///
    /// # Errors
    /// - `DomainError::InvalidAmount` if `amount <= 0` (the fee is not
    ///   evaluated in this case)
    /// - `DomainError::InsufficientFunds` if the amount (plus fee, for
    ///   checking) exceeds the balance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Balance, DomainError> {
        let amount = Amount::new(amount)?;
        match self.kind {
            AccountKind::Checking { transaction_fee } => {
                self.withdraw_with_fee(&amount, &transaction_fee)
            }
            AccountKind::Standard | AccountKind::Savings { .. } => self.debit(&amount),
        }
    }

    /// Apply interest to a savings account.
    ///
    /// The interest amount is `balance * rate / 100`, deposited through the
    /// normal deposit path and then annotated with an explicit interest
    /// record, so a successful call appends two history entries. If the
    /// computed interest is not positive (zero balance or zero rate) the
    /// call is a rejected no-op and nothing is recorded.
    ///
    /// # Errors
    /// - `DomainError::UnsupportedOperation` for non-savings accounts
    /// - `DomainError::InvalidAmount` if the computed interest is not
    ///   positive
    pub fn apply_interest(&mut self) -> Result<Amount, DomainError> {
        let rate = match self.kind {
            AccountKind::Savings { interest_rate } => interest_rate,
            _ => {
                return Err(DomainError::UnsupportedOperation(
                    "interest applies to savings accounts only".to_string(),
                ))
            }
        };

        let interest = (self.balance.value() * rate / Decimal::ONE_HUNDRED).round_dp(MAX_SCALE);
        let interest = Amount::new(interest)?;

        self.credit(&interest)?;
        self.history.push(TransactionRecord::interest(&interest, rate));

        Ok(interest)
    }

    /// Append an informational record to the history.
    pub fn record_event(&mut self, message: impl Into<String>) {
        self.history.push(TransactionRecord::note(message));
    }

    /// Credit a validated amount and record it
    fn credit(&mut self, amount: &Amount) -> Result<Balance, DomainError> {
        let new_balance = self.balance.credit(amount)?;
        self.balance = new_balance;
        self.history
            .push(TransactionRecord::deposit(amount, new_balance.value()));
        Ok(new_balance)
    }

    /// Debit a validated amount after a sufficiency check, and record it
    fn debit(&mut self, amount: &Amount) -> Result<Balance, DomainError> {
        if !self.balance.is_sufficient_for(amount) {
            return Err(DomainError::insufficient_funds(
                amount.value(),
                self.balance.value(),
            ));
        }

        let new_balance = self.balance.debit(amount)?;
        self.balance = new_balance;
        self.history
            .push(TransactionRecord::withdrawal(amount, new_balance.value()));
        Ok(new_balance)
    }

    /// Checking withdrawal: fee charged on top of the requested amount.
    ///
    /// Sufficiency is checked once against the combined total, then the
    /// movement is announced (withdrawal record, fee record) and each
    /// deduction runs through the base withdrawal path, which appends its
    /// own record. A successful call therefore leaves four history entries.
    /// The duplication mirrors how statements for these accounts have
    /// always read; collapsing it would change observable behavior.
    fn withdraw_with_fee(&mut self, amount: &Amount, fee: &Amount) -> Result<Balance, DomainError> {
        let total = amount.value() + fee.value();
        if total > self.balance.value() {
            return Err(DomainError::insufficient_funds(
                total,
                self.balance.value(),
            ));
        }

        self.history
            .push(TransactionRecord::withdrawal_requested(amount));
        self.history.push(TransactionRecord::fee(fee));

        // Both deductions are covered by the total check above.
        self.debit(amount)?;
        self.debit(fee)
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> &Balance {
        &self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Ordered, read-only view of the transaction history
    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    /// Canonical one-line summary for listings
    pub fn describe(&self) -> String {
        let base = format!(
            "{} | Holder: {}, Account No: {}, Balance: {}",
            self.kind.label(),
            self.name,
            self.number,
            self.balance
        );

        match self.kind {
            AccountKind::Standard => base,
            AccountKind::Savings { interest_rate } => {
                format!("{}, Interest Rate: {}%", base, interest_rate)
            }
            AccountKind::Checking { transaction_fee } => {
                format!("{}, Transaction Fee: {}", base, transaction_fee)
            }
        }
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use rust_decimal_macros::dec;

    fn funded_standard(balance: Decimal) -> Account {
        Account::standard("Alice", "ACC-001")
            .with_opening_balance(Balance::new(balance).unwrap())
    }

    #[test]
    fn test_new_account_is_empty() {
        let account = Account::standard("Alice", "ACC-001");

        assert_eq!(account.name(), "Alice");
        assert_eq!(account.number(), "ACC-001");
        assert_eq!(account.balance().value(), Decimal::ZERO);
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_deposit_increases_balance_and_records() {
        let mut account = Account::standard("Alice", "ACC-001");

        let balance = account.deposit(dec!(100)).unwrap();

        assert_eq!(balance.value(), dec!(100));
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.history()[0].kind(), TransactionKind::Deposit);
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut account = funded_standard(dec!(50));

        assert!(matches!(
            account.deposit(Decimal::ZERO),
            Err(DomainError::InvalidAmount(_))
        ));
        assert!(matches!(
            account.deposit(dec!(-10)),
            Err(DomainError::InvalidAmount(_))
        ));

        // Rejections leave the account untouched
        assert_eq!(account.balance().value(), dec!(50));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_withdraw_decreases_balance() {
        let mut account = funded_standard(dec!(100));

        let balance = account.withdraw(dec!(30)).unwrap();

        assert_eq!(balance.value(), dec!(70));
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.history()[0].kind(), TransactionKind::Withdrawal);
    }

    #[test]
    fn test_withdraw_rejects_non_positive() {
        let mut account = funded_standard(dec!(100));

        assert!(matches!(
            account.withdraw(dec!(-5)),
            Err(DomainError::InvalidAmount(_))
        ));
        assert_eq!(account.balance().value(), dec!(100));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_withdraw_rejects_insufficient_funds() {
        let mut account = funded_standard(dec!(100));

        let result = account.withdraw(dec!(100.01));
        assert!(matches!(
            result,
            Err(DomainError::InsufficientFunds { .. })
        ));
        assert_eq!(account.balance().value(), dec!(100));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_withdraw_entire_balance_allowed() {
        let mut account = funded_standard(dec!(100));

        let balance = account.withdraw(dec!(100)).unwrap();
        assert_eq!(balance.value(), Decimal::ZERO);
    }

    #[test]
    fn test_checking_withdraw_includes_fee_in_check() {
        let fee = Amount::new(dec!(5)).unwrap();
        let mut account = Account::checking("Bob", "ACC-002", fee)
            .with_opening_balance(Balance::new(dec!(100)).unwrap());

        // 96 + 5 = 101 > 100: rejected even though 96 alone would fit
        let result = account.withdraw(dec!(96));
        assert!(matches!(
            result,
            Err(DomainError::InsufficientFunds { .. })
        ));
        assert_eq!(account.balance().value(), dec!(100));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_checking_withdraw_charges_fee() {
        let fee = Amount::new(dec!(5)).unwrap();
        let mut account = Account::checking("Bob", "ACC-002", fee)
            .with_opening_balance(Balance::new(dec!(100)).unwrap());

        // 95 + 5 = 100: exactly drains the account
        let balance = account.withdraw(dec!(95)).unwrap();
        assert_eq!(balance.value(), Decimal::ZERO);

        // Explicit withdrawal + explicit fee + the two base deductions
        let kinds: Vec<_> = account.history().iter().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Withdrawal,
                TransactionKind::Fee,
                TransactionKind::Withdrawal,
                TransactionKind::Withdrawal,
            ]
        );
    }

    #[test]
    fn test_checking_invalid_amount_skips_fee() {
        let fee = Amount::new(dec!(5)).unwrap();
        let mut account = Account::checking("Bob", "ACC-002", fee)
            .with_opening_balance(Balance::new(dec!(100)).unwrap());

        let result = account.withdraw(Decimal::ZERO);
        assert!(matches!(result, Err(DomainError::InvalidAmount(_))));
        assert_eq!(account.balance().value(), dec!(100));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_apply_interest() {
        let mut account = Account::savings("Carol", "ACC-003", dec!(5))
            .with_opening_balance(Balance::new(dec!(1000)).unwrap());

        let interest = account.apply_interest().unwrap();

        assert_eq!(interest.value(), dec!(50));
        assert_eq!(account.balance().value(), dec!(1050));

        // Deposit record plus the explicit interest annotation
        assert_eq!(account.history().len(), 2);
        assert_eq!(account.history()[0].kind(), TransactionKind::Deposit);
        assert_eq!(account.history()[1].kind(), TransactionKind::Interest);

        let annotation = account.history()[1].description();
        assert!(annotation.contains("50"));
        assert!(annotation.contains("5%"));
    }

    #[test]
    fn test_apply_interest_zero_balance_is_noop() {
        let mut account = Account::savings("Carol", "ACC-003", dec!(5));

        let result = account.apply_interest();
        assert!(matches!(result, Err(DomainError::InvalidAmount(_))));
        assert_eq!(account.balance().value(), Decimal::ZERO);
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_apply_interest_zero_rate_is_noop() {
        let mut account = Account::savings("Carol", "ACC-003", Decimal::ZERO)
            .with_opening_balance(Balance::new(dec!(1000)).unwrap());

        let result = account.apply_interest();
        assert!(matches!(result, Err(DomainError::InvalidAmount(_))));
        assert_eq!(account.balance().value(), dec!(1000));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_apply_interest_rounds_to_cents() {
        let mut account = Account::savings("Carol", "ACC-003", dec!(2.5))
            .with_opening_balance(Balance::new(dec!(33.33)).unwrap());

        // 33.33 * 2.5% = 0.83325, rounded to 0.83
        let interest = account.apply_interest().unwrap();
        assert_eq!(interest.value(), dec!(0.83));
        assert_eq!(account.balance().value(), dec!(34.16));
    }

    #[test]
    fn test_apply_interest_on_checking_unsupported() {
        let fee = Amount::new(dec!(5)).unwrap();
        let mut account = Account::checking("Bob", "ACC-002", fee);

        let result = account.apply_interest();
        assert!(matches!(result, Err(DomainError::UnsupportedOperation(_))));
    }

    #[test]
    fn test_record_event_appends_note() {
        let mut account = Account::standard("Alice", "ACC-001");

        account.record_event("Welcome letter sent");

        assert_eq!(account.history().len(), 1);
        assert_eq!(account.history()[0].kind(), TransactionKind::Note);
    }

    #[test]
    fn test_history_preserves_insertion_order() {
        let mut account = funded_standard(dec!(100));

        account.deposit(dec!(10)).unwrap();
        account.withdraw(dec!(20)).unwrap();
        account.deposit(dec!(30)).unwrap();

        let kinds: Vec<_> = account.history().iter().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Deposit,
                TransactionKind::Withdrawal,
                TransactionKind::Deposit,
            ]
        );
    }

    #[test]
    fn test_describe_per_kind() {
        let standard = Account::standard("Alice", "ACC-001");
        assert!(standard.describe().contains("Holder: Alice"));
        assert!(standard.describe().contains("ACC-001"));

        let savings = Account::savings("Carol", "ACC-003", dec!(2.5));
        assert!(savings.describe().starts_with("Savings Account"));
        assert!(savings.describe().contains("Interest Rate: 2.5%"));

        let fee = Amount::new(dec!(1.50)).unwrap();
        let checking = Account::checking("Bob", "ACC-002", fee);
        assert!(checking.describe().starts_with("Checking Account"));
        assert!(checking.describe().contains("Transaction Fee: 1.50"));
    }
}
