//! Bank registry
//!
//! Keyed collection of accounts by account number. A BTreeMap keeps the
//! listing order deterministic across runs (key order), which the listing
//! and its tests rely on.

use std::collections::BTreeMap;

use crate::account::Account;
use crate::domain::DomainError;

/// The bank: all open accounts, keyed by account number
#[derive(Debug, Default)]
pub struct Bank {
    accounts: BTreeMap<String, Account>,
}

impl Bank {
    /// Create a bank with no accounts
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
        }
    }

    /// Register an account under its account number.
    ///
    /// # Errors
    /// `DomainError::DuplicateAccount` if the number is already taken; the
    /// existing account is left untouched.
    pub fn add_account(&mut self, account: Account) -> Result<(), DomainError> {
        if self.accounts.contains_key(account.number()) {
            return Err(DomainError::DuplicateAccount(account.number().to_string()));
        }

        tracing::debug!(number = %account.number(), holder = %account.name(), "account registered");
        self.accounts.insert(account.number().to_string(), account);
        Ok(())
    }

    /// Look up an account by number.
    ///
    /// # Errors
    /// `DomainError::AccountNotFound` on a miss; never panics.
    pub fn get_account(&self, number: &str) -> Result<&Account, DomainError> {
        self.accounts
            .get(number)
            .ok_or_else(|| DomainError::AccountNotFound(number.to_string()))
    }

    /// Look up an account by number, mutably.
    pub fn get_account_mut(&mut self, number: &str) -> Result<&mut Account, DomainError> {
        self.accounts
            .get_mut(number)
            .ok_or_else(|| DomainError::AccountNotFound(number.to_string()))
    }

    /// Summaries of all accounts, in account-number order
    pub fn list_accounts(&self) -> Vec<String> {
        self.accounts
            .values()
            .map(|account| account.describe())
            .collect()
    }

    /// Iterate over all accounts in account-number order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Number of open accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_add_and_get_account() {
        let mut bank = Bank::new();

        bank.add_account(Account::standard("Alice", "ACC-001"))
            .unwrap();

        let account = bank.get_account("ACC-001").unwrap();
        assert_eq!(account.name(), "Alice");
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_duplicate_account_rejected() {
        let mut bank = Bank::new();

        bank.add_account(Account::standard("Alice", "ACC-001"))
            .unwrap();
        let result = bank.add_account(Account::standard("Mallory", "ACC-001"));

        assert!(matches!(result, Err(DomainError::DuplicateAccount(_))));

        // The first registration wins
        assert_eq!(bank.get_account("ACC-001").unwrap().name(), "Alice");
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_get_missing_account() {
        let bank = Bank::new();

        let result = bank.get_account("ACC-404");
        assert!(matches!(result, Err(DomainError::AccountNotFound(_))));
    }

    #[test]
    fn test_list_accounts_ordered_by_number() {
        let mut bank = Bank::new();

        bank.add_account(Account::standard("Bob", "ACC-002")).unwrap();
        bank.add_account(Account::standard("Alice", "ACC-001"))
            .unwrap();
        bank.add_account(Account::savings("Carol", "ACC-003", dec!(2.5)))
            .unwrap();

        let listing = bank.list_accounts();
        assert_eq!(listing.len(), 3);
        assert!(listing[0].contains("ACC-001"));
        assert!(listing[1].contains("ACC-002"));
        assert!(listing[2].contains("ACC-003"));
    }

    #[test]
    fn test_list_accounts_idempotent() {
        let mut bank = Bank::new();

        bank.add_account(Account::standard("Alice", "ACC-001"))
            .unwrap();
        bank.add_account(Account::standard("Bob", "ACC-002")).unwrap();

        assert_eq!(bank.list_accounts(), bank.list_accounts());
    }

    #[test]
    fn test_mutation_through_registry_handle() {
        let mut bank = Bank::new();
        bank.add_account(Account::standard("Alice", "ACC-001"))
            .unwrap();

        bank.get_account_mut("ACC-001")
            .unwrap()
            .deposit(dec!(100))
            .unwrap();

        assert_eq!(
            bank.get_account("ACC-001").unwrap().balance().value(),
            dec!(100)
        );
    }
}
