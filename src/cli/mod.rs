//! Interactive console menus
//!
//! The menu loop from the console application: a main menu for creating,
//! selecting, and listing accounts, and a per-account submenu for deposits,
//! withdrawals, balance checks, and history. All state lives in the
//! `Session`, which is handed the input/output streams explicitly so the
//! whole loop can be driven from tests with in-memory buffers.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::account::{Account, AccountKind};
use crate::bank::Bank;
use crate::config::Config;
use crate::domain::{Amount, Balance};
use crate::error::{AppError, AppResult};

/// One interactive session: the bank plus its configuration.
///
/// The session object replaces what would otherwise be process-global menu
/// state; nothing outlives it.
pub struct Session {
    bank: Bank,
    config: Config,
}

impl Session {
    /// Create a session with an empty bank
    pub fn new(config: Config) -> Self {
        Self {
            bank: Bank::new(),
            config,
        }
    }

    /// Access the underlying bank (used by tests and listings)
    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Run the main menu loop until the user exits or input ends.
    ///
    /// Recoverable errors (rejected operations, unparseable input) are
    /// printed and the menu is shown again; only I/O failures propagate.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> AppResult<()> {
        loop {
            self.print_main_menu(output)?;

            let choice = match read_line(input)? {
                Some(line) => line,
                None => break, // end of input
            };

            let result = match choice.as_str() {
                "1" => self.create_account(input, output),
                "2" => self.select_account(input, output),
                "3" => self.list_accounts(output),
                "4" => {
                    writeln!(output, "Thank you for banking with {}.", self.config.bank_name)?;
                    break;
                }
                other => Err(AppError::InvalidInput(format!(
                    "unknown menu choice '{}'",
                    other
                ))),
            };

            self.report(result, output)?;
        }

        Ok(())
    }

    fn print_main_menu<W: Write>(&self, output: &mut W) -> AppResult<()> {
        writeln!(output, "\n-------------------------------------")?;
        writeln!(output, "        {} APPLICATION", self.config.bank_name.to_uppercase())?;
        writeln!(output, "-------------------------------------")?;
        writeln!(output, "1. Create New Account")?;
        writeln!(output, "2. Select Existing Account")?;
        writeln!(output, "3. List All Accounts")?;
        writeln!(output, "4. Exit")?;
        writeln!(output, "-------------------------------------")?;
        write!(output, "Enter your choice: ")?;
        output.flush()?;
        Ok(())
    }

    // =========================================================================
    // Account creation
    // =========================================================================

    fn create_account<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> AppResult<()> {
        let name = prompt(input, output, "Enter customer name: ")?;
        if name.is_empty() {
            return Err(AppError::InvalidInput("customer name is empty".to_string()));
        }

        let number = prompt(input, output, "Enter account number: ")?;
        if number.is_empty() {
            return Err(AppError::InvalidInput("account number is empty".to_string()));
        }

        writeln!(output, "\nSelect Account Type:")?;
        writeln!(output, "1. Savings Account")?;
        writeln!(output, "2. Checking Account")?;
        writeln!(output, "3. Standard Account")?;
        let kind_choice = prompt(input, output, "Enter choice: ")?;

        let kind = match kind_choice.as_str() {
            "1" => {
                let rate = parse_decimal(&prompt(input, output, "Enter interest rate: ")?)?;
                AccountKind::Savings {
                    interest_rate: rate,
                }
            }
            "2" => {
                let fee = Amount::from_str(&prompt(input, output, "Enter transaction fee: ")?)?;
                AccountKind::Checking {
                    transaction_fee: fee,
                }
            }
            "3" => AccountKind::Standard,
            other => {
                return Err(AppError::InvalidInput(format!(
                    "unknown account type '{}'",
                    other
                )))
            }
        };

        let opening = prompt(input, output, "Enter opening balance (blank for 0): ")?;
        let balance = if opening.is_empty() {
            Balance::zero()
        } else {
            Balance::new(parse_decimal(&opening)?)?
        };

        let account = Account::new(name, number.clone(), kind).with_opening_balance(balance);
        let label = account.kind().label();
        self.bank.add_account(account)?;

        tracing::info!(number = %number, kind = %label, "account created");
        writeln!(output, "{} created successfully.", label)?;
        Ok(())
    }

    // =========================================================================
    // Account submenu
    // =========================================================================

    fn select_account<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> AppResult<()> {
        let number = prompt(input, output, "Enter account number: ")?;

        // Fail fast on a miss before entering the submenu
        self.bank.get_account(&number)?;

        loop {
            self.print_account_menu(output)?;

            let choice = match read_line(input)? {
                Some(line) => line,
                None => return Ok(()),
            };

            let result = match choice.as_str() {
                "1" => self.deposit(&number, input, output),
                "2" => self.withdraw(&number, input, output),
                "3" => self.check_balance(&number, output),
                "4" => self.show_history(&number, output),
                "5" => self.apply_interest(&number, output),
                "6" => self.export_account(&number, output),
                "7" => return Ok(()),
                other => Err(AppError::InvalidInput(format!(
                    "unknown menu choice '{}'",
                    other
                ))),
            };

            self.report(result, output)?;
        }
    }

    fn print_account_menu<W: Write>(&self, output: &mut W) -> AppResult<()> {
        writeln!(output, "\n------ Account Menu ------")?;
        writeln!(output, "1. Deposit")?;
        writeln!(output, "2. Withdraw")?;
        writeln!(output, "3. Check Balance")?;
        writeln!(output, "4. View Transaction History")?;
        writeln!(output, "5. Apply Interest")?;
        writeln!(output, "6. Export Account (JSON)")?;
        writeln!(output, "7. Back to Main Menu")?;
        writeln!(output, "--------------------------")?;
        write!(output, "Enter your choice: ")?;
        output.flush()?;
        Ok(())
    }

    fn deposit<R: BufRead, W: Write>(
        &mut self,
        number: &str,
        input: &mut R,
        output: &mut W,
    ) -> AppResult<()> {
        let amount = parse_decimal(&prompt(input, output, "Enter deposit amount: ")?)?;

        let account = self.bank.get_account_mut(number)?;
        let balance = account.deposit(amount)?;

        tracing::info!(number = %number, %amount, "deposit applied");
        writeln!(
            output,
            "Successfully deposited {}{}. New balance: {}{}",
            self.config.currency_symbol, amount, self.config.currency_symbol, balance
        )?;
        Ok(())
    }

    fn withdraw<R: BufRead, W: Write>(
        &mut self,
        number: &str,
        input: &mut R,
        output: &mut W,
    ) -> AppResult<()> {
        let amount = parse_decimal(&prompt(input, output, "Enter withdrawal amount: ")?)?;

        let account = self.bank.get_account_mut(number)?;
        let balance = account.withdraw(amount)?;

        tracing::info!(number = %number, %amount, "withdrawal applied");
        writeln!(
            output,
            "Successfully withdrew {}{}. New balance: {}{}",
            self.config.currency_symbol, amount, self.config.currency_symbol, balance
        )?;
        Ok(())
    }

    fn check_balance<W: Write>(&self, number: &str, output: &mut W) -> AppResult<()> {
        let account = self.bank.get_account(number)?;
        writeln!(
            output,
            "Current Balance: {}{}",
            self.config.currency_symbol,
            account.balance()
        )?;
        Ok(())
    }

    fn show_history<W: Write>(&self, number: &str, output: &mut W) -> AppResult<()> {
        let account = self.bank.get_account(number)?;

        if account.history().is_empty() {
            writeln!(output, "No transactions available.")?;
            return Ok(());
        }

        writeln!(output, "\nTransaction History:")?;
        for record in account.history() {
            writeln!(output, "- {}", record)?;
        }
        Ok(())
    }

    fn apply_interest<W: Write>(&mut self, number: &str, output: &mut W) -> AppResult<()> {
        let account = self.bank.get_account_mut(number)?;
        let interest = account.apply_interest()?;
        let balance = *account.balance();

        tracing::info!(number = %number, %interest, "interest applied");
        writeln!(
            output,
            "Interest of {}{} added. New balance: {}{}",
            self.config.currency_symbol, interest, self.config.currency_symbol, balance
        )?;
        Ok(())
    }

    fn export_account<W: Write>(&self, number: &str, output: &mut W) -> AppResult<()> {
        let account = self.bank.get_account(number)?;
        let json = serde_json::to_string_pretty(account)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        writeln!(output, "{}", json)?;
        Ok(())
    }

    fn list_accounts<W: Write>(&self, output: &mut W) -> AppResult<()> {
        if self.bank.is_empty() {
            writeln!(output, "No accounts found in the system.")?;
            return Ok(());
        }

        writeln!(output, "\n------ List of Accounts ------")?;
        for summary in self.bank.list_accounts() {
            writeln!(output, "{}", summary)?;
        }
        writeln!(output, "------------------------------")?;
        Ok(())
    }

    /// Print recoverable errors and keep going; propagate fatal ones
    fn report<W: Write>(&self, result: AppResult<()>, output: &mut W) -> AppResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(err) if err.is_recoverable() => {
                tracing::warn!(error = %err, "operation rejected");
                writeln!(output, "{}", err.user_message())?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

/// Read one trimmed line; `None` on end of input
fn read_line<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Write a prompt and read the reply
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> AppResult<String> {
    write!(output, "{}", text)?;
    output.flush()?;
    match read_line(input)? {
        Some(line) => Ok(line),
        None => Err(AppError::InvalidInput("unexpected end of input".to_string())),
    }
}

/// Parse a decimal value, mapping parse failures to invalid input
fn parse_decimal(raw: &str) -> AppResult<Decimal> {
    Decimal::from_str(raw.trim())
        .map_err(|_| AppError::InvalidInput(format!("'{}' is not a number", raw)))
}
