//! Shared helpers for integration tests

use std::io::Cursor;

use rust_decimal::Decimal;
use securebank::{Account, Amount, Balance, Bank, Config, Session};

/// Build a bank pre-loaded with one account of each kind
pub fn seeded_bank() -> Bank {
    let mut bank = Bank::new();

    bank.add_account(funded(Account::standard("Alice", "ACC-001"), Decimal::new(100, 0)))
        .unwrap();
    bank.add_account(funded(
        Account::checking("Bob", "ACC-002", Amount::new(Decimal::new(5, 0)).unwrap()),
        Decimal::new(100, 0),
    ))
    .unwrap();
    bank.add_account(funded(
        Account::savings("Carol", "ACC-003", Decimal::new(5, 0)),
        Decimal::new(1000, 0),
    ))
    .unwrap();

    bank
}

/// Give an account an opening balance
pub fn funded(account: Account, balance: Decimal) -> Account {
    account.with_opening_balance(Balance::new(balance).unwrap())
}

/// Run a full scripted session and return it with the captured output
pub fn run_script(script: &str) -> (Session, String) {
    let mut session = Session::new(Config::default());
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();

    session
        .run(&mut input, &mut output)
        .expect("session should survive scripted input");

    (session, String::from_utf8(output).expect("output is utf-8"))
}
