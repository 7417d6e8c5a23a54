// SPDX-License-Identifier: MPL-2.0
//! In-memory accounts and transactions shown by the demo screens.

use std::fmt;

pub type AccountId = u32;
pub type TransactionId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub balance_cents: i64,
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub account: AccountId,
    pub date: String,
    pub payee: String,
    pub amount_cents: i64,
}

/// Accounts plus their transactions.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// A small ledger so the screens have something to act on.
    #[must_use]
    pub fn sample() -> Self {
        let accounts = vec![
            account(1, "Checking", 245_318),
            account(2, "Savings", 1_200_000),
            account(3, "Credit card", -48_290),
        ];
        let transactions = vec![
            transaction(1, 1, "2026-10-01", "Rent", -120_000),
            transaction(2, 1, "2026-10-02", "Payroll", 310_000),
            transaction(3, 3, "2026-10-04", "Grocery Mart", -8_642),
            transaction(4, 3, "2026-10-06", "Coffee Corner", -475),
            transaction(5, 2, "2026-10-10", "Transfer from Checking", 50_000),
        ];
        Self {
            accounts,
            transactions,
        }
    }

    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    #[must_use]
    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Removes a transaction and adjusts its account balance.
    pub fn remove_transaction(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == id)?;
        let removed = self.transactions.remove(index);
        if let Some(account) = self.accounts.iter_mut().find(|a| a.id == removed.account) {
            account.balance_cents -= removed.amount_cents;
        }
        Some(removed)
    }

    /// Marks an account closed. Returns `false` if it was unknown or already closed.
    pub fn close_account(&mut self, id: AccountId) -> bool {
        match self.accounts.iter_mut().find(|a| a.id == id) {
            Some(account) if !account.closed => {
                account.closed = true;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn open_account_count(&self) -> usize {
        self.accounts.iter().filter(|a| !a.closed).count()
    }
}

fn account(id: AccountId, name: &str, balance_cents: i64) -> Account {
    Account {
        id,
        name: name.to_string(),
        balance_cents,
        closed: false,
    }
}

fn transaction(
    id: TransactionId,
    account: AccountId,
    date: &str,
    payee: &str,
    amount_cents: i64,
) -> Transaction {
    Transaction {
        id,
        account,
        date: date.to_string(),
        payee: payee.to_string(),
        amount_cents,
    }
}

/// Signed amount in cents, displayed with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(pub i64);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}
