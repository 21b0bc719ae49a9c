//! Transactions, payment processors and a debiting account.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::Identity;
use crate::repository::{RepositoryError, TypedRepository};
use crate::Entity;

/// Monetary amount in minor units (cents).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn from_units(units: i64) -> Self {
        Money(units * 100)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Entity)]
pub struct Transaction {
    pub id: Identity,
    pub date: DateTime<Utc>,
    pub amount: Money,
    pub category: String,
}

impl Transaction {
    pub fn new(id: Identity, date: DateTime<Utc>, amount: Money, category: impl Into<String>) -> Self {
        Transaction {
            id,
            date,
            amount,
            category: category.into(),
        }
    }
}

/// A payment rail that turns a transaction into a receipt line.
pub trait TransactionProcessor {
    fn process(&self, transaction: &Transaction) -> String;
}

pub struct BankTransferProcessor;

impl TransactionProcessor for BankTransferProcessor {
    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "[Bank Transfer] Processed {} for {}.",
            transaction.amount, transaction.category
        )
    }
}

pub struct MobileMoneyProcessor;

impl TransactionProcessor for MobileMoneyProcessor {
    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "[Mobile Money] Sent {} for {}.",
            transaction.amount, transaction.category
        )
    }
}

pub struct CryptoWalletProcessor;

impl TransactionProcessor for CryptoWalletProcessor {
    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "[Crypto Wallet] Transferred {} for {}.",
            transaction.amount, transaction.category
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    /// Debits unconditionally; the balance may go negative.
    Standard,
    /// Refuses debits larger than the current balance.
    Savings,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinanceError {
    #[error("insufficient funds in {account}: requested {requested}, available {available}")]
    InsufficientFunds {
        account: String,
        requested: Money,
        available: Money,
    },

    #[error("balance overflow in {account}")]
    Overflow { account: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    number: String,
    balance: Money,
    kind: AccountKind,
}

impl Account {
    pub fn new(number: impl Into<String>, initial_balance: Money, kind: AccountKind) -> Self {
        Account {
            number: number.into(),
            balance: initial_balance,
            kind,
        }
    }

    pub fn savings(number: impl Into<String>, initial_balance: Money) -> Self {
        Self::new(number, initial_balance, AccountKind::Savings)
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Debit the transaction amount and return the new balance.
    ///
    /// A rejected debit leaves the balance untouched.
    pub fn apply(&mut self, transaction: &Transaction) -> Result<Money, FinanceError> {
        if self.kind == AccountKind::Savings && transaction.amount > self.balance {
            return Err(FinanceError::InsufficientFunds {
                account: self.number.clone(),
                requested: transaction.amount,
                available: self.balance,
            });
        }

        self.balance = self
            .balance
            .checked_sub(transaction.amount)
            .ok_or_else(|| FinanceError::Overflow {
                account: self.number.clone(),
            })?;
        Ok(self.balance)
    }
}

/// Outcome of [`Ledger::record`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub processor_line: String,
    pub balance: Money,
}

/// One account plus the history of transactions recorded against it.
pub struct Ledger {
    account: Account,
    transactions: TypedRepository<Transaction>,
}

impl Ledger {
    pub fn new(account: Account) -> Self {
        Ledger {
            account,
            transactions: TypedRepository::new(),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn transactions(&self) -> &TypedRepository<Transaction> {
        &self.transactions
    }

    /// Route a transaction through `processor`, debit the account and keep it in history.
    ///
    /// Nothing is recorded when the identity is already used or the debit is refused.
    pub fn record(
        &mut self,
        transaction: Transaction,
        processor: &dyn TransactionProcessor,
    ) -> Result<Receipt, FinanceError> {
        if self.transactions.contains(transaction.id) {
            return Err(RepositoryError::DuplicateIdentity { id: transaction.id }.into());
        }

        let processor_line = processor.process(&transaction);
        let balance = self.account.apply(&transaction)?;
        self.transactions.add(transaction)?;

        Ok(Receipt {
            processor_line,
            balance,
        })
    }
}
