//! Transaction model
//!
//! A transaction is a single income or expense record. Transactions are
//! created whole by the ledger and never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction brings money in or takes it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }

    /// Lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// The caller-supplied part of a transaction
///
/// Everything except the id and the kind, which the ledger assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

impl NewTransaction {
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
            description: description.into(),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount, always a non-negative value; the kind carries the direction
    pub amount: Money,

    /// Free-form category label
    pub category: String,

    /// Date the transaction happened (not when it was recorded)
    pub date: NaiveDate,

    /// Optional note
    #[serde(default)]
    pub description: String,

    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a new transaction with a freshly generated id
    pub fn new(input: NewTransaction, kind: TransactionKind) -> Self {
        Self {
            id: TransactionId::new(),
            amount: input.amount,
            category: input.category,
            date: input.date,
            description: input.description,
            kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Amount with the kind's direction applied (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let signed = self.signed_amount();
        write!(
            f,
            "{} {}{} {} ({})",
            self.date.format("%Y-%m-%d"),
            if signed.is_negative() { '-' } else { '+' },
            signed.abs(),
            self.category,
            self.id
        )
    }
}
