//! Ledger totals
//!
//! Income, expenses and balance derived from a transaction sequence.

use serde::{Deserialize, Serialize};

use crate::models::{Money, Transaction, TransactionKind};

/// The three aggregate figures shown above the register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all income amounts
    pub income: Money,
    /// Sum of all expense amounts
    pub expenses: Money,
    /// `income - expenses`
    pub balance: Money,
}

impl Totals {
    /// Compute totals over a set of transactions
    pub fn compute<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut income = Money::zero();
        let mut expenses = Money::zero();

        for txn in transactions {
            match txn.kind {
                TransactionKind::Income => income += txn.amount,
                TransactionKind::Expense => expenses += txn.amount,
            }
        }

        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}
