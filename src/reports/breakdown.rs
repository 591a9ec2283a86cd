//! Category breakdown
//!
//! Per-category totals for one transaction kind, largest first.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Money, Transaction, TransactionKind};

/// Totals for a single category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Category label as entered
    pub category: String,
    /// Sum of amounts in this category
    pub total: Money,
    /// Number of transactions
    pub transaction_count: usize,
    /// Share of the kind's total, 0-100
    pub percentage: f64,
}

/// Breakdown of one kind's transactions by category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub kind: TransactionKind,
    pub categories: Vec<CategoryTotal>,
    pub total: Money,
}

impl CategoryBreakdown {
    /// Group transactions of `kind` by category
    ///
    /// Categories are matched exactly; sorted by total descending, then name.
    pub fn generate<'a, I>(transactions: I, kind: TransactionKind) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();
        let mut total = Money::zero();

        for txn in transactions.into_iter().filter(|t| t.kind == kind) {
            let entry = by_category
                .entry(txn.category.as_str())
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
            total += txn.amount;
        }

        let mut categories: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, (sum, count))| CategoryTotal {
                category: category.to_string(),
                total: sum,
                transaction_count: count,
                percentage: if total.is_zero() {
                    0.0
                } else {
                    sum.cents() as f64 * 100.0 / total.cents() as f64
                },
            })
            .collect();

        categories.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            kind,
            categories,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
