//! Suggested categories
//!
//! Categories are free-form labels. These lists are only offered as
//! suggestions to the user; the ledger accepts any category text.

use super::transaction::TransactionKind;

/// Categories suggested for expenses
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Utilities",
    "Entertainment",
    "Shopping",
    "Health",
    "Education",
    "Other",
];

/// Categories suggested for income
pub const INCOME_CATEGORIES: &[&str] = &["Salary", "Freelance", "Gift", "Investment", "Other"];

/// Category pre-selected for new income
pub const DEFAULT_INCOME_CATEGORY: &str = "Salary";

/// Get the suggested categories for a transaction kind
pub fn suggested_categories(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    }
}

/// Check whether a category is one of the suggestions for a kind (case-insensitive)
pub fn is_suggested(kind: TransactionKind, category: &str) -> bool {
    suggested_categories(kind)
        .iter()
        .any(|c| c.eq_ignore_ascii_case(category.trim()))
}
