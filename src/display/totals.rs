//! Totals and breakdown display formatting

use crate::config::Settings;
use crate::models::TransactionKind;
use crate::reports::{CategoryBreakdown, Totals};

/// Format the three totals, in the order income, balance, expenses
pub fn format_totals(totals: &Totals, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    format!(
        "Total Income:   {:>14}\nTotal Balance:  {:>14}\nTotal Expenses: {:>14}\n",
        totals.income.format_with_symbol(symbol),
        totals.balance.format_with_symbol(symbol),
        totals.expenses.format_with_symbol(symbol),
    )
}

/// Format a per-category breakdown as a table
pub fn format_breakdown(breakdown: &CategoryBreakdown, settings: &Settings) -> String {
    let title = match breakdown.kind {
        TransactionKind::Income => "Income by category",
        TransactionKind::Expense => "Expenses by category",
    };

    let mut output = format!("{}\n", title);

    if breakdown.is_empty() {
        output.push_str("  (none)\n");
        return output;
    }

    output.push_str(&format!(
        "{:20} {:>6} {:>14} {:>7}\n",
        "Category", "Count", "Amount", "Share"
    ));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for entry in &breakdown.categories {
        output.push_str(&format!(
            "{:20} {:>6} {:>14} {:>6.1}%\n",
            truncate(&entry.category, 20),
            entry.transaction_count,
            entry.total.format_with_symbol(&settings.currency_symbol),
            entry.percentage
        ));
    }

    let count: usize = breakdown.categories.iter().map(|c| c.transaction_count).sum();
    output.push_str(&"-".repeat(50));
    output.push('\n');
    output.push_str(&format!(
        "{:20} {:>6} {:>14}\n",
        "Total",
        count,
        breakdown.total.format_with_symbol(&settings.currency_symbol)
    ));

    output
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars - 1).collect();
        out.push('…');
        out
    }
}
