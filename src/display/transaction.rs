//! Transaction display formatting
//!
//! Register rows and detail views for terminal output.

use crate::config::Settings;
use crate::models::Transaction;

use super::format_date;

/// Shown instead of an empty register
pub const EMPTY_LEDGER_MESSAGE: &str = "Add your first income or expense!";

/// Shown when the ledger has transactions but a filter matched none
pub const NO_MATCHES_MESSAGE: &str = "No transactions match the filter.";

/// Amount with its direction sign, e.g. `+$1000.00` or `-$25.50`
///
/// The sign is that of the amount's effect on the balance, so a negative
/// stored expense shows as `+`.
pub fn format_signed_amount(txn: &Transaction, settings: &Settings) -> String {
    let signed = txn.signed_amount();
    let sign = if signed.is_negative() { '-' } else { '+' };
    format!(
        "{}{}",
        sign,
        signed.abs().format_with_symbol(&settings.currency_symbol)
    )
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    let mut row = format!(
        "{:12} {:10} {:>14}  {}",
        txn.id.to_string(),
        format_date(txn.date, settings),
        format_signed_amount(txn, settings),
        txn.category
    );

    if !txn.description.is_empty() {
        row.push_str(&format!(" - {}", txn.description));
    }

    row
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[&Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return format!("{}\n", EMPTY_LEDGER_MESSAGE);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:>14}  {}\n",
        "ID", "Date", "Amount", "Category"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output
}

/// Format a filtered view of a ledger holding `ledger_len` transactions
///
/// Adds a "Showing X of Y" footer when some transactions were left out.
pub fn format_filtered_register(
    shown: &[&Transaction],
    ledger_len: usize,
    settings: &Settings,
) -> String {
    if shown.is_empty() && ledger_len > 0 {
        return format!("{}\n", NO_MATCHES_MESSAGE);
    }

    let mut output = format_transaction_register(shown, settings);
    if shown.len() < ledger_len {
        output.push_str(&format!(
            "\nShowing {} of {} transactions\n",
            shown.len(),
            ledger_len
        ));
    }
    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Full ID:     {}\n", txn.id.as_uuid()));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Date:        {}\n", format_date(txn.date, settings)));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_signed_amount(txn, settings)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}
