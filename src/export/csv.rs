//! CSV Export functionality
//!
//! One row per transaction, newest first, spreadsheet-compatible.

use serde::Serialize;
use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;

#[derive(Serialize)]
struct CsvRow<'a> {
    id: String,
    date: String,
    #[serde(rename = "type")]
    kind: &'static str,
    category: &'a str,
    description: &'a str,
    amount: String,
}

impl<'a> From<&'a Transaction> for CsvRow<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            id: txn.id.as_uuid().to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.as_str(),
            category: &txn.category,
            description: &txn.description,
            amount: txn.amount.format_with_symbol(""),
        }
    }
}

/// Export transactions to CSV
///
/// Header: `id,date,type,category,description,amount`. Amounts are plain
/// decimals with two places and no currency symbol.
pub fn export_transactions_csv<W: Write>(transactions: &[Transaction], writer: W) -> FinanceResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for txn in transactions {
        wtr.serialize(CsvRow::from(txn))
            .map_err(|e| FinanceError::Export(e.to_string()))?;
    }

    // Header only for an empty ledger
    if transactions.is_empty() {
        wtr.write_record(["id", "date", "type", "category", "description", "amount"])
            .map_err(|e| FinanceError::Export(e.to_string()))?;
    }

    wtr.flush().map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}
