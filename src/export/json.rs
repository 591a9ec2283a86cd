//! JSON Export functionality
//!
//! Exports the full ledger with totals and schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;
use crate::reports::Totals;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Totals at the time of export
    pub totals: Totals,

    /// All transactions, newest first
    pub transactions: Vec<Transaction>,
}

impl FullExport {
    /// Create a new full export from the ledger's transactions
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            totals: Totals::compute(transactions),
            transactions: transactions.to_vec(),
        }
    }
}

/// Export the ledger as pretty-printed JSON
pub fn export_full_json<W: Write>(transactions: &[Transaction], writer: &mut W) -> FinanceResult<()> {
    let export = FullExport::from_transactions(transactions);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction, TransactionKind};
    use chrono::NaiveDate;

    #[test]
    fn test_json_export_round_trips() {
        let transactions = vec![Transaction::new(
            NewTransaction::new(
                Money::from_cents(2550),
                "Food",
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                "Lunch",
            ),
            TransactionKind::Expense,
        )];

        let mut out = Vec::new();
        export_full_json(&transactions, &mut out).unwrap();

        let parsed: FullExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.transactions, transactions);
        assert_eq!(parsed.totals.balance, Money::from_cents(-2550));
    }

    #[test]
    fn test_empty_export() {
        let mut out = Vec::new();
        export_full_json(&[], &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["transactions"].as_array().unwrap().len(), 0);
        assert_eq!(value["totals"]["income"], 0.0);
    }
}
