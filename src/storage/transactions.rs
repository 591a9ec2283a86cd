//! Transaction repository
//!
//! Serializes the whole ledger as one blob under the `transactions` key.
//! Every save rewrites the full sequence; there are no partial updates.
//!
//! Blob layout:
//!
//! ```json
//! { "version": 1, "transactions": [ { "id": "...", "amount": 25.5, ... } ] }
//! ```
//!
//! A bare JSON array of records (the un-versioned layout) is still accepted
//! on load and gets rewritten in the versioned layout on the next save.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Transaction};

use super::kv::KeyValueStore;

/// Key the ledger is stored under
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Key an unreadable ledger blob is copied to before it is replaced
pub const QUARANTINE_KEY: &str = "transactions.corrupt";

/// Current blob layout version
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct TransactionDataRef<'a> {
    version: u32,
    transactions: &'a [Transaction],
}

#[derive(Deserialize)]
struct TransactionData {
    version: u32,
    transactions: Vec<Transaction>,
}

/// Encode a transaction sequence as a versioned blob
pub fn encode(transactions: &[Transaction]) -> FinanceResult<String> {
    let data = TransactionDataRef {
        version: SCHEMA_VERSION,
        transactions,
    };
    serde_json::to_string_pretty(&data)
        .map_err(|e| FinanceError::Storage(format!("Failed to serialize transactions: {}", e)))
}

/// Decode a stored blob in either the versioned or the legacy array layout
///
/// Amounts with digits below one cent are rounded to the nearest cent and
/// logged; the rounded value is what the next save writes back.
pub fn decode(raw: &str) -> FinanceResult<Vec<Transaction>> {
    let corrupt = |msg: String| FinanceError::CorruptState(msg);

    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| corrupt(format!("not valid JSON: {}", e)))?;

    for (id, amount) in sub_cent_amounts(&value) {
        warn!(id = %id, amount, "stored amount has sub-cent digits, rounded to cents");
    }

    let transactions: Vec<Transaction> = match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)
            .map_err(|e| corrupt(format!("invalid transaction record: {}", e)))?,
        serde_json::Value::Object(_) => {
            let data: TransactionData = serde_json::from_value(value)
                .map_err(|e| corrupt(format!("invalid ledger envelope: {}", e)))?;
            if data.version > SCHEMA_VERSION {
                return Err(corrupt(format!(
                    "unsupported ledger version {} (newest supported is {})",
                    data.version, SCHEMA_VERSION
                )));
            }
            data.transactions
        }
        other => {
            return Err(corrupt(format!(
                "expected an object or array, found {}",
                json_type_name(&other)
            )))
        }
    };

    let mut seen = HashSet::with_capacity(transactions.len());
    for txn in &transactions {
        if !seen.insert(txn.id) {
            return Err(corrupt(format!(
                "duplicate transaction id {}",
                txn.id.as_uuid()
            )));
        }
    }

    Ok(transactions)
}

/// Records whose stored amount is not a whole number of cents, as `(id, amount)`
pub fn sub_cent_amounts(value: &serde_json::Value) -> Vec<(String, f64)> {
    let records: &[serde_json::Value] = match value {
        serde_json::Value::Array(records) => records.as_slice(),
        serde_json::Value::Object(map) => match map.get("transactions") {
            Some(serde_json::Value::Array(records)) => records.as_slice(),
            _ => &[],
        },
        _ => &[],
    };

    records
        .iter()
        .filter_map(|record| {
            let amount = record.get("amount")?.as_f64()?;
            if !Money::has_sub_cent_part(amount) {
                return None;
            }
            let id = record
                .get("id")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("<no id>");
            Some((id.to_string(), amount))
        })
        .collect()
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Loads and saves the full transaction sequence through a key-value store
pub struct TransactionRepository<S> {
    store: S,
}

impl<S: KeyValueStore> TransactionRepository<S> {
    /// Create a new transaction repository
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored sequence, or an empty one if nothing has been saved
    ///
    /// Returns `FinanceError::CorruptState` if a blob exists but cannot be
    /// decoded.
    pub fn load(&self) -> FinanceResult<Vec<Transaction>> {
        match self.store.get(TRANSACTIONS_KEY)? {
            None => {
                debug!("no stored ledger, starting empty");
                Ok(Vec::new())
            }
            Some(raw) => {
                let transactions = decode(&raw)?;
                debug!(count = transactions.len(), "loaded ledger");
                Ok(transactions)
            }
        }
    }

    /// Replace the stored sequence with `transactions`
    pub fn save(&mut self, transactions: &[Transaction]) -> FinanceResult<()> {
        let blob = encode(transactions)?;
        self.store.set(TRANSACTIONS_KEY, &blob)?;
        debug!(count = transactions.len(), "saved ledger");
        Ok(())
    }

    /// Copy the current raw blob to the quarantine key
    ///
    /// Returns whether there was anything to copy.
    pub fn quarantine(&mut self) -> FinanceResult<bool> {
        match self.store.get(TRANSACTIONS_KEY)? {
            Some(raw) => {
                self.store.set(QUARANTINE_KEY, &raw)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Get the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consume the repository and return the underlying store
    pub fn into_store(self) -> S {
        self.store
    }
}
