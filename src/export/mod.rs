//! Export module for my-finances
//!
//! Provides ledger export in multiple formats:
//! - CSV: one row per transaction (spreadsheet-compatible)
//! - JSON: machine-readable export with totals
//! - YAML: human-readable export with totals

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
