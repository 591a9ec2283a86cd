//! YAML Export functionality
//!
//! Same content as the JSON export, for human-readable backups.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::FullExport;
use crate::models::Transaction;

/// Export the ledger to YAML format
pub fn export_full_yaml<W: Write>(transactions: &[Transaction], writer: &mut W) -> FinanceResult<()> {
    let export = FullExport::from_transactions(transactions);
    let to_export_err = |e: std::io::Error| FinanceError::Export(e.to_string());

    writeln!(writer, "# my-finances ledger export").map_err(to_export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_err)?;
    writeln!(writer).map_err(to_export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}
