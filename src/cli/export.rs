//! CLI command for data export
//!
//! Writes the ledger as CSV, JSON or YAML to a file or stdout.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::models::Transaction;
use crate::services::Ledger;
use crate::storage::KeyValueStore;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per transaction)
    Csv,
    /// JSON format (transactions and totals)
    Json,
    /// YAML format (transactions and totals, human-readable)
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `export`
pub fn handle_export_command<S: KeyValueStore>(
    ledger: &Ledger<S>,
    args: ExportArgs,
) -> FinanceResult<()> {
    let transactions = ledger.transactions();

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FinanceError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(transactions, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| FinanceError::Export(e.to_string()))?;

            println!(
                "Exported {} transactions to: {}",
                transactions.len(),
                path.display()
            );
        }
        None => {
            let mut writer = io::stdout().lock();
            write_export(transactions, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| FinanceError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    transactions: &[Transaction],
    format: ExportFormat,
    writer: &mut W,
) -> FinanceResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(transactions, writer),
        ExportFormat::Json => export_full_json(transactions, writer),
        ExportFormat::Yaml => export_full_yaml(transactions, writer),
    }
}
