//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod export;
pub mod report;
pub mod transaction;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{handle_categories_command, handle_totals_command, CategoriesArgs, TotalsArgs};
pub use transaction::{
    handle_add_command, handle_delete_command, handle_list_command, handle_show_command, AddArgs,
    DeleteArgs, ListArgs, ShowArgs,
};

use clap::ValueEnum;

use crate::models::TransactionKind;

/// Transaction kind as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}
