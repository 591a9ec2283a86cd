//! CLI commands for reports
//!
//! Totals, per-category breakdowns and the suggested category lists.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_breakdown, format_totals};
use crate::error::FinanceResult;
use crate::models::{suggested_categories, TransactionKind};
use crate::services::Ledger;
use crate::storage::KeyValueStore;

use super::KindArg;

/// Arguments for `totals`
#[derive(Args, Debug, Clone, Default)]
pub struct TotalsArgs {
    /// Also break totals down by category
    #[arg(short, long)]
    pub by_category: bool,
}

/// Arguments for `categories`
#[derive(Args, Debug, Clone, Default)]
pub struct CategoriesArgs {
    /// Only show categories for one kind
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
}

/// Handle `totals`
pub fn handle_totals_command<S: KeyValueStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
    args: TotalsArgs,
) -> FinanceResult<()> {
    print!("{}", format_totals(&ledger.totals(), settings));

    if args.by_category {
        for kind in [TransactionKind::Income, TransactionKind::Expense] {
            println!();
            print!("{}", format_breakdown(&ledger.breakdown(kind), settings));
        }
    }

    Ok(())
}

/// Handle `categories`
pub fn handle_categories_command(args: CategoriesArgs) -> FinanceResult<()> {
    let kinds = match args.kind {
        Some(kind) => vec![kind.into()],
        None => vec![TransactionKind::Income, TransactionKind::Expense],
    };

    for (i, kind) in kinds.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} categories:", kind);
        for category in suggested_categories(kind) {
            println!("  {}", category);
        }
    }

    Ok(())
}
