//! Transaction CLI commands
//!
//! Implements CLI commands for adding, deleting, listing and showing
//! transactions.

use clap::Args;
use tracing::debug;

use crate::config::Settings;
use crate::display::{format_filtered_register, format_signed_amount, format_transaction_details};
use crate::error::{FinanceError, FinanceResult};
use crate::models::category::is_suggested;
use crate::models::TransactionKind;
use crate::services::form::DATE_FORMAT;
use crate::services::{parse_date, Ledger, TransactionFilter, TransactionForm};
use crate::storage::KeyValueStore;

use super::KindArg;

/// Arguments shared by `income` and `expense`
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Amount (e.g., "25.50"), never negative
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Category name
    #[arg(short, long)]
    pub category: Option<String>,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Free-text description
    #[arg(short = 'm', long)]
    pub description: Option<String>,
}

/// Arguments for `delete`
#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Transaction ID (full UUID, txn-xxxxxxxx, or a unique prefix)
    pub id: String,
}

/// Arguments for `show`
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Transaction ID (full UUID, txn-xxxxxxxx, or a unique prefix)
    pub id: String,
}

/// Arguments for `list`
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Only show income or expenses
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
    /// Filter by category name
    #[arg(short = 'C', long)]
    pub category: Option<String>,
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
    /// Number of transactions to show (defaults to the configured limit)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Handle `income` / `expense`
pub fn handle_add_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    kind: TransactionKind,
    args: AddArgs,
) -> FinanceResult<()> {
    let category = match (args.category, kind) {
        (Some(category), _) => category,
        (None, TransactionKind::Income) => settings.default_income_category.clone(),
        (None, TransactionKind::Expense) => String::new(),
    };
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive().format(DATE_FORMAT).to_string());

    let form = TransactionForm::new(
        args.amount,
        category,
        date,
        args.description.unwrap_or_default(),
    );
    let input = form.validate()?;

    if !is_suggested(kind, &input.category) {
        debug!(category = %input.category, "category is not one of the suggestions");
    }

    let txn = ledger.add_transaction(input, kind);
    println!(
        "Added {}: {}  {}  {}",
        kind.as_str(),
        txn.id,
        format_signed_amount(txn, settings),
        txn.category
    );

    check_persisted(ledger)
}

/// Handle `delete`
///
/// An id that matches nothing is reported but is not an error.
pub fn handle_delete_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    args: DeleteArgs,
) -> FinanceResult<()> {
    let id = match ledger.resolve_id(&args.id) {
        Ok(id) => id,
        Err(e) if e.is_not_found() => {
            println!("No transaction matches '{}'. Nothing deleted.", args.id);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    match ledger.delete_transaction(id) {
        Some(txn) => println!(
            "Deleted {}: {}  {}",
            txn.id,
            format_signed_amount(&txn, settings),
            txn.category
        ),
        None => println!("No transaction matches '{}'. Nothing deleted.", args.id),
    }

    check_persisted(ledger)
}

/// Handle `list`
pub fn handle_list_command<S: KeyValueStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
    args: ListArgs,
) -> FinanceResult<()> {
    let mut filter = TransactionFilter::new().limit(args.limit.unwrap_or(settings.list_limit));

    if let Some(kind) = args.kind {
        filter = filter.kind(kind.into());
    }
    if let Some(category) = args.category {
        filter = filter.category(category);
    }
    if let Some(from) = args.from {
        filter = filter.since(parse_date(&from)?);
    }
    if let Some(to) = args.to {
        filter = filter.until(parse_date(&to)?);
    }

    let transactions = ledger.list(&filter);
    debug!(shown = transactions.len(), total = ledger.len(), "listing transactions");

    print!(
        "{}",
        format_filtered_register(&transactions, ledger.len(), settings)
    );

    Ok(())
}

/// Handle `show`
pub fn handle_show_command<S: KeyValueStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
    args: ShowArgs,
) -> FinanceResult<()> {
    let id = ledger.resolve_id(&args.id)?;
    let txn = ledger
        .get(id)
        .ok_or_else(|| FinanceError::transaction_not_found(&args.id))?;

    print!("{}", format_transaction_details(txn, settings));
    Ok(())
}

/// Surface a failed save after a mutation
///
/// The ledger keeps the change in memory, but a CLI process exits right
/// after, so the failure is reported as an error.
fn check_persisted<S: KeyValueStore>(ledger: &mut Ledger<S>) -> FinanceResult<()> {
    match ledger.take_persistence_warning() {
        Some(err) => Err(FinanceError::Storage(format!(
            "change could not be saved: {}",
            err
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn ledger() -> Ledger<MemoryStore> {
        Ledger::initialize(MemoryStore::new()).unwrap()
    }

    fn add_args(amount: &str, category: Option<&str>) -> AddArgs {
        AddArgs {
            amount: amount.to_string(),
            category: category.map(str::to_string),
            date: Some("2024-01-10".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_income_defaults_category() {
        let mut ledger = ledger();
        let settings = Settings::default();

        handle_add_command(&mut ledger, &settings, TransactionKind::Income, add_args("1000", None))
            .unwrap();

        assert_eq!(ledger.transactions()[0].category, "Salary");
        assert!(ledger.transactions()[0].is_income());
    }

    #[test]
    fn test_expense_requires_category() {
        let mut ledger = ledger();
        let settings = Settings::default();

        let err = handle_add_command(
            &mut ledger,
            &settings,
            TransactionKind::Expense,
            add_args("25.50", None),
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_date_defaults_to_today() {
        let mut ledger = ledger();
        let settings = Settings::default();
        let mut args = add_args("5", Some("Food"));
        args.date = None;

        handle_add_command(&mut ledger, &settings, TransactionKind::Expense, args).unwrap();

        assert_eq!(ledger.transactions()[0].date, chrono::Local::now().date_naive());
    }

    #[test]
    fn test_delete_unknown_is_ok() {
        let mut ledger = ledger();
        let settings = Settings::default();

        handle_delete_command(
            &mut ledger,
            &settings,
            DeleteArgs {
                id: "deadbeef".to_string(),
            },
        )
        .unwrap();
    }

    #[test]
    fn test_delete_by_short_id() {
        let mut ledger = ledger();
        let settings = Settings::default();
        handle_add_command(
            &mut ledger,
            &settings,
            TransactionKind::Expense,
            add_args("25.50", Some("Food")),
        )
        .unwrap();
        let short = ledger.transactions()[0].id.to_string();

        handle_delete_command(&mut ledger, &settings, DeleteArgs { id: short }).unwrap();

        assert!(ledger.is_empty());
    }

    #[test]
    fn test_list_rejects_bad_date() {
        let ledger = ledger();
        let settings = Settings::default();
        let args = ListArgs {
            from: Some("yesterday".to_string()),
            ..Default::default()
        };

        let err = handle_list_command(&ledger, &settings, args).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidDate(_)));
    }

    #[test]
    fn test_show_unknown_is_not_found() {
        let ledger = ledger();
        let settings = Settings::default();

        let err = handle_show_command(
            &ledger,
            &settings,
            ShowArgs {
                id: "txn-12345678".to_string(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
