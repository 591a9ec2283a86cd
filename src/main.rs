use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use my_finances::cli::{
    handle_add_command, handle_categories_command, handle_delete_command, handle_export_command,
    handle_list_command, handle_show_command, handle_totals_command, AddArgs, CategoriesArgs,
    DeleteArgs, ExportArgs, ListArgs, ShowArgs, TotalsArgs,
};
use my_finances::config::paths::DATA_DIR_ENV;
use my_finances::config::{FinancePaths, Settings};
use my_finances::logging::init_logging;
use my_finances::models::TransactionKind;
use my_finances::services::Ledger;
use my_finances::storage::open_file_store;

#[derive(Parser)]
#[command(
    name = "finances",
    version,
    about = "Track personal income and expenses from the command line",
    long_about = "my-finances keeps an ordered ledger of income and expense \
                  transactions, shows running totals and category breakdowns, \
                  and saves everything locally after every change."
)]
struct Cli {
    /// Directory holding settings and ledger data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record income
    Income(AddArgs),

    /// Record an expense
    Expense(AddArgs),

    /// Delete a transaction
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// List transactions, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show transaction details
    Show(ShowArgs),

    /// Show total income, balance and expenses
    Totals(TotalsArgs),

    /// Show suggested categories
    Categories(CategoriesArgs),

    /// Export the ledger
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = FinancePaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(Commands::Categories(args)) => {
            handle_categories_command(args)?;
            return Ok(());
        }
        Some(Commands::Config) => {
            print_config(&paths, &settings);
            return Ok(());
        }
        Some(command) => command,
        None => {
            println!("my-finances - personal income and expense tracker");
            println!();
            println!("Run 'finances --help' for usage information.");
            return Ok(());
        }
    };

    // Load the ledger
    let store = open_file_store(&paths)?;
    let mut ledger = Ledger::initialize(store)?;

    match command {
        Commands::Income(args) => {
            handle_add_command(&mut ledger, &settings, TransactionKind::Income, args)?
        }
        Commands::Expense(args) => {
            handle_add_command(&mut ledger, &settings, TransactionKind::Expense, args)?
        }
        Commands::Delete(args) => handle_delete_command(&mut ledger, &settings, args)?,
        Commands::List(args) => handle_list_command(&ledger, &settings, args)?,
        Commands::Show(args) => handle_show_command(&ledger, &settings, args)?,
        Commands::Totals(args) => handle_totals_command(&ledger, &settings, args)?,
        Commands::Export(args) => handle_export_command(&ledger, args)?,
        Commands::Categories(_) | Commands::Config => {}
    }

    Ok(())
}

fn print_config(paths: &FinancePaths, settings: &Settings) {
    println!("my-finances Configuration");
    println!("=========================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Ledger file:      {}", paths.transactions_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:         {}", settings.currency_symbol);
    println!("  Date format:             {}", settings.date_format);
    println!("  Default income category: {}", settings.default_income_category);
    println!("  List limit:              {}", settings.list_limit);
}
