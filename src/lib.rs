//! my-finances - personal income and expense ledger
//!
//! This library provides the core of a small personal finance tracker: an
//! ordered ledger of income and expense transactions, aggregate totals,
//! and persistence of the whole ledger as one versioned JSON blob in a
//! key-value store.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, categories)
//! - `storage`: Key-value stores and the transaction blob codec
//! - `services`: The ledger and form validation
//! - `reports`: Totals and category breakdowns
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers used by the `finances` binary
//! - `logging`: Subscriber setup for `tracing`
//!
//! # Example
//!
//! ```rust,ignore
//! use my_finances::services::{Ledger, TransactionForm};
//! use my_finances::storage::MemoryStore;
//!
//! let mut ledger = Ledger::initialize(MemoryStore::new())?;
//! let input = TransactionForm::new("25.50", "Food", "2024-01-10", "Lunch").validate()?;
//! ledger.add_expense(input);
//! println!("{}", ledger.totals().balance);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
