//! Core data models for my-finances
//!
//! This module contains the data structures of the ledger domain:
//! transactions, their ids, and money amounts.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{suggested_categories, DEFAULT_INCOME_CATEGORY};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError, MAX_AMOUNT_CENTS};
pub use transaction::{NewTransaction, Transaction, TransactionKind};
