//! Reports over the ledger
//!
//! - `totals`: income, expenses and balance
//! - `breakdown`: per-category totals for one kind

pub mod breakdown;
pub mod totals;

pub use breakdown::{CategoryBreakdown, CategoryTotal};
pub use totals::Totals;
