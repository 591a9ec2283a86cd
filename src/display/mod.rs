//! Display formatting for terminal output
//!
//! Provides utilities for formatting the register, transaction details,
//! totals and category breakdowns.

pub mod totals;
pub mod transaction;

pub use totals::{format_breakdown, format_totals};
pub use transaction::{
    format_filtered_register, format_signed_amount, format_transaction_details,
    format_transaction_register, format_transaction_row, EMPTY_LEDGER_MESSAGE, NO_MATCHES_MESSAGE,
};

use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::Settings;

/// Format a date with the configured format, falling back to ISO
/// if the format string is invalid
pub fn format_date(date: NaiveDate, settings: &Settings) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(&settings.date_format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}
