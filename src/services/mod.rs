//! Service layer for my-finances
//!
//! The service layer provides business logic on top of the storage layer:
//! the ledger store itself and validation of user-entered forms.

pub mod form;
pub mod ledger;

pub use form::{parse_date, TransactionForm, MISSING_FIELDS_MESSAGE};
pub use ledger::{Ledger, TransactionFilter};
