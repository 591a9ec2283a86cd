//! Transaction form validation
//!
//! Raw user input is checked here before anything reaches the ledger. The
//! ledger itself trusts its input, so this is the only place amounts and
//! dates are parsed.

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, MoneyParseError, NewTransaction};

/// Message shown when amount, category or date is left blank
pub const MISSING_FIELDS_MESSAGE: &str =
    "Please fill in all required fields: Amount, Category, and Date.";

/// Input format for dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The fields of the add-income / add-expense form, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub amount: String,
    pub category: String,
    pub date: String,
    pub description: String,
}

impl TransactionForm {
    pub fn new(
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
            description: description.into(),
        }
    }

    /// Check required fields and parse the form into a transaction input
    ///
    /// # Errors
    ///
    /// - `Validation` if amount, category or date is blank
    /// - `InvalidAmount` if the amount is not a non-negative money value
    /// - `InvalidDate` if the date is not `YYYY-MM-DD`
    pub fn validate(&self) -> FinanceResult<NewTransaction> {
        let required = [&self.amount, &self.category, &self.date];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(FinanceError::Validation(MISSING_FIELDS_MESSAGE.into()));
        }

        let amount = Money::parse(&self.amount)?;
        if amount.is_negative() {
            return Err(MoneyParseError::Negative(self.amount.trim().to_string()).into());
        }

        let date = parse_date(&self.date)?;

        Ok(NewTransaction::new(
            amount,
            self.category.trim(),
            date,
            self.description.trim(),
        ))
    }
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(s: &str) -> FinanceResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| FinanceError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let form = TransactionForm::new("25.50", "Food", "2024-01-10", " Lunch ");
        let input = form.validate().unwrap();

        assert_eq!(input.amount.cents(), 2550);
        assert_eq!(input.category, "Food");
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(input.description, "Lunch");
    }

    #[test]
    fn test_description_is_optional() {
        let input = TransactionForm::new("1000", "Salary", "2024-01-01", "")
            .validate()
            .unwrap();
        assert_eq!(input.description, "");
    }

    #[test]
    fn test_missing_fields() {
        let cases = [
            TransactionForm::new("", "Food", "2024-01-10", ""),
            TransactionForm::new("10", "  ", "2024-01-10", ""),
            TransactionForm::new("10", "Food", "", ""),
            TransactionForm::default(),
        ];

        for form in cases {
            let err = form.validate().unwrap_err();
            assert!(matches!(err, FinanceError::Validation(ref m) if m == MISSING_FIELDS_MESSAGE));
        }
    }

    #[test]
    fn test_non_numeric_amount_is_typed_error() {
        let err = TransactionForm::new("twelve", "Food", "2024-01-10", "")
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            FinanceError::InvalidAmount(MoneyParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = TransactionForm::new("-5", "Food", "2024-01-10", "")
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            FinanceError::InvalidAmount(MoneyParseError::Negative(_))
        ));
    }

    #[test]
    fn test_invalid_date() {
        for date in ["10/01/2024", "2024-02-30", "yesterday"] {
            let err = TransactionForm::new("5", "Food", date, "")
                .validate()
                .unwrap_err();
            assert!(matches!(err, FinanceError::InvalidDate(_)), "{date}");
        }
    }
}
