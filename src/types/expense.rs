//! Expense types for the expense tracker
//!
//! [`Expense`] is a validated record about to be written to the ledger.
//! [`StoredExpense`] is a row decoded back out of the ledger, with the amount
//! kept exactly as it was stored.

use crate::core::validation::{lenient_amount, validate_amount, validate_non_empty};
use crate::types::error::ValidationError;
use rust_decimal::Decimal;
use std::fmt;

/// A validated expense record
///
/// Invariants (enforced by [`Expense::new`]):
/// - `amount` is greater than zero and has at most two decimal places
/// - `category` and `description` are trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    amount: Decimal,
    category: String,
    description: String,
}

impl Expense {
    /// Build an expense, validating every field
    ///
    /// The amount is rounded to cents; text fields are trimmed.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking the amount, then the
    /// category, then the description.
    pub fn new(
        amount: Decimal,
        category: &str,
        description: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Expense {
            amount: validate_amount(amount, &amount.to_string())?,
            category: validate_non_empty(category, "Category")?,
            description: validate_non_empty(description, "Description")?,
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A row decoded from the ledger
///
/// The amount is the raw stored text; a hand-edited ledger may hold anything
/// there, so it is only turned into a number by [`StoredExpense::amount_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredExpense {
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl StoredExpense {
    /// Build a stored expense from decoded ledger fields
    ///
    /// Returns `None` for rows with fewer than three fields. Extra fields are
    /// ignored.
    pub fn from_fields(fields: Vec<String>) -> Option<Self> {
        let mut fields = fields.into_iter();
        let amount = fields.next()?;
        let category = fields.next()?;
        let description = fields.next()?;

        Some(StoredExpense {
            amount,
            category,
            description,
        })
    }

    /// Numeric value of the stored amount, zero when it does not parse
    pub fn amount_value(&self) -> Decimal {
        lenient_amount(&self.amount)
    }
}

impl fmt::Display for StoredExpense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "₹{} | {} | {}",
            self.amount, self.category, self.description
        )
    }
}
