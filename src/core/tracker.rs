//! Expense tracker service
//!
//! Orchestrates the three operations the CLI offers (add, list, total) over a
//! [`Ledger`], delegating:
//! - line encoding to `io::csv_format`
//! - file access to `io::ledger`
//! - validation and totals to `core::validation` and `core::aggregate`
//!
//! Nothing is cached: every listing or total re-reads the ledger from disk.

use crate::core::aggregate::{decode_expense, try_sum_amounts};
use crate::core::validation::{parse_amount, validate_non_empty};
use crate::io::csv_format::encode_expense;
use crate::io::Ledger;
use crate::types::{Expense, StoredExpense, TrackerError};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ExpenseTracker {
    ledger: Ledger,
}

impl ExpenseTracker {
    /// Open the tracker on `path`, creating the ledger if it is missing
    ///
    /// # Errors
    ///
    /// Returns a `Create` ledger error if the ledger cannot be created. The
    /// tracker cannot run without one.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, TrackerError> {
        let ledger = Ledger::new(path);
        ledger.ensure_initialized()?;
        Ok(ExpenseTracker { ledger })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Append a validated expense to the ledger
    pub fn add(&self, expense: &Expense) -> Result<(), TrackerError> {
        self.ledger.append(&encode_expense(expense))?;
        info!(
            amount = %expense.amount(),
            category = expense.category(),
            "recorded expense"
        );
        Ok(())
    }

    /// Validate raw user input and record the resulting expense
    ///
    /// Fields are checked in order (amount, category, description) and the
    /// first failure is returned.
    pub fn record(
        &self,
        amount: &str,
        category: &str,
        description: &str,
    ) -> Result<Expense, TrackerError> {
        let amount = parse_amount(amount)?;
        let category = validate_non_empty(category, "Category")?;
        let description = validate_non_empty(description, "Description")?;

        let expense = Expense::new(amount, &category, &description)?;
        self.add(&expense)?;
        Ok(expense)
    }

    /// All decodable expenses in ledger order
    ///
    /// Lines with fewer than three fields are skipped.
    pub fn expenses(&self) -> Result<Vec<StoredExpense>, TrackerError> {
        let mut expenses = Vec::new();
        for line in self.ledger.read_all()? {
            if let Some(stored) = decode_expense(&line?) {
                expenses.push(stored);
            }
        }
        Ok(expenses)
    }

    /// Total of every stored amount
    ///
    /// Unparsable amounts count as zero.
    pub fn total(&self) -> Result<Decimal, TrackerError> {
        try_sum_amounts(self.ledger.read_all()?)
    }
}
