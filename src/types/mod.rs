//! Types module
//!
//! Contains core data structures used throughout the application:
//! - `expense`: the expense record and its stored (decoded) form
//! - `error`: error types for validation and ledger access

pub mod error;
pub mod expense;

pub use error::{LedgerOperation, TrackerError, ValidationError};
pub use expense::{Expense, StoredExpense};
