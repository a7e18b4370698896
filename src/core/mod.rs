//! Core business logic module
//!
//! This module contains the expense tracking components:
//! - `validation` - Input validation and amount parsing
//! - `aggregate` - Lenient decoding and totals over ledger lines
//! - `tracker` - The add / list / total service used by the CLI

pub mod aggregate;
pub mod tracker;
pub mod validation;

pub use aggregate::{decode_expense, sum_amounts, try_sum_amounts};
pub use tracker::ExpenseTracker;
pub use validation::{parse_amount, validate_non_empty};
