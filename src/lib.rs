//! Expense Tracker Library
//! # Overview
//!
//! This library provides a personal expense tracker backed by an append-only
//! CSV ledger.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Expense, StoredExpense, errors)
//! - [`cli`] - CLI arguments parsing and the interactive menu
//! - [`core`] - Business logic components:
//!   - [`core::validation`] - Amount parsing and field validation
//!   - [`core::aggregate`] - Lenient decoding and totals
//!   - [`core::tracker`] - Add / list / total orchestration
//! - [`io`] - Ledger file access and the ledger line format
//!
//! # Ledger Format
//!
//! ```text
//! Amount,Category,Description
//! 10.00,Food,Lunch
//! 3.00,"A,B","He said ""hi"""
//! ```
//!
//! The header is written once, when the ledger is created. Every added expense
//! appends exactly one record; records are never edited or removed.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{
    parse_amount, sum_amounts, try_sum_amounts, validate_non_empty, ExpenseTracker,
};
pub use io::{decode_line, encode_expense, Ledger};
pub use types::{Expense, LedgerOperation, StoredExpense, TrackerError, ValidationError};
