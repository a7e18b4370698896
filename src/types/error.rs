//! Error types for the expense tracker
//!
//! Errors are designed to be printed straight to the user by the menu loop,
//! so every `Display` message is a complete, user-facing sentence.
//!
//! # Error Categories
//!
//! - **Validation errors**: empty fields, non-numeric, non-positive or oversized
//!   amounts
//! - **Ledger errors**: the ledger file could not be created, written or read
//!
//! Rows in the ledger that cannot be decoded are not errors at all: they are
//! skipped when listing and count as zero when totaling.

use std::fmt;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Rejected user input
///
/// The operation that produced it is aborted and the user returns to the menu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Amount text is not a decimal number
    #[error("Invalid number. Try again.")]
    InvalidNumber {
        /// The rejected input, trimmed
        input: String,
    },

    /// Amount is zero, negative, or rounds to zero at two decimal places
    #[error("Amount must be greater than 0.")]
    NonPositiveAmount {
        /// The rejected input, trimmed
        input: String,
    },

    /// Amount is a number too large to store
    #[error("Amount is too large.")]
    AmountOutOfRange {
        /// The rejected input, trimmed
        input: String,
    },

    /// A text field is empty after trimming
    #[error("{field} cannot be empty.")]
    EmptyField {
        /// Human readable field name ("Category", "Description")
        field: &'static str,
    },
}

/// Which ledger operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerOperation {
    Create,
    Append,
    Read,
}

impl fmt::Display for LedgerOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            LedgerOperation::Create => "creating",
            LedgerOperation::Append => "writing to",
            LedgerOperation::Read => "reading",
        };
        f.write_str(verb)
    }
}

/// Main error type for the expense tracker
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// User input was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The ledger file could not be created, appended to or read
    ///
    /// Fatal only when creating the ledger at startup.
    #[error("Error {operation} file: {message}")]
    Ledger {
        /// The operation that failed
        operation: LedgerOperation,
        /// Ledger path, for logs
        path: String,
        /// The underlying I/O error message
        message: String,
    },
}

impl TrackerError {
    /// Create a Ledger error from an I/O failure on `path`
    pub fn ledger(operation: LedgerOperation, path: &Path, error: io::Error) -> Self {
        TrackerError::Ledger {
            operation,
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Ledger path of a ledger error
    pub fn path(&self) -> Option<&str> {
        match self {
            TrackerError::Ledger { path, .. } => Some(path),
            TrackerError::Validation(_) => None,
        }
    }

    /// Whether this error came from rejected user input
    pub fn is_validation(&self) -> bool {
        matches!(self, TrackerError::Validation(_))
    }
}
