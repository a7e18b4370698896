//! I/O module
//!
//! Handles the ledger file and its line format.
//!
//! # Components
//!
//! - `csv_format` - Ledger line format (encoding, lenient decoding)
//! - `ledger` - Ledger file access with a lazy line iterator

pub mod csv_format;
pub mod ledger;

pub use csv_format::{
    decode_line, encode_expense, escape_field, is_unterminated, HEADER, LINE_ENDING,
};
pub use ledger::{Ledger, LedgerLines};
