//! CSV format handling for ledger lines
//!
//! This module centralizes the ledger's line format:
//! - [`encode_expense`] turns an expense into one ledger line
//! - [`decode_line`] splits a ledger line back into its fields
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Quoting
//!
//! Text fields containing a comma, a double quote or a newline are wrapped in
//! double quotes, with embedded quotes doubled. Decoding is lenient: it never
//! fails, and an unterminated quote simply runs to the end of the line.

use crate::core::validation::round_to_cents;
use crate::types::Expense;

/// First line of every ledger file
pub const HEADER: &str = "Amount,Category,Description";

/// Line terminator written after every ledger line
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator written after every ledger line
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Escape a text field for the ledger
///
/// Doubles every `"`, then wraps the field in quotes if it contains a comma,
/// a quote or a newline.
pub fn escape_field(value: &str) -> String {
    let escaped = value.replace('"', "\"\"");
    if escaped.contains([',', '"', '\n']) {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}

/// Encode an expense as a single ledger line, terminator included
///
/// The amount is always written with exactly two decimal places.
pub fn encode_expense(expense: &Expense) -> String {
    format!(
        "{:.2},{},{}{}",
        round_to_cents(expense.amount()),
        escape_field(expense.category()),
        escape_field(expense.description()),
        LINE_ENDING
    )
}

/// Split a ledger line into its fields
///
/// Never fails; malformed input produces a best-effort split. The result
/// always has at least one (possibly empty) field.
pub fn decode_line(line: &str) -> Vec<String> {
    scan(line).0
}

/// Whether `line` ends while still inside a quoted field
///
/// A record whose quoted field holds a newline spans several physical lines;
/// every physical line but the last is unterminated.
pub fn is_unterminated(line: &str) -> bool {
    scan(line).1
}

fn scan(line: &str) -> (Vec<String>, bool) {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => current.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
    }

    fields.push(current);
    (fields, in_quotes)
}
