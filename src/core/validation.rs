//! Input validation and amount parsing
//!
//! Strict parsing is used for user input ([`parse_amount`]); lenient parsing
//! is used for amounts read back from the ledger ([`lenient_amount`]), where a
//! hand-corrupted row must not break reporting.

use crate::types::ValidationError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of decimal places amounts are stored with
pub const AMOUNT_SCALE: u32 = 2;

/// Parse user supplied amount text into a positive amount
///
/// Accepts plain decimals ("12.5") and scientific notation ("1e3"), with
/// surrounding whitespace ignored. The result is rounded to cents.
///
/// # Errors
///
/// - [`ValidationError::InvalidNumber`] if the text is not a number
/// - [`ValidationError::NonPositiveAmount`] if the value is zero, negative, or
///   rounds to zero
/// - [`ValidationError::AmountOutOfRange`] if the value is a number too large
///   to store (above roughly 7.9e28)
pub fn parse_amount(text: &str) -> Result<Decimal, ValidationError> {
    let input = text.trim();
    match parse_decimal(input) {
        Some(amount) => validate_amount(amount, input),
        None => Err(unrepresentable(input)),
    }
}

/// Check that an amount is positive once rounded to cents
///
/// `input` is the text reported back in the error.
pub fn validate_amount(amount: Decimal, input: &str) -> Result<Decimal, ValidationError> {
    let rounded = round_to_cents(amount);
    if amount <= Decimal::ZERO || rounded <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount {
            input: input.to_string(),
        });
    }
    Ok(rounded)
}

/// Trim `text` and reject it if nothing is left
///
/// `field` names the field in the error message.
pub fn validate_non_empty(text: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// Parse a stored amount, treating anything unparsable as zero
pub fn lenient_amount(text: &str) -> Decimal {
    parse_decimal(text.trim()).unwrap_or(Decimal::ZERO)
}

/// Round half away from zero, the way `%.2f` does
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

// Digit separators are accepted by `Decimal::from_str` but are not numbers
fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() || text.contains('_') {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

// Text that does not fit a Decimal: a finite number is either out of range or
// too small to be a positive amount; anything else is not a number.
fn unrepresentable(input: &str) -> ValidationError {
    let input = input.to_string();
    match input.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.005 => {
            ValidationError::AmountOutOfRange { input }
        }
        Ok(value) if value.is_finite() => ValidationError::NonPositiveAmount { input },
        _ => ValidationError::InvalidNumber { input },
    }
}
