//! Aggregation over ledger lines
//!
//! The helpers take raw record lines (header excluded) and never reject one: a
//! line that decodes to fewer than three fields is skipped when listing and
//! counts as zero when totaling, and an amount that does not parse counts as
//! zero. [`try_sum_amounts`] only fails when reading a line fails.

use crate::io::csv_format::decode_line;
use crate::types::StoredExpense;
use rust_decimal::Decimal;
use tracing::debug;

/// Decode a ledger line into a stored expense
///
/// Returns `None` when the line has fewer than three fields.
pub fn decode_expense(line: &str) -> Option<StoredExpense> {
    let stored = StoredExpense::from_fields(decode_line(line));
    if stored.is_none() {
        debug!(line, "skipping ledger line with fewer than 3 fields");
    }
    stored
}

/// Sum the amounts of all decodable lines
///
/// The sum of no lines is zero. Addition saturates at the decimal range.
pub fn sum_amounts<I, S>(lines: I) -> Decimal
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .fold(Decimal::ZERO, |total, line| {
            total.saturating_add(line_amount(line.as_ref()))
        })
}

/// Sum amounts from a fallible line source, stopping at the first error
///
/// Lines are consumed one at a time, so the source is never buffered.
pub fn try_sum_amounts<I, S, E>(lines: I) -> Result<Decimal, E>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
    lines.into_iter().try_fold(Decimal::ZERO, |total, line| {
        Ok(total.saturating_add(line_amount(line?.as_ref())))
    })
}

fn line_amount(line: &str) -> Decimal {
    let Some(stored) = decode_expense(line) else {
        return Decimal::ZERO;
    };
    let value = stored.amount_value();
    if value.is_zero() {
        debug!(amount = %stored.amount, "counting unparsable amount as zero");
    }
    value
}
