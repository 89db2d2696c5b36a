//! Bracket table lookup and validation.
//!
//! Lookup scans rows in ascending order and returns the first row whose range
//! contains the value. A value no row contains has no bracket, whether it lies
//! below the first row or in a gap between two rows.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{BracketMatch, BracketTable, Money, UpperBound};

/// Finds the bracket row for a value.
///
/// # Arguments
///
/// * `table` - The table to search
/// * `value` - The income or taxable income to classify
///
/// # Returns
///
/// A [`BracketMatch`] for the first row (ascending) that contains the value.
///
/// # Errors
///
/// Returns [`EngineError::NoMatchingBracket`] if no row contains the value.
/// Use [`falls_between_rows`] to tell a gap from a value below the table.
///
/// # Examples
///
/// ```
/// use ph_payroll::calculation::{INCOME_TAX_TABLE, lookup_bracket};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 20833.00 closes the first bracket and opens the second; the first wins.
/// let matched = lookup_bracket(&INCOME_TAX_TABLE, Decimal::from_str("20833.00").unwrap()).unwrap();
/// assert_eq!(matched.position, 0);
///
/// // 33332.50 lies between the second and third brackets.
/// assert!(lookup_bracket(&INCOME_TAX_TABLE, Decimal::from_str("33332.50").unwrap()).is_err());
/// ```
pub fn lookup_bracket(table: &BracketTable, value: Money) -> EngineResult<BracketMatch> {
    let rows = table.rows();

    match rows.iter().position(|row| row.contains(value)) {
        Some(position) => Ok(BracketMatch {
            position,
            row: rows[position],
        }),
        None => {
            debug!(table = table.name(), value = %value, "No bracket contains value");
            Err(EngineError::NoMatchingBracket {
                table: table.name().to_string(),
                value,
            })
        }
    }
}

/// Returns true when the value is at or above the first row's lower bound but
/// no row contains it.
pub fn falls_between_rows(table: &BracketTable, value: Money) -> bool {
    match table.rows().first() {
        Some(first) if value >= first.lower_bound => {
            !table.rows().iter().any(|row| row.contains(value))
        }
        _ => false,
    }
}

/// Checks the structural rules every bracket table must satisfy.
///
/// - the table has at least one row
/// - every row except the last is bounded, with upper >= lower
/// - the last row is unbounded
/// - lower bounds strictly ascend and never start inside the previous row,
///   although a row may start exactly at the previous upper bound
///
/// # Errors
///
/// Returns [`EngineError::InvalidBracketTable`] naming the first violated rule.
pub fn validate_bracket_table(table: &BracketTable) -> EngineResult<()> {
    let rows = table.rows();
    let invalid = |message: String| EngineError::InvalidBracketTable {
        table: table.name().to_string(),
        message,
    };

    let Some(last) = rows.last() else {
        return Err(invalid("table has no rows".to_string()));
    };

    if last.upper_bound != UpperBound::Unbounded {
        return Err(invalid("last row must be unbounded".to_string()));
    }

    for (index, row) in rows[..rows.len() - 1].iter().enumerate() {
        match row.upper_bound {
            UpperBound::Bounded(upper) if upper >= row.lower_bound => {}
            UpperBound::Bounded(upper) => {
                return Err(invalid(format!(
                    "row {} has upper bound {} below lower bound {}",
                    index + 1,
                    upper,
                    row.lower_bound
                )));
            }
            UpperBound::Unbounded => {
                return Err(invalid(format!(
                    "row {} is unbounded but is not the last row",
                    index + 1
                )));
            }
        }
    }

    for (index, pair) in rows.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        if current.lower_bound <= previous.lower_bound {
            return Err(invalid(format!(
                "row {} lower bound {} does not ascend",
                index + 2,
                current.lower_bound
            )));
        }
        if let UpperBound::Bounded(upper) = previous.upper_bound {
            if current.lower_bound < upper {
                return Err(invalid(format!(
                    "row {} starts at {} inside row {}",
                    index + 2,
                    current.lower_bound,
                    index + 1
                )));
            }
        }
    }

    Ok(())
}

/// Checks that each row starts exactly `step` above the previous upper bound.
///
/// Runs [`validate_bracket_table`] first.
///
/// # Errors
///
/// Returns [`EngineError::InvalidBracketTable`] on the first gap or overlap.
pub fn validate_contiguous(table: &BracketTable, step: Decimal) -> EngineResult<()> {
    validate_bracket_table(table)?;

    for (index, pair) in table.rows().windows(2).enumerate() {
        if let UpperBound::Bounded(upper) = pair[0].upper_bound {
            if pair[1].lower_bound != upper + step {
                return Err(EngineError::InvalidBracketTable {
                    table: table.name().to_string(),
                    message: format!(
                        "row {} starts at {}, expected {}",
                        index + 2,
                        pair[1].lower_bound,
                        upper + step
                    ),
                });
            }
        }
    }

    Ok(())
}
