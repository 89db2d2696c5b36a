//! Monetary values.
//!
//! Amounts are exact decimals, never binary floating point. Table constants
//! are built in `const` context from integer cents.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// An exact monetary amount in Philippine pesos.
///
/// Finalized amounts carry exactly two fractional digits; see
/// [`round_money`](crate::calculation::round_money).
pub type Money = Decimal;

/// Builds a peso amount from a whole number of centavos.
///
/// ```
/// use ph_payroll::models::from_cents;
///
/// assert_eq!(from_cents(324_999).to_string(), "3249.99");
/// ```
pub const fn from_cents(cents: u32) -> Money {
    Decimal::from_parts(cents, 0, 0, false, 2)
}

/// Builds a rate fraction from a whole percentage (`percent(20)` is `0.20`).
pub const fn percent(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 2)
}

/// Parses user-entered income into an exact [`Money`] value.
///
/// Surrounding whitespace, a leading `Php` or `₱` label and thousands
/// separators are accepted. The value is not rounded.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInputFormat`] if the text is not a decimal
/// number.
///
/// # Examples
///
/// ```
/// use ph_payroll::models::parse_money;
///
/// assert_eq!(parse_money("Php 25,000.50").unwrap().to_string(), "25000.50");
/// assert!(parse_money("twenty").is_err());
/// ```
pub fn parse_money(input: &str) -> EngineResult<Money> {
    let trimmed = input.trim();
    let unlabelled = strip_currency_label(trimmed).trim();
    let digits: String = unlabelled.chars().filter(|c| *c != ',').collect();

    if digits.is_empty() {
        return Err(EngineError::InvalidInputFormat {
            input: input.to_string(),
            message: "no amount entered".to_string(),
        });
    }

    Decimal::from_str(&digits).map_err(|e| EngineError::InvalidInputFormat {
        input: input.to_string(),
        message: e.to_string(),
    })
}

fn strip_currency_label(text: &str) -> &str {
    if let Some(rest) = text.strip_prefix('₱') {
        return rest;
    }
    match text.get(..3) {
        Some(label) if label.eq_ignore_ascii_case("php") => &text[3..],
        _ => text,
    }
}
