//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Money;

/// Rounds a value to exactly two decimal places using half-up rounding.
///
/// Midpoints round away from zero. The result always carries a scale of two,
/// so `200` becomes `200.00`.
///
/// # Examples
///
/// ```
/// use ph_payroll::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_money(Decimal::from_str("30.0002").unwrap());
/// assert_eq!(rounded.to_string(), "30.00");
///
/// let rounded = round_money(Decimal::from_str("123.455").unwrap());
/// assert_eq!(rounded.to_string(), "123.46");
/// ```
pub fn round_money(value: Decimal) -> Money {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Brings an income to whole centavos before it reaches a bracket table.
///
/// Non-negative values are rounded with [`round_money`]. Negative values are
/// returned unchanged so that `-0.004` is still rejected by the lookup rather
/// than rounding to zero.
///
/// # Examples
///
/// ```
/// use ph_payroll::calculation::round_income;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let income = round_income(Decimal::from_str("3249.995").unwrap());
/// assert_eq!(income.to_string(), "3250.00");
/// ```
pub fn round_income(value: Decimal) -> Money {
    if value.is_sign_negative() {
        value
    } else {
        round_money(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(round_money(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn test_rounds_up_at_midpoint() {
        assert_eq!(round_money(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn test_negative_midpoint_rounds_away_from_zero() {
        assert_eq!(round_money(dec!(-123.455)), dec!(-123.46));
    }

    #[test]
    fn test_pads_to_two_decimal_places() {
        assert_eq!(round_money(dec!(200)).to_string(), "200.00");
        assert_eq!(round_money(dec!(0)).to_string(), "0.00");
        assert_eq!(round_money(dec!(15.5)).to_string(), "15.50");
    }

    #[test]
    fn test_carries_into_next_unit() {
        assert_eq!(round_money(dec!(999999.995)).to_string(), "1000000.00");
    }

    #[test]
    fn test_income_is_rounded_to_centavos() {
        assert_eq!(round_income(dec!(3249.994)).to_string(), "3249.99");
        assert_eq!(round_income(dec!(3249.995)).to_string(), "3250.00");
        assert_eq!(round_income(dec!(25000)).to_string(), "25000.00");
    }

    #[test]
    fn test_negative_income_is_left_as_given() {
        assert_eq!(round_income(dec!(-0.004)), dec!(-0.004));
        assert_eq!(round_income(dec!(-1.005)), dec!(-1.005));
    }
}
