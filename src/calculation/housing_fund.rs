//! Pag-IBIG contribution calculation.
//!
//! Monthly compensation is capped at 5,000.00. Employees whose compensation is
//! 1,500.00 or less contribute 1%; everyone else contributes 2%.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Money, from_cents, percent};

use super::rounding::round_money;

/// Maximum monthly compensation used for the contribution.
pub const HOUSING_FUND_COMPENSATION_CAP: Money = from_cents(500_000);

/// Compensation at or below this amount uses the lower rate.
pub const HOUSING_FUND_LOWER_RATE_THRESHOLD: Money = from_cents(150_000);

/// Rate for compensation at or below the threshold.
pub const HOUSING_FUND_LOWER_RATE: Decimal = percent(1);

/// Rate for compensation above the threshold.
pub const HOUSING_FUND_STANDARD_RATE: Decimal = percent(2);

const LEGAL_REF: &str = "RA 9679; HDMF Circular 274";

/// The result of a Pag-IBIG contribution calculation.
#[derive(Debug, Clone)]
pub struct HousingFundResult {
    /// The employee contribution.
    pub contribution: Money,
    /// Monthly compensation after applying the cap.
    pub compensation_base: Money,
    /// The rate applied to the base.
    pub rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the Pag-IBIG employee contribution for a monthly income.
///
/// # Examples
///
/// ```
/// use ph_payroll::calculation::calculate_housing_fund;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_housing_fund(Decimal::from_str("1000").unwrap(), 1);
/// assert_eq!(result.contribution.to_string(), "10.00");
///
/// let result = calculate_housing_fund(Decimal::from_str("25000").unwrap(), 1);
/// assert_eq!(result.contribution.to_string(), "100.00");
/// ```
pub fn calculate_housing_fund(monthly_income: Money, step_number: u32) -> HousingFundResult {
    let compensation_base = monthly_income.min(HOUSING_FUND_COMPENSATION_CAP);
    let rate = if compensation_base <= HOUSING_FUND_LOWER_RATE_THRESHOLD {
        HOUSING_FUND_LOWER_RATE
    } else {
        HOUSING_FUND_STANDARD_RATE
    };
    let contribution = round_money(compensation_base * rate);

    let audit_step = AuditStep {
        step_number,
        rule_id: "housing_fund".to_string(),
        rule_name: "Pag-IBIG Contribution".to_string(),
        legal_ref: LEGAL_REF.to_string(),
        input: serde_json::json!({
            "monthly_income": monthly_income.to_string()
        }),
        output: serde_json::json!({
            "compensation_base": compensation_base.to_string(),
            "rate": rate.to_string(),
            "contribution": contribution.to_string()
        }),
        reasoning: format!(
            "Compensation {} x {} = {}",
            compensation_base, rate, contribution
        ),
    };

    HousingFundResult {
        contribution,
        compensation_base,
        rate,
        audit_step,
    }
}

/// Returns only the Pag-IBIG contribution for a monthly income.
pub fn housing_fund_contribution(monthly_income: Money) -> Money {
    calculate_housing_fund(monthly_income, 1).contribution
}
