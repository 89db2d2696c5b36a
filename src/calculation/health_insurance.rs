//! PhilHealth contribution calculation.
//!
//! The 2022 premium is 4% of the monthly basic salary, clamped to the
//! 10,000.00 floor and 80,000.00 ceiling, shared equally between employer and
//! employee.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Money, from_cents, percent};

use super::rounding::round_money;

/// Lowest salary the premium is computed on.
pub const HEALTH_INSURANCE_SALARY_FLOOR: Money = from_cents(1_000_000);

/// Highest salary the premium is computed on.
pub const HEALTH_INSURANCE_SALARY_CEILING: Money = from_cents(8_000_000);

/// The 2022 premium rate.
pub const HEALTH_INSURANCE_PREMIUM_RATE: Decimal = percent(4);

const EMPLOYEE_SHARE_DIVISOR: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

const LEGAL_REF: &str = "RA 11223; PhilHealth Circular 2020-0005";

/// The result of a PhilHealth contribution calculation.
#[derive(Debug, Clone)]
pub struct HealthInsuranceResult {
    /// The employee's half of the premium.
    pub contribution: Money,
    /// The income after clamping to the floor and ceiling.
    pub premium_base: Money,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the PhilHealth employee share for a monthly income.
///
/// Income below the floor is raised to 10,000.00 and income above the ceiling
/// is lowered to 80,000.00; both ends are inclusive. The share is
/// `base * 0.04 / 2`, rounded half-up.
///
/// # Examples
///
/// ```
/// use ph_payroll::calculation::calculate_health_insurance;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_health_insurance(Decimal::from_str("25000").unwrap(), 1);
/// assert_eq!(result.contribution.to_string(), "500.00");
/// ```
pub fn calculate_health_insurance(monthly_income: Money, step_number: u32) -> HealthInsuranceResult {
    let premium_base =
        monthly_income.clamp(HEALTH_INSURANCE_SALARY_FLOOR, HEALTH_INSURANCE_SALARY_CEILING);
    let contribution =
        round_money(premium_base * HEALTH_INSURANCE_PREMIUM_RATE / EMPLOYEE_SHARE_DIVISOR);

    let clamp_note = if monthly_income < HEALTH_INSURANCE_SALARY_FLOOR {
        "raised to floor"
    } else if monthly_income > HEALTH_INSURANCE_SALARY_CEILING {
        "capped at ceiling"
    } else {
        "within range"
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "health_insurance".to_string(),
        rule_name: "PhilHealth Contribution".to_string(),
        legal_ref: LEGAL_REF.to_string(),
        input: serde_json::json!({
            "monthly_income": monthly_income.to_string()
        }),
        output: serde_json::json!({
            "premium_base": premium_base.to_string(),
            "premium_rate": HEALTH_INSURANCE_PREMIUM_RATE.to_string(),
            "contribution": contribution.to_string()
        }),
        reasoning: format!(
            "Salary base {} ({}) x {} / 2 = {}",
            premium_base, clamp_note, HEALTH_INSURANCE_PREMIUM_RATE, contribution
        ),
    };

    HealthInsuranceResult {
        contribution,
        premium_base,
        audit_step,
    }
}

/// Returns only the PhilHealth employee share for a monthly income.
pub fn health_insurance_contribution(monthly_income: Money) -> Money {
    calculate_health_insurance(monthly_income, 1).contribution
}
