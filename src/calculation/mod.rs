//! Calculation logic for the payroll engine.
//!
//! This module contains the bracket lookup shared by the table-driven engines,
//! the SSS, PhilHealth and Pag-IBIG contribution engines, the withholding tax
//! engine, and the orchestrator that combines them into a [`PayrollResult`].
//!
//! [`PayrollResult`]: crate::models::PayrollResult

mod bracket_lookup;
mod health_insurance;
mod housing_fund;
mod income_tax;
mod payroll;
mod rounding;
mod social_insurance;

use crate::error::EngineResult;
use crate::models::from_cents;

pub use bracket_lookup::{
    falls_between_rows, lookup_bracket, validate_bracket_table, validate_contiguous,
};
pub use health_insurance::{
    HEALTH_INSURANCE_PREMIUM_RATE, HEALTH_INSURANCE_SALARY_CEILING,
    HEALTH_INSURANCE_SALARY_FLOOR, HealthInsuranceResult, calculate_health_insurance,
    health_insurance_contribution,
};
pub use housing_fund::{
    HOUSING_FUND_COMPENSATION_CAP, HOUSING_FUND_LOWER_RATE, HOUSING_FUND_LOWER_RATE_THRESHOLD,
    HOUSING_FUND_STANDARD_RATE, HousingFundResult, calculate_housing_fund,
    housing_fund_contribution,
};
pub use income_tax::{INCOME_TAX_TABLE, IncomeTaxResult, calculate_income_tax, income_tax};
pub use payroll::{PayrollCalculation, compute, compute_with_audit};
pub use rounding::{round_income, round_money};
pub use social_insurance::{
    SOCIAL_INSURANCE_BRACKET_COUNT, SOCIAL_INSURANCE_TABLE, SocialInsuranceResult,
    calculate_social_insurance, social_insurance_contribution,
};

/// Validates the built-in statutory tables.
///
/// The SSS table must be contiguous in 0.01 steps; the withholding tax table
/// must satisfy the general ordering rules.
///
/// # Errors
///
/// Returns [`EngineError::InvalidBracketTable`](crate::error::EngineError::InvalidBracketTable)
/// naming the first broken rule.
pub fn validate_statutory_tables() -> EngineResult<()> {
    validate_contiguous(&SOCIAL_INSURANCE_TABLE, from_cents(1))?;
    validate_bracket_table(&INCOME_TAX_TABLE)
}
