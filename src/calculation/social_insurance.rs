//! SSS contribution calculation.
//!
//! The 2022 schedule has 45 monthly salary credit brackets. The first covers
//! 0.00 - 3249.99 at a 135.00 employee contribution; each following bracket is
//! 500.00 wide and adds 22.50. The last bracket is open-ended.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, BracketPayload, BracketRow, BracketTable, Money, UpperBound, from_cents,
};

use super::bracket_lookup::lookup_bracket;
use super::rounding::{round_income, round_money};

/// Number of brackets in the SSS schedule.
pub const SOCIAL_INSURANCE_BRACKET_COUNT: usize = 45;

const FIRST_UPPER_CENTS: u32 = 324_999;
const BRACKET_WIDTH_CENTS: u32 = 50_000;
const FIRST_CONTRIBUTION_CENTS: u32 = 13_500;
const CONTRIBUTION_STEP_CENTS: u32 = 2_250;

const LEGAL_REF: &str = "RA 11199; SSS Circular 2020-033";

const fn social_insurance_rows() -> [BracketRow; SOCIAL_INSURANCE_BRACKET_COUNT] {
    let mut rows = [BracketRow {
        lower_bound: Decimal::ZERO,
        upper_bound: UpperBound::Unbounded,
        payload: BracketPayload::FixedAmount(Decimal::ZERO),
    }; SOCIAL_INSURANCE_BRACKET_COUNT];

    let mut index = 0;
    while index < SOCIAL_INSURANCE_BRACKET_COUNT {
        let step = index as u32;
        let lower_cents = if index == 0 {
            0
        } else {
            FIRST_UPPER_CENTS + (step - 1) * BRACKET_WIDTH_CENTS + 1
        };
        let upper_bound = if index == SOCIAL_INSURANCE_BRACKET_COUNT - 1 {
            UpperBound::Unbounded
        } else {
            UpperBound::Bounded(from_cents(FIRST_UPPER_CENTS + step * BRACKET_WIDTH_CENTS))
        };

        rows[index] = BracketRow {
            lower_bound: from_cents(lower_cents),
            upper_bound,
            payload: BracketPayload::FixedAmount(from_cents(
                FIRST_CONTRIBUTION_CENTS + step * CONTRIBUTION_STEP_CENTS,
            )),
        };
        index += 1;
    }

    rows
}

static SOCIAL_INSURANCE_ROWS: [BracketRow; SOCIAL_INSURANCE_BRACKET_COUNT] =
    social_insurance_rows();

/// The 2022 SSS contribution schedule.
pub static SOCIAL_INSURANCE_TABLE: BracketTable =
    BracketTable::new("social_insurance", &SOCIAL_INSURANCE_ROWS);

/// The result of an SSS contribution lookup.
#[derive(Debug, Clone)]
pub struct SocialInsuranceResult {
    /// The employee contribution for the matched bracket.
    pub contribution: Money,
    /// Zero-based position of the matched bracket.
    pub bracket_position: usize,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Determines the SSS employee contribution for a monthly income.
///
/// The income is first rounded to whole centavos, since the schedule's rows
/// meet at 0.01 steps. The contribution is the fixed amount of the bracket
/// containing that income.
///
/// # Arguments
///
/// * `monthly_income` - Gross monthly income
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`EngineError::NoMatchingBracket`] for negative income.
///
/// # Examples
///
/// ```
/// use ph_payroll::calculation::calculate_social_insurance;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_social_insurance(Decimal::from_str("3250.00").unwrap(), 1).unwrap();
/// assert_eq!(result.contribution.to_string(), "157.50");
/// assert_eq!(result.bracket_position, 1);
/// ```
pub fn calculate_social_insurance(
    monthly_income: Money,
    step_number: u32,
) -> EngineResult<SocialInsuranceResult> {
    let monthly_income = round_income(monthly_income);
    let matched = lookup_bracket(&SOCIAL_INSURANCE_TABLE, monthly_income)?;

    let BracketPayload::FixedAmount(amount) = matched.row.payload else {
        return Err(EngineError::InvalidBracketTable {
            table: SOCIAL_INSURANCE_TABLE.name().to_string(),
            message: format!("row {} has no fixed amount", matched.position + 1),
        });
    };
    let contribution = round_money(amount);

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_insurance".to_string(),
        rule_name: "SSS Contribution".to_string(),
        legal_ref: LEGAL_REF.to_string(),
        input: serde_json::json!({
            "monthly_income": monthly_income.to_string()
        }),
        output: serde_json::json!({
            "contribution": contribution.to_string(),
            "bracket": matched.position + 1,
            "bracket_range": matched.row.range_label()
        }),
        reasoning: format!(
            "Income {} falls in bracket {} of {} ({}): contribution {}",
            monthly_income,
            matched.position + 1,
            SOCIAL_INSURANCE_BRACKET_COUNT,
            matched.row.range_label(),
            contribution
        ),
    };

    Ok(SocialInsuranceResult {
        contribution,
        bracket_position: matched.position,
        audit_step,
    })
}

/// Returns only the SSS contribution for a monthly income.
///
/// # Errors
///
/// Returns [`EngineError::NoMatchingBracket`] for negative income.
pub fn social_insurance_contribution(monthly_income: Money) -> EngineResult<Money> {
    calculate_social_insurance(monthly_income, 1).map(|result| result.contribution)
}
