//! Payroll orchestration.
//!
//! Rounds gross income to whole centavos, runs the three contribution engines,
//! derives taxable income, applies the withholding tax table and derives net
//! pay. Each intermediate amount is rounded half-up before it feeds the next
//! step.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AuditStep, AuditWarning, Money, PayrollResult};

use super::health_insurance::calculate_health_insurance;
use super::housing_fund::calculate_housing_fund;
use super::income_tax::calculate_income_tax;
use super::rounding::{round_income, round_money};
use super::social_insurance::calculate_social_insurance;

/// A payroll result together with the audit trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollCalculation {
    /// The computed deductions and net pay.
    pub result: PayrollResult,
    /// One step per engine, in evaluation order.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings about unusual inputs.
    pub warnings: Vec<AuditWarning>,
}

/// Computes deductions and net pay for a gross monthly income.
///
/// Income with more than two decimal places is rounded half-up to the
/// centavo first, so every amount in the result has exactly two.
///
/// # Errors
///
/// Returns [`EngineError::NoMatchingBracket`](crate::error::EngineError::NoMatchingBracket)
/// for negative income. No partial result is produced.
///
/// # Examples
///
/// ```
/// use ph_payroll::calculation::compute;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = compute(Decimal::from_str("25000.00").unwrap()).unwrap();
/// assert_eq!(result.total_contributions.to_string(), "1725.00");
/// assert_eq!(result.income_tax.to_string(), "488.40");
/// ```
pub fn compute(gross_monthly_income: Money) -> EngineResult<PayrollResult> {
    compute_with_audit(gross_monthly_income).map(|calculation| calculation.result)
}

/// Computes deductions and net pay, keeping the audit trail.
///
/// The trail holds no timestamps or identifiers, so repeated calls with the
/// same income return equal values.
///
/// # Errors
///
/// See [`compute`].
pub fn compute_with_audit(gross_monthly_income: Money) -> EngineResult<PayrollCalculation> {
    let gross = round_income(gross_monthly_income);
    let mut audit_steps = Vec::with_capacity(5);
    let mut warnings = Vec::new();

    let social = calculate_social_insurance(gross, 1)?;
    let health = calculate_health_insurance(gross, 2);
    let housing = calculate_housing_fund(gross, 3);

    let total_contributions =
        round_money(social.contribution + health.contribution + housing.contribution);
    let taxable_income = gross - total_contributions;

    if taxable_income < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "CONTRIBUTIONS_EXCEED_GROSS".to_string(),
            message: format!(
                "Total contributions {} exceed gross income {}",
                total_contributions, gross
            ),
            severity: "medium".to_string(),
        });
    }

    let tax = calculate_income_tax(taxable_income, 5)?;
    let income_tax = tax.tax;

    if taxable_income >= Decimal::ZERO && tax.bracket_position.is_none() {
        warnings.push(AuditWarning {
            code: "TAXABLE_INCOME_BETWEEN_BRACKETS".to_string(),
            message: format!(
                "Taxable income {} matches no withholding tax bracket; no tax withheld",
                taxable_income
            ),
            severity: "low".to_string(),
        });
    }

    let net_pay_after_tax_only = round_money(gross - income_tax);
    let total_deductions = round_money(income_tax + total_contributions);
    let final_net_pay = round_money(gross - total_deductions);

    let totals_step = AuditStep {
        step_number: 4,
        rule_id: "taxable_income".to_string(),
        rule_name: "Taxable Income".to_string(),
        legal_ref: "NIRC Sec. 32(B)(7)(f)".to_string(),
        input: serde_json::json!({
            "gross_monthly_income": gross.to_string(),
            "social_insurance": social.contribution.to_string(),
            "health_insurance": health.contribution.to_string(),
            "housing_fund": housing.contribution.to_string()
        }),
        output: serde_json::json!({
            "total_contributions": total_contributions.to_string(),
            "taxable_income": taxable_income.to_string()
        }),
        reasoning: format!(
            "{} - ({} + {} + {}) = {}",
            gross,
            social.contribution,
            health.contribution,
            housing.contribution,
            taxable_income
        ),
    };

    audit_steps.push(social.audit_step);
    audit_steps.push(health.audit_step);
    audit_steps.push(housing.audit_step);
    audit_steps.push(totals_step);
    audit_steps.push(tax.audit_step);

    debug!(
        gross = %gross,
        total_contributions = %total_contributions,
        income_tax = %income_tax,
        final_net_pay = %final_net_pay,
        "Payroll computed"
    );

    Ok(PayrollCalculation {
        result: PayrollResult {
            social_insurance: social.contribution,
            health_insurance: health.contribution,
            housing_fund: housing.contribution,
            total_contributions,
            taxable_income,
            income_tax,
            net_pay_after_tax_only,
            total_deductions,
            final_net_pay,
        },
        audit_steps,
        warnings,
    })
}
