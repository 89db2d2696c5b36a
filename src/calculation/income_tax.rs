//! Monthly withholding tax calculation.
//!
//! The 2022 monthly table has six brackets over taxable income. Bracket
//! boundaries are whole pesos: the first bracket closes at 20,833.00 where the
//! second opens, and later brackets open one peso after the previous one
//! closes. Lookup is first-match in ascending order, so 20,833.00 is exempt.
//! Centavo amounts inside those one-peso gaps belong to no bracket and owe no
//! tax.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, BracketPayload, BracketRow, BracketTable, Money, TaxFormula, UpperBound,
    from_cents, percent,
};

use super::bracket_lookup::{falls_between_rows, lookup_bracket};
use super::rounding::round_money;

const LEGAL_REF: &str = "RA 10963 (TRAIN); RR 11-2018";

const fn tax_row(
    lower_cents: u32,
    upper_bound: UpperBound,
    base_cents: u32,
    rate_percent: u32,
) -> BracketRow {
    BracketRow {
        lower_bound: from_cents(lower_cents),
        upper_bound,
        payload: BracketPayload::TaxFormula(TaxFormula {
            base_amount: from_cents(base_cents),
            marginal_rate: percent(rate_percent),
            bracket_floor: from_cents(lower_cents),
        }),
    }
}

const fn upto(cents: u32) -> UpperBound {
    UpperBound::Bounded(from_cents(cents))
}

static INCOME_TAX_ROWS: [BracketRow; 6] = [
    tax_row(0, upto(2_083_300), 0, 0),
    tax_row(2_083_300, upto(3_333_200), 0, 20),
    tax_row(3_333_300, upto(6_666_600), 250_000, 25),
    tax_row(6_666_700, upto(16_666_600), 1_083_333, 30),
    tax_row(16_666_700, upto(66_666_600), 4_083_333, 32),
    tax_row(66_666_700, UpperBound::Unbounded, 20_083_333, 35),
];

/// The 2022 monthly withholding tax table.
pub static INCOME_TAX_TABLE: BracketTable = BracketTable::new("income_tax", &INCOME_TAX_ROWS);

/// The result of a withholding tax calculation.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// The tax owed, rounded half-up.
    pub tax: Money,
    /// True when no tax is owed.
    pub tax_exempt: bool,
    /// Zero-based position of the matched bracket, if a lookup was made.
    pub bracket_position: Option<usize>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates monthly withholding tax on taxable income.
///
/// `tax = base_amount + marginal_rate * (taxable_income - bracket_floor)`,
/// rounded half-up to two decimal places. Negative taxable income owes no tax
/// and skips the table. Taxable income in a gap between two brackets (for
/// example 33,332.01 to 33,332.99) matches no bracket and also owes no tax.
///
/// # Errors
///
/// Returns [`EngineError::InvalidBracketTable`] if the matched row carries no
/// tax formula.
///
/// # Examples
///
/// ```
/// use ph_payroll::calculation::calculate_income_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_income_tax(Decimal::from_str("25000").unwrap(), 1).unwrap();
/// assert_eq!(result.tax.to_string(), "833.40");
///
/// let result = calculate_income_tax(Decimal::from_str("20000").unwrap(), 1).unwrap();
/// assert!(result.tax_exempt);
/// ```
pub fn calculate_income_tax(taxable_income: Money, step_number: u32) -> EngineResult<IncomeTaxResult> {
    if taxable_income < Decimal::ZERO {
        return Ok(untaxed(
            taxable_income,
            step_number,
            false,
            format!("Taxable income {} is negative: no tax due", taxable_income),
        ));
    }

    if falls_between_rows(&INCOME_TAX_TABLE, taxable_income) {
        debug!(taxable_income = %taxable_income, "Taxable income between brackets");
        return Ok(untaxed(
            taxable_income,
            step_number,
            true,
            format!(
                "Taxable income {} falls between two brackets: no bracket applies, no tax due",
                taxable_income
            ),
        ));
    }

    let matched = lookup_bracket(&INCOME_TAX_TABLE, taxable_income)?;

    let BracketPayload::TaxFormula(formula) = matched.row.payload else {
        return Err(EngineError::InvalidBracketTable {
            table: INCOME_TAX_TABLE.name().to_string(),
            message: format!("row {} has no tax formula", matched.position + 1),
        });
    };

    let tax = round_money(formula.evaluate(taxable_income));
    let tax_exempt = tax == Decimal::ZERO;

    let reasoning = if tax_exempt {
        format!(
            "Taxable income {} falls in bracket {} ({}): tax exempt",
            taxable_income,
            matched.position + 1,
            matched.row.range_label()
        )
    } else {
        format!(
            "Taxable income {} falls in bracket {} ({}): {} + {} x ({} - {}) = {}",
            taxable_income,
            matched.position + 1,
            matched.row.range_label(),
            formula.base_amount,
            formula.marginal_rate,
            taxable_income,
            formula.bracket_floor,
            tax
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Withholding Tax".to_string(),
        legal_ref: LEGAL_REF.to_string(),
        input: serde_json::json!({
            "taxable_income": taxable_income.to_string()
        }),
        output: serde_json::json!({
            "bracket": matched.position + 1,
            "bracket_range": matched.row.range_label(),
            "between_brackets": false,
            "base_amount": formula.base_amount.to_string(),
            "marginal_rate": formula.marginal_rate.to_string(),
            "bracket_floor": formula.bracket_floor.to_string(),
            "tax": tax.to_string(),
            "tax_exempt": tax_exempt
        }),
        reasoning,
    };

    Ok(IncomeTaxResult {
        tax,
        tax_exempt,
        bracket_position: Some(matched.position),
        audit_step,
    })
}

fn untaxed(
    taxable_income: Money,
    step_number: u32,
    between_brackets: bool,
    reasoning: String,
) -> IncomeTaxResult {
    let tax = round_money(Decimal::ZERO);
    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Withholding Tax".to_string(),
        legal_ref: LEGAL_REF.to_string(),
        input: serde_json::json!({
            "taxable_income": taxable_income.to_string()
        }),
        output: serde_json::json!({
            "between_brackets": between_brackets,
            "tax": tax.to_string(),
            "tax_exempt": true
        }),
        reasoning,
    };

    IncomeTaxResult {
        tax,
        tax_exempt: true,
        bracket_position: None,
        audit_step,
    }
}

/// Returns only the withholding tax on taxable income.
///
/// # Errors
///
/// See [`calculate_income_tax`].
pub fn income_tax(taxable_income: Money) -> EngineResult<Money> {
    calculate_income_tax(taxable_income, 1).map(|result| result.tax)
}
