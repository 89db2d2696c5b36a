//! The payroll computation result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Money;

/// Monthly deductions and net pay derived from one gross income.
///
/// Every field has exactly two decimal places. Contributions, tax and net pay
/// are rounded half-up; `taxable_income` is the exact difference of gross
/// income (already rounded to the centavo) and total contributions. The value
/// is built once per computation and never mutated.
///
/// # Example
///
/// ```
/// use ph_payroll::models::PayrollResult;
/// use rust_decimal::Decimal;
///
/// let result = PayrollResult {
///     social_insurance: Decimal::new(45000, 2),
///     health_insurance: Decimal::new(20000, 2),
///     housing_fund: Decimal::new(10000, 2),
///     total_contributions: Decimal::new(75000, 2),
///     taxable_income: Decimal::new(925000, 2),
///     income_tax: Decimal::new(0, 2),
///     net_pay_after_tax_only: Decimal::new(1000000, 2),
///     total_deductions: Decimal::new(75000, 2),
///     final_net_pay: Decimal::new(925000, 2),
/// };
/// assert!(result.is_tax_exempt());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// SSS employee contribution.
    pub social_insurance: Money,
    /// PhilHealth employee share.
    pub health_insurance: Money,
    /// Pag-IBIG employee contribution.
    pub housing_fund: Money,
    /// Sum of the three contributions.
    pub total_contributions: Money,
    /// Gross income less total contributions. Negative when contributions
    /// exceed a very small gross income.
    pub taxable_income: Money,
    /// Withholding tax on the taxable income.
    pub income_tax: Money,
    /// Gross income less income tax only.
    pub net_pay_after_tax_only: Money,
    /// Income tax plus total contributions.
    pub total_deductions: Money,
    /// Gross income less total deductions.
    pub final_net_pay: Money,
}

impl PayrollResult {
    /// Returns true when no withholding tax is owed.
    pub fn is_tax_exempt(&self) -> bool {
        self.income_tax == Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_sample_result(income_tax: Decimal) -> PayrollResult {
        PayrollResult {
            social_insurance: dec!(1125.00),
            health_insurance: dec!(500.00),
            housing_fund: dec!(100.00),
            total_contributions: dec!(1725.00),
            taxable_income: dec!(23275.00),
            income_tax,
            net_pay_after_tax_only: dec!(24511.60),
            total_deductions: dec!(2213.40),
            final_net_pay: dec!(22786.60),
        }
    }

    #[test]
    fn test_zero_tax_is_exempt() {
        assert!(create_sample_result(dec!(0.00)).is_tax_exempt());
    }

    #[test]
    fn test_positive_tax_is_not_exempt() {
        assert!(!create_sample_result(dec!(488.40)).is_tax_exempt());
    }

    #[test]
    fn test_serializes_amounts_as_strings() {
        let json = serde_json::to_value(create_sample_result(dec!(488.40))).unwrap();
        assert_eq!(json["social_insurance"], "1125.00");
        assert_eq!(json["income_tax"], "488.40");
        assert_eq!(json["final_net_pay"], "22786.60");
    }

    #[test]
    fn test_deserializes_from_json() {
        let result = create_sample_result(dec!(488.40));
        let json = serde_json::to_string(&result).unwrap();
        let parsed: PayrollResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
