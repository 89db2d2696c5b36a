//! Property tests for the payroll engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use ph_payroll::calculation::{
    HEALTH_INSURANCE_SALARY_CEILING, HEALTH_INSURANCE_SALARY_FLOOR, INCOME_TAX_TABLE,
    SOCIAL_INSURANCE_TABLE, compute, compute_with_audit, falls_between_rows,
    health_insurance_contribution, housing_fund_contribution, income_tax, lookup_bracket,
    round_income, social_insurance_contribution,
};
use ph_payroll::models::BracketPayload;

/// Non-negative peso amounts with centavo precision, up to 2,000,000.00.
fn income() -> impl Strategy<Value = Decimal> {
    (0i64..=200_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #[test]
    fn compute_is_idempotent(gross in income()) {
        let first = compute_with_audit(gross).unwrap();
        let second = compute_with_audit(gross).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn net_pay_identities_hold(gross in income()) {
        let result = compute(gross).unwrap();

        prop_assert_eq!(
            result.total_contributions,
            result.social_insurance + result.health_insurance + result.housing_fund
        );
        prop_assert_eq!(result.taxable_income, gross - result.total_contributions);
        prop_assert_eq!(result.final_net_pay, gross - (result.income_tax + result.total_contributions));
        prop_assert_eq!(result.net_pay_after_tax_only, gross - result.income_tax);
    }

    #[test]
    fn every_amount_has_two_decimal_places(gross in income()) {
        let result = compute(gross).unwrap();
        for value in [
            result.social_insurance,
            result.health_insurance,
            result.housing_fund,
            result.total_contributions,
            result.taxable_income,
            result.income_tax,
            result.net_pay_after_tax_only,
            result.total_deductions,
            result.final_net_pay,
        ] {
            prop_assert_eq!(value.scale(), 2);
        }
    }

    #[test]
    fn social_insurance_pays_the_containing_row(gross in income()) {
        let contribution = social_insurance_contribution(gross).unwrap();
        let rows = SOCIAL_INSURANCE_TABLE.rows();
        let containing: Vec<_> = rows.iter().filter(|row| row.contains(gross)).collect();

        prop_assert_eq!(containing.len(), 1);
        prop_assert_eq!(containing[0].payload, BracketPayload::FixedAmount(contribution));
    }

    #[test]
    fn social_insurance_never_decreases(a in income(), b in income()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            social_insurance_contribution(low).unwrap()
                <= social_insurance_contribution(high).unwrap()
        );
    }

    #[test]
    fn health_insurance_stays_between_floor_and_ceiling_shares(gross in income()) {
        let contribution = health_insurance_contribution(gross);
        let two = Decimal::from(2);
        let rate = Decimal::new(4, 2);
        prop_assert!(contribution >= HEALTH_INSURANCE_SALARY_FLOOR * rate / two);
        prop_assert!(contribution <= HEALTH_INSURANCE_SALARY_CEILING * rate / two);
    }

    #[test]
    fn housing_fund_never_exceeds_cap_share(gross in income()) {
        prop_assert!(housing_fund_contribution(gross) <= Decimal::new(10000, 2));
    }

    #[test]
    fn income_tax_is_never_negative(taxable in income()) {
        prop_assert!(income_tax(taxable).unwrap() >= Decimal::ZERO);
    }

    #[test]
    fn income_tax_is_monotonic_on_whole_pesos(a in 0i64..=2_000_000, b in 0i64..=2_000_000) {
        // centavo values between brackets owe nothing, so only whole pesos
        // are ordered
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            income_tax(Decimal::from(low)).unwrap() <= income_tax(Decimal::from(high)).unwrap()
        );
    }

    #[test]
    fn tax_lookup_matches_a_containing_row_or_owes_nothing(taxable in income()) {
        match lookup_bracket(&INCOME_TAX_TABLE, taxable) {
            Ok(matched) => prop_assert!(matched.row.contains(taxable)),
            Err(_) => {
                prop_assert!(falls_between_rows(&INCOME_TAX_TABLE, taxable));
                prop_assert_eq!(income_tax(taxable).unwrap(), Decimal::ZERO);
            }
        }
    }

    #[test]
    fn income_between_whole_pesos_in_a_gap_owes_nothing(
        peso in prop::sample::select(vec![33332i64, 66666, 166666, 666666]),
        centavos in 1i64..=99,
    ) {
        let taxable = Decimal::new(peso * 100 + centavos, 2);
        prop_assert_eq!(income_tax(taxable).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn sub_centavo_income_matches_its_rounded_income(mills in 0i64..=3_000_000_000) {
        let gross = Decimal::new(mills, 3);
        prop_assert_eq!(compute(gross).unwrap(), compute(round_income(gross)).unwrap());
    }

    #[test]
    fn negative_income_is_always_rejected(cents in 1i64..=100_000_000) {
        prop_assert!(compute(Decimal::new(-cents, 2)).is_err());
    }
}
