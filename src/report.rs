//! Plain-text payroll report.
//!
//! Renders a [`PayrollResult`] the way the calculator prints it on a
//! terminal.

use std::fmt::Write;

use crate::models::PayrollResult;

/// Label printed before every amount.
pub const CURRENCY_LABEL: &str = "Php";

const DIVIDER_WIDTH: usize = 130;

/// Returns the divider line printed between report sections.
pub fn divider() -> String {
    "-".repeat(DIVIDER_WIDTH)
}

/// Returns the calculator banner shown before the income prompt.
pub fn render_banner() -> String {
    format!("{}\nTAX CALCULATOR PHILIPPINES 2022\n", divider())
}

/// Renders the computation results block.
///
/// # Examples
///
/// ```
/// use ph_payroll::calculation::compute;
/// use ph_payroll::report::render_report;
/// use rust_decimal::Decimal;
///
/// let result = compute(Decimal::new(1000000, 2)).unwrap();
/// let report = render_report(&result);
/// assert!(report.contains("Income Tax: Php 0.00 - Tax Exempted"));
/// ```
pub fn render_report(result: &PayrollResult) -> String {
    let mut out = String::new();
    let exempt_note = if result.is_tax_exempt() {
        " - Tax Exempted"
    } else {
        ""
    };

    // writing to a String cannot fail
    let _ = writeln!(out, "{}", divider());
    let _ = writeln!(out, "\nCOMPUTATION RESULTS");
    let _ = writeln!(out, "\nSSS Contribution: {} {}", CURRENCY_LABEL, result.social_insurance);
    let _ = writeln!(
        out,
        "PhilHealth Contribution: {} {}",
        CURRENCY_LABEL, result.health_insurance
    );
    let _ = writeln!(out, "Pag-IBIG Contribution: {} {}", CURRENCY_LABEL, result.housing_fund);
    let _ = writeln!(
        out,
        "Total Contributions: {} {}",
        CURRENCY_LABEL, result.total_contributions
    );
    let _ = writeln!(
        out,
        "\nIncome Tax: {} {}{}",
        CURRENCY_LABEL, result.income_tax, exempt_note
    );
    let _ = writeln!(
        out,
        "Net Pay After Tax: {} {}",
        CURRENCY_LABEL, result.net_pay_after_tax_only
    );
    let _ = writeln!(out, "\nTotal Deductions: {} {}", CURRENCY_LABEL, result.total_deductions);
    let _ = writeln!(
        out,
        "Net Pay After Deductions: {} {}",
        CURRENCY_LABEL, result.final_net_pay
    );

    out
}
