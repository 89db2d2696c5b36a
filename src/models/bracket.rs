//! Bracket table models.
//!
//! A [`BracketTable`] is an ordered, immutable list of [`BracketRow`]s. Each
//! row maps a range of values to a [`BracketPayload`]: either a fixed amount
//! (social insurance) or a tax formula (withholding tax).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Money;

/// The upper end of a bracket row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum UpperBound {
    /// The row ends at this value, inclusive.
    Bounded(Money),
    /// The row matches every value at or above its lower bound.
    Unbounded,
}

/// Parameters for a progressive tax bracket.
///
/// `tax = base_amount + marginal_rate * (taxable_income - bracket_floor)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxFormula {
    /// Fixed tax owed on income up to the bracket floor.
    pub base_amount: Money,
    /// Rate applied to the excess over the floor, as a fraction.
    pub marginal_rate: Decimal,
    /// The value the excess is measured from.
    pub bracket_floor: Money,
}

impl TaxFormula {
    /// Evaluates the formula for a taxable income, unrounded.
    pub fn evaluate(&self, taxable_income: Money) -> Decimal {
        self.base_amount + self.marginal_rate * (taxable_income - self.bracket_floor)
    }
}

/// What a matched bracket row pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketPayload {
    /// A single amount paid regardless of position within the bracket.
    FixedAmount(Money),
    /// A progressive tax formula.
    TaxFormula(TaxFormula),
}

/// One row of a bracket table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketRow {
    /// The lowest value this row matches, inclusive.
    pub lower_bound: Money,
    /// The highest value this row matches.
    pub upper_bound: UpperBound,
    /// The payout for values in this row.
    pub payload: BracketPayload,
}

impl BracketRow {
    /// Returns true if `value` lies within this row's own range.
    ///
    /// Both ends are inclusive; an unbounded row matches anything at or above
    /// its lower bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use ph_payroll::models::{BracketPayload, BracketRow, UpperBound, from_cents};
    ///
    /// let row = BracketRow {
    ///     lower_bound: from_cents(0),
    ///     upper_bound: UpperBound::Bounded(from_cents(324_999)),
    ///     payload: BracketPayload::FixedAmount(from_cents(13_500)),
    /// };
    /// assert!(row.contains(from_cents(324_999)));
    /// assert!(!row.contains(from_cents(325_000)));
    /// ```
    pub fn contains(&self, value: Money) -> bool {
        if value < self.lower_bound {
            return false;
        }
        match self.upper_bound {
            UpperBound::Bounded(upper) => value <= upper,
            UpperBound::Unbounded => true,
        }
    }

    /// Describes the row's range for audit output, e.g. `3250.00 - 3749.99`.
    pub fn range_label(&self) -> String {
        match self.upper_bound {
            UpperBound::Bounded(upper) => format!("{} - {}", self.lower_bound, upper),
            UpperBound::Unbounded => format!("{} and above", self.lower_bound),
        }
    }
}

/// A named, immutable bracket table.
#[derive(Debug, Clone, Copy)]
pub struct BracketTable {
    name: &'static str,
    rows: &'static [BracketRow],
}

impl BracketTable {
    /// Creates a table over statically allocated rows.
    pub const fn new(name: &'static str, rows: &'static [BracketRow]) -> Self {
        Self { name, rows }
    }

    /// Returns the table name used in errors and audit steps.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the rows in ascending order.
    pub fn rows(&self) -> &'static [BracketRow] {
        self.rows
    }
}

/// The row selected by a bracket lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketMatch {
    /// Zero-based position of the row in its table.
    pub position: usize,
    /// The selected row.
    pub row: BracketRow,
}
