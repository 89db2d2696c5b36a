//! Core data models for the payroll engine.
//!
//! This module contains the monetary helpers, bracket tables, audit trail
//! and result types used throughout the engine.

mod audit;
mod bracket;
mod money;
mod payroll_result;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use bracket::{BracketMatch, BracketPayload, BracketRow, BracketTable, TaxFormula, UpperBound};
pub use money::{Money, from_cents, parse_money, percent};
pub use payroll_result::PayrollResult;
