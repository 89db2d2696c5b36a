//! Request types for the payroll API.
//!
//! This module defines the JSON request structure for the `/compute` endpoint.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Money, parse_money};

/// Request body for the `/compute` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// Gross monthly income, as a decimal string or a JSON number.
    pub gross_monthly_income: IncomeValue,
}

/// An income value as sent by the client.
///
/// Strings are preferred because they keep every digit; numbers are accepted
/// for convenience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IncomeValue {
    /// A decimal string such as `"25000.00"` or `"Php 25,000"`.
    Text(String),
    /// A JSON number such as `25000`.
    Number(serde_json::Number),
}

impl IncomeValue {
    /// Parses the value into exact money.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInputFormat`](crate::error::EngineError::InvalidInputFormat)
    /// if the value is not a decimal number.
    pub fn to_money(&self) -> EngineResult<Money> {
        match self {
            IncomeValue::Text(text) => parse_money(text),
            IncomeValue::Number(number) => parse_money(&number.to_string()),
        }
    }
}
