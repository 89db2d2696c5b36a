//! Philippine Payroll Deduction Engine
//!
//! This crate computes monthly statutory contributions (SSS, PhilHealth,
//! Pag-IBIG), withholding income tax and net pay for a single employee
//! using the 2022 tables.
//!
//! ```
//! use ph_payroll::calculation::compute;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let result = compute(Decimal::from_str("25000.00").unwrap()).unwrap();
//! assert_eq!(result.final_net_pay.to_string(), "22786.60");
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
