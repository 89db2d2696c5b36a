//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing deductions.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type. A failed
/// computation never yields a partial result.
///
/// # Example
///
/// ```
/// use ph_payroll::error::EngineError;
///
/// let error = EngineError::InvalidInputFormat {
///     input: "abc".to_string(),
///     message: "not a decimal number".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid income 'abc': not a decimal number");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The entered income could not be parsed as a decimal number.
    #[error("Invalid income '{input}': {message}")]
    InvalidInputFormat {
        /// The raw text that was rejected.
        input: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A value fell below every row of a bracket table.
    #[error("No bracket in table '{table}' matches value {value}")]
    NoMatchingBracket {
        /// The name of the table that was searched.
        table: String,
        /// The value that matched no row.
        value: Decimal,
    },

    /// A bracket table violates its ordering or contiguity rules.
    #[error("Invalid bracket table '{table}': {message}")]
    InvalidBracketTable {
        /// The name of the offending table.
        table: String,
        /// A description of the violated rule.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_invalid_input_format_displays_input_and_message() {
        let error = EngineError::InvalidInputFormat {
            input: "12,3x".to_string(),
            message: "not a decimal number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid income '12,3x': not a decimal number"
        );
    }

    #[test]
    fn test_no_matching_bracket_displays_table_and_value() {
        let error = EngineError::NoMatchingBracket {
            table: "social_insurance".to_string(),
            value: dec!(-1.00),
        };
        assert_eq!(
            error.to_string(),
            "No bracket in table 'social_insurance' matches value -1.00"
        );
    }

    #[test]
    fn test_invalid_bracket_table_displays_table_and_message() {
        let error = EngineError::InvalidBracketTable {
            table: "income_tax".to_string(),
            message: "last row must be unbounded".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid bracket table 'income_tax': last row must be unbounded"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/server.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/server.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_no_match() -> EngineResult<()> {
            Err(EngineError::NoMatchingBracket {
                table: "income_tax".to_string(),
                value: dec!(-5),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_no_match()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
