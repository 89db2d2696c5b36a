//! Audit trail models.
//!
//! Every engine records the rule it applied, its inputs and outputs, and a
//! human-readable explanation so a payslip can be traced back to the tables.

use serde::{Deserialize, Serialize};

/// A single step in the audit trail recording a calculation decision.
///
/// # Example
///
/// ```
/// use ph_payroll::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "social_insurance".to_string(),
///     rule_name: "SSS Contribution".to_string(),
///     legal_ref: "RA 11199; SSS Circular 2020-033".to_string(),
///     input: serde_json::json!({"monthly_income": "25000.00"}),
///     output: serde_json::json!({"contribution": "1125.00"}),
///     reasoning: "Income falls in bracket 45 of 45".to_string(),
/// };
/// assert_eq!(step.step_number, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The statute or circular the rule comes from.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag unusual inputs that still produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for one calculation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sample_step() -> AuditStep {
        AuditStep {
            step_number: 3,
            rule_id: "housing_fund".to_string(),
            rule_name: "Pag-IBIG Contribution".to_string(),
            legal_ref: "RA 9679; HDMF Circular 274".to_string(),
            input: serde_json::json!({"monthly_income": "1000.00"}),
            output: serde_json::json!({"contribution": "10.00"}),
            reasoning: "1% of 1000.00".to_string(),
        }
    }

    #[test]
    fn test_audit_step_round_trips_through_json() {
        let step = create_sample_step();
        let json = serde_json::to_string(&step).unwrap();
        let parsed: AuditStep = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, step);
    }

    #[test]
    fn test_audit_trace_serializes_fields() {
        let trace = AuditTrace {
            steps: vec![create_sample_step()],
            warnings: vec![AuditWarning {
                code: "CONTRIBUTIONS_EXCEED_GROSS".to_string(),
                message: "Contributions exceed gross income".to_string(),
                severity: "medium".to_string(),
            }],
            duration_us: 42,
        };

        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["steps"][0]["rule_id"], "housing_fund");
        assert_eq!(json["warnings"][0]["code"], "CONTRIBUTIONS_EXCEED_GROSS");
        assert_eq!(json["duration_us"], 42);
    }
}
