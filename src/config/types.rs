//! Configuration types for the payroll service.
//!
//! These structures are deserialized from YAML. Every field has a default so
//! a partial file is valid.

use serde::{Deserialize, Serialize};

/// Runtime settings for the HTTP service and logging.
///
/// The statutory tables are fixed in code and are not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    pub bind_address: String,
    /// Log filter used when `RUST_LOG` is unset (e.g. "info", "ph_payroll=debug").
    pub log_filter: String,
    /// Whether `/compute` responses include the audit trace.
    pub include_audit_trace: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            log_filter: "info".to_string(),
            include_audit_trace: true,
        }
    }
}
