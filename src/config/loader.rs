//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ServerConfig;

/// Loads service configuration from YAML.
///
/// # File Format
///
/// ```text
/// bind_address: "0.0.0.0:8080"
/// log_filter: "info"
/// include_audit_trace: true
/// ```
///
/// # Example
///
/// ```no_run
/// use ph_payroll::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/server.yaml")?;
/// println!("Binding to {}", config.bind_address);
/// # Ok::<(), ph_payroll::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns the parsed [`ServerConfig`], or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or wrongly typed fields (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<ServerConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Loads configuration from `path` if given, otherwise returns defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> EngineResult<ServerConfig> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(ServerConfig::default()),
        }
    }

    /// Parses YAML text; `source` names the origin in error messages.
    pub fn parse(content: &str, source: &str) -> EngineResult<ServerConfig> {
        // an empty file deserializes as YAML null
        if content.trim().is_empty() {
            return Ok(ServerConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "ph_payroll_{}_{}.yaml",
            name,
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_full_file() {
        let path = write_temp_config(
            "full",
            "bind_address: \"0.0.0.0:9090\"\nlog_filter: \"debug\"\ninclude_audit_trace: false\n",
        );

        let config = ConfigLoader::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:9090");
        assert_eq!(config.log_filter, "debug");
        assert!(!config.include_audit_trace);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = ConfigLoader::parse("log_filter: warn\n", "inline").unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.log_filter, "warn");
        assert!(config.include_audit_trace);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = ConfigLoader::parse("  \n", "inline").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_missing_file_returns_not_found() {
        let result = ConfigLoader::load("/nonexistent/path/server.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("server.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::parse("include_audit_trace: [not, a, bool]\n", "bad.yaml");

        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, "bad.yaml");
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = ConfigLoader::load_or_default(None::<&str>).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = ConfigLoader::load("./config/server.yaml").unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080");
    }
}
