//! Configuration loading for the payroll service.
//!
//! This module loads runtime settings for the HTTP service and logging from
//! a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use ph_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/server.yaml").unwrap();
//! println!("Listening on: {}", config.bind_address);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::ServerConfig;
