//! HTTP API module for the payroll engine.
//!
//! This module exposes the payroll computation as a REST endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComputeRequest, IncomeValue};
pub use response::{ApiError, ApiErrorResponse, ComputeResponse};
pub use state::AppState;
