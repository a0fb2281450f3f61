//! HTTP API module for the Payroll Calculation Engine.
//!
//! This module provides the REST endpoints for running payroll
//! calculations and reloading the cached policy settings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, PolicyReloadRequest, SettingRowRequest};
pub use response::ApiError;
pub use state::AppState;
