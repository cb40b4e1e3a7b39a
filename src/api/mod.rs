//! HTTP API module for the utility backend.
//!
//! This module provides the REST endpoints for holiday classification and
//! client IP lookup, plus the health check and the static-asset fallback
//! wiring for the embedded frontend.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, HealthResponse, HolidayResponse, IpResponse};
pub use state::AppState;
