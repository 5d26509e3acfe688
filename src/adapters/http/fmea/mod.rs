//! FMEA HTTP adapter module.
//!
//! Provides REST API endpoints for leadership FMEA runs.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{FmeaApiError, FmeaAppState};
pub use routes::{fmea_router, fmea_routes};
