//! Axum router configuration for FMEA endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    evaluate_style, get_case, health, list_cases, list_styles, run_fmea, run_fmea_report,
    FmeaAppState,
};

/// Create the FMEA API router.
///
/// # Routes
///
/// ## Catalogue
/// - `GET /health` - Liveness check
/// - `GET /styles` - The ten leadership styles with their bias
/// - `GET /cases` - Classic failure cases
/// - `GET /cases/:name` - One classic case
///
/// ## Analysis
/// - `POST /fmea` - Run all personas, JSON report
/// - `POST /fmea/report` - Run all personas, rendered report (query: compact)
/// - `POST /fmea/styles/:style` - Run a single persona
pub fn fmea_routes() -> Router<FmeaAppState> {
    Router::new()
        // Catalogue
        .route("/health", get(health))
        .route("/styles", get(list_styles))
        .route("/cases", get(list_cases))
        .route("/cases/:name", get(get_case))
        // Analysis
        .route("/fmea", post(run_fmea))
        .route("/fmea/report", post(run_fmea_report))
        .route("/fmea/styles/:style", post(evaluate_style))
}

/// Create the complete FMEA router, mounted at `/api`.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use crate::adapters::http::fmea::{fmea_router, FmeaAppState};
///
/// let state = FmeaAppState::new(config.analysis, Arc::new(MarkdownReportRenderer::new()));
/// let app = fmea_router(state);
/// ```
pub fn fmea_router(state: FmeaAppState) -> Router {
    Router::new().nest("/api", fmea_routes()).with_state(state)
}
