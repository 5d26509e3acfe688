//! HTTP handlers for FMEA endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::application::handlers::{
    EvaluatePersonaHandler, EvaluatePersonaQuery, FmeaError, RunLeadershipFmeaCommand,
    RunLeadershipFmeaHandler,
};
use crate::config::AnalysisConfig;
use crate::domain::fmea::ClassicCase;
use crate::domain::foundation::ErrorCode;
use crate::domain::leadership::LeadershipStyle;
use crate::ports::{RenderError, RenderOptions, ReportRenderer};

use super::dto::{
    CasesResponse, ErrorResponse, HealthResponse, LeadershipFmeaReport, PersonaEvaluation,
    RunFmeaRequest, StyleView, StylesResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// FMEA API error that implements IntoResponse.
#[derive(Debug)]
pub enum FmeaApiError {
    BadRequest(FmeaError),
    NotFound { resource: &'static str, id: String },
    Internal(String),
}

impl IntoResponse for FmeaApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            FmeaApiError::BadRequest(err) => {
                let body = match &err {
                    FmeaError::MissingInput { field } => {
                        ErrorResponse::new(err.code(), err.to_string())
                            .with_details(json!({ "field": field }))
                    }
                    FmeaError::Validation(_) => ErrorResponse::new(err.code(), err.to_string()),
                };
                (StatusCode::BAD_REQUEST, body)
            }
            FmeaApiError::NotFound { resource, id } => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(resource, &id))
            }
            FmeaApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<FmeaError> for FmeaApiError {
    fn from(error: FmeaError) -> Self {
        FmeaApiError::BadRequest(error)
    }
}

impl From<RenderError> for FmeaApiError {
    fn from(error: RenderError) -> Self {
        tracing::error!("Report rendering failed: {}", error);
        FmeaApiError::Internal(format!("[{}] {}", ErrorCode::RenderFailed, error))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for FMEA endpoints.
#[derive(Clone)]
pub struct FmeaAppState {
    pub analysis: AnalysisConfig,
    pub renderer: Arc<dyn ReportRenderer>,
}

impl FmeaAppState {
    pub fn new(analysis: AnalysisConfig, renderer: Arc<dyn ReportRenderer>) -> Self {
        Self { analysis, renderer }
    }

    pub fn run_handler(&self) -> RunLeadershipFmeaHandler {
        RunLeadershipFmeaHandler::new(self.analysis.clone())
    }

    pub fn evaluate_handler(&self) -> EvaluatePersonaHandler {
        EvaluatePersonaHandler::new(self.analysis.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/styles
///
/// Lists the ten leadership styles in display order.
pub async fn list_styles() -> Json<StylesResponse> {
    let styles: Vec<StyleView> = LeadershipStyle::all()
        .iter()
        .map(|style| StyleView::from(*style))
        .collect();

    Json(StylesResponse {
        count: styles.len(),
        styles,
    })
}

/// GET /api/cases
pub async fn list_cases() -> Json<CasesResponse> {
    let cases = ClassicCase::all().to_vec();
    Json(CasesResponse {
        count: cases.len(),
        cases,
    })
}

/// GET /api/cases/:name
pub async fn get_case(Path(name): Path<String>) -> Result<Json<ClassicCase>, FmeaApiError> {
    ClassicCase::find(&name)
        .copied()
        .map(Json)
        .ok_or(FmeaApiError::NotFound {
            resource: "Case",
            id: name,
        })
}

/// POST /api/fmea
///
/// Runs the FMEA through every persona and returns the report as JSON.
pub async fn run_fmea(
    State(state): State<FmeaAppState>,
    Json(request): Json<RunFmeaRequest>,
) -> Result<Json<LeadershipFmeaReport>, FmeaApiError> {
    let report = execute_run(&state, request).await?;
    Ok(Json(report))
}

/// POST /api/fmea/report?compact=true
///
/// Runs the FMEA through every persona and returns a rendered document.
pub async fn run_fmea_report(
    State(state): State<FmeaAppState>,
    Query(options): Query<RenderOptions>,
    Json(request): Json<RunFmeaRequest>,
) -> Result<Response, FmeaApiError> {
    let report = execute_run(&state, request).await?;
    let body = state.renderer.render(&report, &options)?;

    Ok(([(header::CONTENT_TYPE, state.renderer.content_type())], body).into_response())
}

/// POST /api/fmea/styles/:style
///
/// Evaluates a single persona. Unknown style names use the neutral fallback.
pub async fn evaluate_style(
    State(state): State<FmeaAppState>,
    Path(style): Path<String>,
    Json(request): Json<RunFmeaRequest>,
) -> Result<Json<PersonaEvaluation>, FmeaApiError> {
    let query = EvaluatePersonaQuery {
        problem: request.problem,
        decision: request.decision,
        style,
        include_explanation: request.include_explanation,
    };

    let evaluation = state.evaluate_handler().handle(query).await?;
    Ok(Json(evaluation))
}

async fn execute_run(
    state: &FmeaAppState,
    request: RunFmeaRequest,
) -> Result<LeadershipFmeaReport, FmeaApiError> {
    let cmd = RunLeadershipFmeaCommand {
        problem: request.problem,
        decision: request.decision,
        include_explanation: request.include_explanation,
    };

    state.run_handler().handle(cmd).await.map_err(|err| {
        tracing::debug!("Rejected FMEA request: {}", err);
        FmeaApiError::from(err)
    })
}
