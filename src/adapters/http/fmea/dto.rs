//! HTTP DTOs for FMEA endpoints.
//!
//! Report and result types already serialize cleanly, so responses for
//! runs reuse the domain types directly.

use serde::{Deserialize, Serialize};

pub use crate::application::handlers::PersonaEvaluation;
pub use crate::domain::fmea::{ClassicCase, LeadershipFmeaReport};

use crate::domain::foundation::ErrorCode;
use crate::domain::leadership::{LeadershipStyle, StyleBias};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for FMEA runs.
#[derive(Debug, Clone, Deserialize)]
pub struct RunFmeaRequest {
    pub problem: String,
    pub decision: String,
    /// Overrides the configured default when present.
    #[serde(default)]
    pub include_explanation: Option<bool>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Liveness response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// One leadership style as exposed by the API.
#[derive(Debug, Clone, Serialize)]
pub struct StyleView {
    pub tag: &'static str,
    pub name: &'static str,
    pub agent_label: String,
    pub description: &'static str,
    pub bias: StyleBias,
}

impl From<LeadershipStyle> for StyleView {
    fn from(style: LeadershipStyle) -> Self {
        Self {
            tag: style.tag(),
            name: style.display_name(),
            agent_label: style.agent_label(),
            description: style.description(),
            bias: StyleBias::for_style(style),
        }
    }
}

/// Response for listing styles.
#[derive(Debug, Clone, Serialize)]
pub struct StylesResponse {
    pub count: usize,
    pub styles: Vec<StyleView>,
}

/// Response for listing classic cases.
#[derive(Debug, Clone, Serialize)]
pub struct CasesResponse {
    pub count: usize,
    pub cases: Vec<ClassicCase>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new(
            ErrorCode::CaseNotFound,
            format!("{} not found: {}", resource_type, id),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}
