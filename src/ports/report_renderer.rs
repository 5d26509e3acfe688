//! Report Renderer Port - text rendering of leadership FMEA reports.
//!
//! The application layer produces a `LeadershipFmeaReport`; adapters
//! (like MarkdownReportRenderer) turn it into a document.

use serde::Deserialize;
use thiserror::Error;

use crate::domain::fmea::LeadershipFmeaReport;

/// Port for rendering a report into a text document.
///
/// # Contract
///
/// Implementations must:
/// - Emit one section per assessment, in the report's order
/// - Include explanations only when the result carries one
/// - Hide score details when `compact` is set
pub trait ReportRenderer: Send + Sync {
    /// Render the full report.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the report cannot be rendered.
    fn render(
        &self,
        report: &LeadershipFmeaReport,
        options: &RenderOptions,
    ) -> Result<String, RenderError>;

    /// MIME type of the rendered output.
    fn content_type(&self) -> &'static str;
}

/// Options that control rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RenderOptions {
    /// Hide the score table for each persona
    #[serde(default)]
    pub compact: bool,
}

/// Errors from report rendering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Report has no assessments to render")]
    EmptyReport,

    #[error("Failed to write report: {0}")]
    Write(String),
}

impl From<std::fmt::Error> for RenderError {
    fn from(err: std::fmt::Error) -> Self {
        RenderError::Write(err.to_string())
    }
}
