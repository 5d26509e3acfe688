//! RunLeadershipFmeaHandler - Command handler for a full ten-persona run.
//!
//! Validates the problem/decision pair, then evaluates every leadership
//! style in canonical order and assembles a report.

use tracing::{debug, info};

use super::errors::FmeaError;
use super::input::validate_input;
use crate::config::AnalysisConfig;
use crate::domain::fmea::{FmeaEngine, LeadershipFmeaReport, PersonaAssessment};
use crate::domain::leadership::LeadershipStyle;

/// Command to run the FMEA through all ten personas.
#[derive(Debug, Clone)]
pub struct RunLeadershipFmeaCommand {
    pub problem: String,
    pub decision: String,
    /// Falls back to `AnalysisConfig::explain_by_default` when `None`.
    pub include_explanation: Option<bool>,
}

/// Result of a successful run.
pub type RunLeadershipFmeaResult = LeadershipFmeaReport;

/// Handler for full leadership FMEA runs.
pub struct RunLeadershipFmeaHandler {
    config: AnalysisConfig,
}

impl RunLeadershipFmeaHandler {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub async fn handle(
        &self,
        cmd: RunLeadershipFmeaCommand,
    ) -> Result<RunLeadershipFmeaResult, FmeaError> {
        validate_input(&cmd.problem, &cmd.decision, self.config.max_input_chars)?;

        let include_explanation = cmd
            .include_explanation
            .unwrap_or(self.config.explain_by_default);
        let delay = self.config.agent_delay();

        let mut assessments = Vec::with_capacity(LeadershipStyle::all().len());
        for (idx, style) in LeadershipStyle::all().iter().enumerate() {
            if idx > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let result = FmeaEngine::evaluate(&cmd.problem, &cmd.decision, *style, include_explanation);
            debug!(style = style.tag(), rpn = result.rpn(), "Persona evaluated");
            assessments.push(PersonaAssessment::new(*style, result));
        }

        let report = LeadershipFmeaReport::new(cmd.problem, cmd.decision, assessments);
        if let Some(summary) = &report.summary {
            info!(
                analysis_id = %report.id,
                highest = summary.highest.style.tag(),
                highest_rpn = summary.highest.rpn,
                "Leadership FMEA completed"
            );
        }

        Ok(report)
    }
}
