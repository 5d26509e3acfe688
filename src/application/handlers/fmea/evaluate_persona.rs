//! EvaluatePersonaHandler - Query handler for a single persona.
//!
//! Accepts a free-text style name. Names outside the ten known styles are
//! still evaluated, with a neutral bias and generic mitigations.

use serde::Serialize;
use tracing::{debug, warn};

use super::errors::FmeaError;
use super::input::validate_input;
use crate::config::AnalysisConfig;
use crate::domain::fmea::{FmeaEngine, FmeaResult};
use crate::domain::leadership::Persona;

/// Query to evaluate one persona.
#[derive(Debug, Clone)]
pub struct EvaluatePersonaQuery {
    pub problem: String,
    pub decision: String,
    pub style: String,
    /// Falls back to `AnalysisConfig::explain_by_default` when `None`.
    pub include_explanation: Option<bool>,
}

/// The persona the style name resolved to, with its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaEvaluation {
    pub persona: Persona,
    pub result: FmeaResult,
}

/// Handler for single-persona evaluations.
pub struct EvaluatePersonaHandler {
    config: AnalysisConfig,
}

impl EvaluatePersonaHandler {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub async fn handle(&self, query: EvaluatePersonaQuery) -> Result<PersonaEvaluation, FmeaError> {
        validate_input(&query.problem, &query.decision, self.config.max_input_chars)?;

        let persona = Persona::parse(&query.style);
        if !persona.is_recognized() {
            warn!(style = %query.style, "Unrecognized leadership style, using neutral bias");
        }

        let include_explanation = query
            .include_explanation
            .unwrap_or(self.config.explain_by_default);
        let result = FmeaEngine::run(&query.problem, &query.decision, &persona, include_explanation);
        debug!(persona = %persona, rpn = result.rpn(), "Persona evaluated");

        Ok(PersonaEvaluation { persona, result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::leadership::LeadershipStyle;

    fn query(style: &str) -> EvaluatePersonaQuery {
        EvaluatePersonaQuery {
            problem: "Legacy platform aging".to_string(),
            decision: "Cloud migration".to_string(),
            style: style.to_string(),
            include_explanation: Some(false),
        }
    }

    #[tokio::test]
    async fn test_known_style_resolves() {
        let handler = EvaluatePersonaHandler::new(AnalysisConfig::default());
        let evaluation = handler.handle(query("laissez_faire")).await.unwrap();

        assert_eq!(evaluation.persona, Persona::Style(LeadershipStyle::LaissezFaire));
        assert_eq!(
            evaluation.result,
            FmeaEngine::evaluate(
                "Legacy platform aging",
                "Cloud migration",
                LeadershipStyle::LaissezFaire,
                false
            )
        );
    }

    #[tokio::test]
    async fn test_unknown_style_falls_back() {
        let handler = EvaluatePersonaHandler::new(AnalysisConfig::default());
        let evaluation = handler.handle(query("Pirate")).await.unwrap();

        assert!(!evaluation.persona.is_recognized());
        assert_eq!(evaluation.result.mitigations().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_problem_rejected() {
        let handler = EvaluatePersonaHandler::new(AnalysisConfig::default());
        let mut q = query("servant");
        q.problem = String::new();
        assert!(matches!(
            handler.handle(q).await,
            Err(FmeaError::MissingInput { field: "problem" })
        ));
    }
}
