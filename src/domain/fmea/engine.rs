//! FMEA engine - composes scoring and narrative into one result.

use super::narrative::{explanation, failure_mode, mitigations_for, EFFECTS};
use super::result::FmeaResult;
use super::scoring::{base_scores, rpn, style_adjusted_scores};
use crate::domain::leadership::{LeadershipStyle, Persona};

/// Stateless entry point for running an FMEA.
///
/// Every call is independent: the engine reads only static tables, so the
/// ten personas may be evaluated in any order, or concurrently.
pub struct FmeaEngine;

impl FmeaEngine {
    /// Evaluates a problem/decision pair through one of the ten known styles.
    pub fn evaluate(
        problem: &str,
        decision: &str,
        style: LeadershipStyle,
        include_explanation: bool,
    ) -> FmeaResult {
        Self::run(problem, decision, &Persona::from(style), include_explanation)
    }

    /// Evaluates a problem/decision pair through any persona.
    ///
    /// Blank input is not rejected here; it scores as the baseline.
    pub fn run(
        problem: &str,
        decision: &str,
        persona: &Persona,
        include_explanation: bool,
    ) -> FmeaResult {
        let base = base_scores(problem, decision);
        let scores = style_adjusted_scores(base, persona);

        FmeaResult::new(
            failure_mode(persona),
            EFFECTS.to_string(),
            scores,
            rpn(&scores),
            mitigations_for(persona).iter().map(|m| m.to_string()).collect(),
            include_explanation.then(|| explanation(persona, &scores)),
        )
    }
}
