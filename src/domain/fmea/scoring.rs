//! Severity / Occurrence / Detection scoring.
//!
//! Scores are computed in two stages, each ending in a clamp to [1, 10]:
//! keyword and length heuristics over the input text, then the persona's
//! bias. Clamping after each stage rather than once at the end matters
//! when many keywords push a running total far past a bound.

use serde::{Deserialize, Serialize};

use super::keywords::matching_keywords;
use crate::domain::foundation::Score;
use crate::domain::leadership::Persona;

/// Starting severity before any keyword or length adjustment.
pub const BASELINE_SEVERITY: i32 = 6;
/// Starting occurrence before any keyword or length adjustment.
pub const BASELINE_OCCURRENCE: i32 = 5;
/// Starting detection before any keyword adjustment.
pub const BASELINE_DETECTION: i32 = 5;

/// Characters of input per step of the length factor.
pub const LENGTH_STEP_CHARS: usize = 200;
/// Upper bound on the length factor.
pub const MAX_LENGTH_FACTOR: usize = 3;

/// Severity, Occurrence and Detection, each in [1, 10].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreTriple {
    pub severity: Score,
    pub occurrence: Score,
    pub detection: Score,
}

impl ScoreTriple {
    /// Builds a triple, clamping each running total into [1, 10].
    pub fn clamped(severity: i32, occurrence: i32, detection: i32) -> Self {
        Self {
            severity: Score::clamped(severity),
            occurrence: Score::clamped(occurrence),
            detection: Score::clamped(detection),
        }
    }

    /// The (6, 5, 5) starting point.
    pub fn baseline() -> Self {
        Self::clamped(BASELINE_SEVERITY, BASELINE_OCCURRENCE, BASELINE_DETECTION)
    }

    /// Returns the components as a plain tuple.
    pub fn as_tuple(&self) -> (u8, u8, u8) {
        (
            self.severity.value(),
            self.occurrence.value(),
            self.detection.value(),
        )
    }
}

/// Joins and lowercases the two inputs the way scoring sees them.
pub fn normalized_text(problem: &str, decision: &str) -> String {
    format!("{} {}", problem, decision).to_lowercase()
}

/// Length factor: one step per 200 characters, capped at 3.
pub fn length_factor(text: &str) -> i32 {
    let steps = (text.chars().count() / LENGTH_STEP_CHARS).min(MAX_LENGTH_FACTOR);
    // At most MAX_LENGTH_FACTOR.
    steps as i32
}

/// Computes the text-driven scores before any persona bias.
pub fn base_scores(problem: &str, decision: &str) -> ScoreTriple {
    let text = normalized_text(problem, decision);

    let (mut severity, mut occurrence, mut detection) =
        (BASELINE_SEVERITY, BASELINE_OCCURRENCE, BASELINE_DETECTION);

    for kw in matching_keywords(&text) {
        severity += kw.severity_delta;
        occurrence += kw.occurrence_delta;
        detection += kw.detection_delta;
    }

    let factor = length_factor(&text);
    severity += factor;
    occurrence += factor;

    ScoreTriple::clamped(severity, occurrence, detection)
}

/// Applies a persona's bias to base scores and clamps again.
pub fn style_adjusted_scores(base: ScoreTriple, persona: &Persona) -> ScoreTriple {
    let bias = persona.bias();
    ScoreTriple::clamped(
        base.severity.as_i32() + bias.severity_delta,
        base.occurrence.as_i32() + bias.occurrence_delta,
        base.detection.as_i32() + bias.detection_delta,
    )
}

/// Risk Priority Number: S × O × D, always in [1, 1000].
pub fn rpn(scores: &ScoreTriple) -> u16 {
    u16::from(scores.severity.value())
        * u16::from(scores.occurrence.value())
        * u16::from(scores.detection.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::leadership::LeadershipStyle;
    use proptest::prelude::*;

    fn triple(s: i32, o: i32, d: i32) -> ScoreTriple {
        ScoreTriple::clamped(s, o, d)
    }

    #[test]
    fn empty_inputs_score_baseline() {
        assert_eq!(base_scores("", "").as_tuple(), (6, 5, 5));
    }

    #[test]
    fn short_text_without_keywords_scores_baseline() {
        assert_eq!(
            base_scores("Sales are flat", "Hire two more reps").as_tuple(),
            (6, 5, 5)
        );
    }

    #[test]
    fn merger_and_acquisition_accumulate() {
        assert_eq!(
            base_scores("We plan a merger and acquisition", "").as_tuple(),
            (10, 7, 3)
        );
    }

    #[test]
    fn keyword_matching_ignores_case() {
        assert_eq!(
            base_scores("MERGER", "Acquisition").as_tuple(),
            base_scores("merger", "acquisition").as_tuple()
        );
    }

    #[test]
    fn keyword_counts_once_per_text() {
        assert_eq!(
            base_scores("merger merger merger", "merger").as_tuple(),
            (8, 6, 4)
        );
    }

    #[test]
    fn base_stage_clamps_before_bias() {
        // Raw totals: severity 6+3+2+2+2 = 15, detection 5-2-1-1-1 = 0.
        let base = base_scores("shutdown after merger", "layoff and pivot");
        assert_eq!(base.severity.value(), 10);
        assert_eq!(base.detection.value(), 1);

        // Bureaucratic lowers severity from the clamped 10, not from 15.
        let adjusted = style_adjusted_scores(base, &LeadershipStyle::Bureaucratic.into());
        assert_eq!(adjusted.severity.value(), 9);
        assert_eq!(adjusted.detection.value(), 3);
    }

    #[test]
    fn length_factor_steps_every_200_chars() {
        assert_eq!(length_factor(&"x".repeat(199)), 0);
        assert_eq!(length_factor(&"x".repeat(200)), 1);
        assert_eq!(length_factor(&"x".repeat(450)), 2);
        assert_eq!(length_factor(&"x".repeat(600)), 3);
        assert_eq!(length_factor(&"x".repeat(5000)), 3);
    }

    #[test]
    fn length_factor_counts_characters_not_bytes() {
        assert_eq!(length_factor(&"é".repeat(150)), 0);
    }

    #[test]
    fn long_text_saturates_length_factor() {
        let problem = "x".repeat(600);
        assert_eq!(base_scores(&problem, "").as_tuple(), (9, 8, 5));
    }

    #[test]
    fn joining_space_counts_toward_length() {
        assert_eq!(normalized_text(&"x".repeat(199), "").chars().count(), 200);
        assert_eq!(base_scores(&"x".repeat(199), "").as_tuple(), (7, 6, 5));
    }

    #[test]
    fn length_counts_both_inputs() {
        assert_eq!(
            base_scores(&"x".repeat(300), &"y".repeat(300)).as_tuple(),
            (9, 8, 5)
        );
    }

    #[test]
    fn keyword_split_across_inputs_does_not_match() {
        assert_eq!(base_scores("merg", "er").as_tuple(), (6, 5, 5));
    }

    #[test]
    fn autocratic_adjusts_baseline() {
        let adjusted =
            style_adjusted_scores(ScoreTriple::baseline(), &LeadershipStyle::Autocratic.into());
        assert_eq!(adjusted.as_tuple(), (7, 6, 4));
        assert_eq!(rpn(&adjusted), 168);
    }

    #[test]
    fn servant_leaves_scores_unchanged() {
        let base = triple(8, 3, 2);
        assert_eq!(
            style_adjusted_scores(base, &LeadershipStyle::Servant.into()),
            base
        );
    }

    #[test]
    fn unrecognized_persona_leaves_scores_unchanged() {
        let base = triple(4, 9, 7);
        assert_eq!(style_adjusted_scores(base, &Persona::parse("Pirate")), base);
    }

    #[test]
    fn style_stage_clamps_at_bounds() {
        let adjusted =
            style_adjusted_scores(triple(10, 10, 1), &LeadershipStyle::LaissezFaire.into());
        assert_eq!(adjusted.as_tuple(), (10, 10, 1));
    }

    #[test]
    fn rpn_extremes() {
        assert_eq!(rpn(&triple(1, 1, 1)), 1);
        assert_eq!(rpn(&triple(10, 10, 10)), 1000);
    }

    proptest! {
        #[test]
        fn adjusted_scores_stay_in_range(
            problem in ".{0,700}",
            decision in ".{0,300}",
            idx in 0usize..10,
        ) {
            let style = LeadershipStyle::all()[idx];
            let scores = style_adjusted_scores(base_scores(&problem, &decision), &style.into());
            for value in [scores.severity, scores.occurrence, scores.detection] {
                prop_assert!((1..=10).contains(&value.value()));
            }
        }

        #[test]
        fn rpn_is_exact_product_within_bounds(s in -20i32..30, o in -20i32..30, d in -20i32..30) {
            let scores = triple(s, o, d);
            let (s, o, d) = scores.as_tuple();
            let value = rpn(&scores);
            prop_assert_eq!(u32::from(value), u32::from(s) * u32::from(o) * u32::from(d));
            prop_assert!((1..=1000).contains(&value));
        }

        #[test]
        fn base_scores_are_deterministic(problem in ".{0,300}", decision in ".{0,300}") {
            prop_assert_eq!(base_scores(&problem, &decision), base_scores(&problem, &decision));
        }
    }
}
