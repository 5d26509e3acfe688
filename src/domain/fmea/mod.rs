//! FMEA module - rule-based Failure Mode and Effects Analysis.
//!
//! Pure, stateless scoring over static tables: keyword weights, style
//! biases and mitigation text. No ports or adapters are involved.
//!
//! # Pipeline
//!
//! 1. `base_scores` - baseline (6, 5, 5), keyword deltas, length factor, clamp
//! 2. `style_adjusted_scores` - persona bias, clamp again
//! 3. `rpn` - S × O × D
//! 4. narrative - failure mode, effects, mitigations, optional explanation

mod cases;
mod engine;
mod keywords;
mod narrative;
mod report;
mod result;
mod scoring;

pub use cases::ClassicCase;
pub use engine::FmeaEngine;
pub use keywords::{matching_keywords, KeywordWeight, RISK_KEYWORDS};
pub use narrative::{
    explanation, failure_mode, mitigations_for, style_mitigations, EFFECTS, FALLBACK_MITIGATIONS,
};
pub use report::{LeadershipFmeaReport, PersonaAssessment, RiskSummary, RpnRanking};
pub use result::FmeaResult;
pub use scoring::{
    base_scores, length_factor, normalized_text, rpn, style_adjusted_scores, ScoreTriple,
    BASELINE_DETECTION, BASELINE_OCCURRENCE, BASELINE_SEVERITY, LENGTH_STEP_CHARS,
    MAX_LENGTH_FACTOR,
};
