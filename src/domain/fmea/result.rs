//! FmeaResult - the output of one persona's analysis.

use serde::{Deserialize, Serialize};

use super::scoring::{rpn, ScoreTriple};
use crate::domain::foundation::{Score, ValidationError};

/// Result of scoring one problem/decision pair through one persona.
///
/// Built once by the engine and never changed afterwards; fields are
/// read through accessors. Deserialization rejects an `rpn` that is not
/// the product of the three scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FmeaResultRecord")]
pub struct FmeaResult {
    failure_mode: String,
    effects: String,
    severity: Score,
    occurrence: Score,
    detection: Score,
    rpn: u16,
    mitigations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
}

impl FmeaResult {
    pub(crate) fn new(
        failure_mode: String,
        effects: String,
        scores: ScoreTriple,
        rpn: u16,
        mitigations: Vec<String>,
        explanation: Option<String>,
    ) -> Self {
        Self {
            failure_mode,
            effects,
            severity: scores.severity,
            occurrence: scores.occurrence,
            detection: scores.detection,
            rpn,
            mitigations,
            explanation,
        }
    }

    pub fn failure_mode(&self) -> &str {
        &self.failure_mode
    }

    pub fn effects(&self) -> &str {
        &self.effects
    }

    pub fn severity(&self) -> Score {
        self.severity
    }

    pub fn occurrence(&self) -> Score {
        self.occurrence
    }

    pub fn detection(&self) -> Score {
        self.detection
    }

    /// Returns the final S/O/D triple.
    pub fn scores(&self) -> ScoreTriple {
        ScoreTriple {
            severity: self.severity,
            occurrence: self.occurrence,
            detection: self.detection,
        }
    }

    pub fn rpn(&self) -> u16 {
        self.rpn
    }

    pub fn mitigations(&self) -> &[String] {
        &self.mitigations
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }
}

/// Wire shape of `FmeaResult`, checked before it becomes one.
#[derive(Deserialize)]
struct FmeaResultRecord {
    failure_mode: String,
    effects: String,
    severity: Score,
    occurrence: Score,
    detection: Score,
    rpn: u16,
    mitigations: Vec<String>,
    #[serde(default)]
    explanation: Option<String>,
}

impl TryFrom<FmeaResultRecord> for FmeaResult {
    type Error = ValidationError;

    fn try_from(record: FmeaResultRecord) -> Result<Self, Self::Error> {
        let scores = ScoreTriple {
            severity: record.severity,
            occurrence: record.occurrence,
            detection: record.detection,
        };
        let expected = rpn(&scores);
        if record.rpn != expected {
            return Err(ValidationError::invalid_format(
                "rpn",
                format!("expected {} for S×O×D, got {}", expected, record.rpn),
            ));
        }

        Ok(Self::new(
            record.failure_mode,
            record.effects,
            scores,
            expected,
            record.mitigations,
            record.explanation,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fmea::FmeaEngine;
    use crate::domain::leadership::LeadershipStyle;

    fn record_json(rpn: u16) -> String {
        format!(
            r#"{{"failure_mode":"f","effects":"e","severity":1,"occurrence":1,"detection":1,"rpn":{},"mitigations":[]}}"#,
            rpn
        )
    }

    #[test]
    fn deserialize_accepts_consistent_rpn() {
        let result: FmeaResult = serde_json::from_str(&record_json(1)).unwrap();
        assert_eq!(result.scores().as_tuple(), (1, 1, 1));
        assert_eq!(result.rpn(), 1);
        assert!(result.explanation().is_none());
    }

    #[test]
    fn deserialize_rejects_rpn_that_is_not_the_product() {
        let err = serde_json::from_str::<FmeaResult>(&record_json(999)).unwrap_err();
        assert!(err.to_string().contains("expected 1 for S×O×D, got 999"));
    }

    #[test]
    fn deserialize_rejects_out_of_range_scores() {
        let json = r#"{"failure_mode":"f","effects":"e","severity":11,"occurrence":1,"detection":1,"rpn":11,"mitigations":[]}"#;
        assert!(serde_json::from_str::<FmeaResult>(json).is_err());
    }

    #[test]
    fn engine_result_survives_json() {
        let result = FmeaEngine::evaluate("Merger talks", "Layoff plan", LeadershipStyle::Visionary, true);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(serde_json::from_str::<FmeaResult>(&json).unwrap(), result);
    }
}
