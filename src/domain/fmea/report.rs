//! Report types for a full ten-persona run.

use serde::Serialize;

use super::result::FmeaResult;
use crate::domain::foundation::{AnalysisId, Timestamp};
use crate::domain::leadership::LeadershipStyle;

/// One persona's contribution to a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaAssessment {
    pub style: LeadershipStyle,
    pub agent_label: String,
    pub description: String,
    pub result: FmeaResult,
}

impl PersonaAssessment {
    pub fn new(style: LeadershipStyle, result: FmeaResult) -> Self {
        Self {
            style,
            agent_label: style.agent_label(),
            description: style.description().to_string(),
            result,
        }
    }
}

/// A style paired with its RPN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RpnRanking {
    pub style: LeadershipStyle,
    pub rpn: u16,
}

/// Cross-persona view of where risk concentrates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummary {
    pub highest: RpnRanking,
    pub lowest: RpnRanking,
    pub mean_rpn: f64,
}

impl RiskSummary {
    /// Summarizes assessments. Ties go to the earlier assessment.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_assessments(assessments: &[PersonaAssessment]) -> Option<Self> {
        let first = assessments.first()?;
        let rank = |a: &PersonaAssessment| RpnRanking {
            style: a.style,
            rpn: a.result.rpn(),
        };

        let mut highest = rank(first);
        let mut lowest = rank(first);
        let mut total: u32 = 0;

        for assessment in assessments {
            let current = rank(assessment);
            if current.rpn > highest.rpn {
                highest = current;
            }
            if current.rpn < lowest.rpn {
                lowest = current;
            }
            total += u32::from(current.rpn);
        }

        Some(Self {
            highest,
            lowest,
            mean_rpn: f64::from(total) / assessments.len() as f64,
        })
    }
}

/// Full leadership FMEA across every persona.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadershipFmeaReport {
    pub id: AnalysisId,
    pub generated_at: Timestamp,
    pub problem: String,
    pub decision: String,
    pub assessments: Vec<PersonaAssessment>,
    pub summary: Option<RiskSummary>,
}

impl LeadershipFmeaReport {
    pub fn new(problem: String, decision: String, assessments: Vec<PersonaAssessment>) -> Self {
        let summary = RiskSummary::from_assessments(&assessments);
        Self {
            id: AnalysisId::new(),
            generated_at: Timestamp::now(),
            problem,
            decision,
            assessments,
            summary,
        }
    }

    /// Returns the assessment for a style, if present.
    pub fn assessment(&self, style: LeadershipStyle) -> Option<&PersonaAssessment> {
        self.assessments.iter().find(|a| a.style == style)
    }
}
