//! Analysis run configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::leadership::LeadershipStyle;

/// Longest pause allowed between agents.
pub const MAX_AGENT_DELAY_MS: u64 = 3_000;

/// Settings for leadership FMEA runs
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Include the ELI5 explanation when a request doesn't say
    #[serde(default = "default_explain_by_default")]
    pub explain_by_default: bool,

    /// Pause between persona evaluations, in milliseconds
    #[serde(default)]
    pub agent_delay_ms: u64,

    /// Maximum characters accepted per problem or decision text
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

impl AnalysisConfig {
    /// Pause between persona evaluations
    pub fn agent_delay(&self) -> Duration {
        Duration::from_millis(self.agent_delay_ms)
    }

    /// Total pause across a full run: one delay between each pair of agents
    pub fn run_delay(&self) -> Duration {
        let pauses = LeadershipStyle::all().len().saturating_sub(1) as u32;
        self.agent_delay() * pauses
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.agent_delay_ms > MAX_AGENT_DELAY_MS {
            return Err(ValidationError::AgentDelayTooLong);
        }
        if self.max_input_chars == 0 {
            return Err(ValidationError::InvalidMaxInputChars);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            explain_by_default: default_explain_by_default(),
            agent_delay_ms: 0,
            max_input_chars: default_max_input_chars(),
        }
    }
}

fn default_explain_by_default() -> bool {
    true
}

fn default_max_input_chars() -> usize {
    10_000
}
