//! LeadershipStyle enum representing the ten leadership personas.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Suffix appended to a style name to form its agent label.
const AGENT_LABEL_SUFFIX: &str = "Leader Agentic AI Agent CEO";

/// The ten leadership personas, declared in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadershipStyle {
    Autocratic,
    Democratic,
    LaissezFaire,
    Transformational,
    Transactional,
    Servant,
    Charismatic,
    Situational,
    Visionary,
    Bureaucratic,
}

impl LeadershipStyle {
    /// Returns all styles in canonical order.
    pub fn all() -> &'static [LeadershipStyle] {
        &[
            LeadershipStyle::Autocratic,
            LeadershipStyle::Democratic,
            LeadershipStyle::LaissezFaire,
            LeadershipStyle::Transformational,
            LeadershipStyle::Transactional,
            LeadershipStyle::Servant,
            LeadershipStyle::Charismatic,
            LeadershipStyle::Situational,
            LeadershipStyle::Visionary,
            LeadershipStyle::Bureaucratic,
        ]
    }

    /// Returns the 0-based index of this style in the canonical order.
    pub fn order_index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            LeadershipStyle::Autocratic => "Autocratic",
            LeadershipStyle::Democratic => "Democratic",
            LeadershipStyle::LaissezFaire => "Laissez-Faire",
            LeadershipStyle::Transformational => "Transformational",
            LeadershipStyle::Transactional => "Transactional",
            LeadershipStyle::Servant => "Servant",
            LeadershipStyle::Charismatic => "Charismatic",
            LeadershipStyle::Situational => "Situational",
            LeadershipStyle::Visionary => "Visionary",
            LeadershipStyle::Bureaucratic => "Bureaucratic",
        }
    }

    /// Returns the snake_case tag used on the wire and in URLs.
    pub fn tag(&self) -> &'static str {
        match self {
            LeadershipStyle::Autocratic => "autocratic",
            LeadershipStyle::Democratic => "democratic",
            LeadershipStyle::LaissezFaire => "laissez_faire",
            LeadershipStyle::Transformational => "transformational",
            LeadershipStyle::Transactional => "transactional",
            LeadershipStyle::Servant => "servant",
            LeadershipStyle::Charismatic => "charismatic",
            LeadershipStyle::Situational => "situational",
            LeadershipStyle::Visionary => "visionary",
            LeadershipStyle::Bureaucratic => "bureaucratic",
        }
    }

    /// Returns the full agent label, e.g. "Autocratic Leader Agentic AI Agent CEO".
    pub fn agent_label(&self) -> String {
        format!("{} {}", self.display_name(), AGENT_LABEL_SUFFIX)
    }

    /// Returns a one-line summary of how this style leads.
    pub fn description(&self) -> &'static str {
        match self {
            LeadershipStyle::Autocratic => "Decides alone, tight control, speed over consensus.",
            LeadershipStyle::Democratic => {
                "Seeks participation and consensus, inclusive decision-making."
            }
            LeadershipStyle::LaissezFaire => "Hands-off, relies on team autonomy and initiative.",
            LeadershipStyle::Transformational => "Drives inspiring vision, change, and innovation.",
            LeadershipStyle::Transactional => {
                "Targets performance via incentives, KPIs, and compliance."
            }
            LeadershipStyle::Servant => "Puts people first, grows teams, builds trust and community.",
            LeadershipStyle::Charismatic => {
                "Inspires via presence and storytelling; rallies followers."
            }
            LeadershipStyle::Situational => "Adapts style to team maturity and task complexity.",
            LeadershipStyle::Visionary => "Long-term strategic focus; bold bets and roadmaps.",
            LeadershipStyle::Bureaucratic => "Follows rules and procedures; values consistency.",
        }
    }
}

impl fmt::Display for LeadershipStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for LeadershipStyle {
    type Err = ValidationError;

    /// Exact, case-insensitive match on display name, tag, or agent label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .find(|style| {
                wanted.eq_ignore_ascii_case(style.display_name())
                    || wanted.eq_ignore_ascii_case(style.tag())
                    || wanted.eq_ignore_ascii_case(&style.agent_label())
            })
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("style", format!("unknown leadership style '{}'", wanted))
            })
    }
}
