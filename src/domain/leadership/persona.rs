//! Persona - the style an FMEA run is scored through.
//!
//! Callers that bypass the closed `LeadershipStyle` enum (free-text style
//! names from the HTTP API, for instance) still get a result: an
//! unrecognized persona scores with a neutral bias and generic mitigations.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{LeadershipStyle, StyleBias};

/// A resolved leadership persona.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Persona {
    /// One of the ten known styles.
    Style(LeadershipStyle),
    /// A style name outside the known set, kept verbatim.
    Unrecognized(String),
}

impl Persona {
    /// Resolves a style name. Never fails; unknown names are kept verbatim.
    pub fn parse(name: &str) -> Self {
        match name.parse::<LeadershipStyle>() {
            Ok(style) => Persona::Style(style),
            Err(_) => Persona::Unrecognized(name.trim().to_string()),
        }
    }

    /// Returns the known style, if any.
    pub fn style(&self) -> Option<LeadershipStyle> {
        match self {
            Persona::Style(style) => Some(*style),
            Persona::Unrecognized(_) => None,
        }
    }

    /// Returns the scoring bias; neutral for unrecognized personas.
    pub fn bias(&self) -> StyleBias {
        self.style()
            .map(StyleBias::for_style)
            .unwrap_or(StyleBias::NEUTRAL)
    }

    /// Returns the label used in narrative text.
    pub fn agent_label(&self) -> String {
        match self {
            Persona::Style(style) => style.agent_label(),
            Persona::Unrecognized(name) => name.clone(),
        }
    }

    /// Returns true if this persona is one of the ten known styles.
    pub fn is_recognized(&self) -> bool {
        self.style().is_some()
    }
}

impl From<LeadershipStyle> for Persona {
    fn from(style: LeadershipStyle) -> Self {
        Persona::Style(style)
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Persona::Style(style) => write!(f, "{}", style),
            Persona::Unrecognized(name) => write!(f, "{}", name),
        }
    }
}
