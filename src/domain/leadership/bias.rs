//! Per-style scoring bias applied on top of the base FMEA scores.
//!
//! Positive deltas raise risk on that axis, negative deltas lower it.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::LeadershipStyle;

/// Additive adjustment to each FMEA axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleBias {
    pub severity_delta: i32,
    pub occurrence_delta: i32,
    pub detection_delta: i32,
}

impl StyleBias {
    /// Bias that leaves every axis untouched.
    pub const NEUTRAL: Self = Self::new(0, 0, 0);

    /// Creates a bias from its three deltas.
    pub const fn new(severity_delta: i32, occurrence_delta: i32, detection_delta: i32) -> Self {
        Self {
            severity_delta,
            occurrence_delta,
            detection_delta,
        }
    }

    /// Returns the bias for a style.
    pub fn for_style(style: LeadershipStyle) -> Self {
        STYLE_BIASES.get(&style).copied().unwrap_or(Self::NEUTRAL)
    }

    /// Returns true if every delta is zero.
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// Static bias table keyed by style tag.
static STYLE_BIASES: Lazy<HashMap<LeadershipStyle, StyleBias>> = Lazy::new(|| {
    use LeadershipStyle::*;
    HashMap::from([
        (Autocratic, StyleBias::new(1, 1, -1)),
        (Democratic, StyleBias::new(0, 1, 0)),
        (LaissezFaire, StyleBias::new(1, 2, -1)),
        (Transformational, StyleBias::new(2, 1, -1)),
        (Transactional, StyleBias::new(0, 0, 1)),
        (Servant, StyleBias::NEUTRAL),
        (Charismatic, StyleBias::new(2, 1, -1)),
        (Situational, StyleBias::new(-1, -1, 1)),
        (Visionary, StyleBias::new(2, 1, -1)),
        (Bureaucratic, StyleBias::new(-1, 0, 2)),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_has_an_entry() {
        for style in LeadershipStyle::all() {
            assert!(STYLE_BIASES.contains_key(style), "missing bias for {}", style);
        }
    }

    #[test]
    fn autocratic_bias_matches_table() {
        assert_eq!(
            StyleBias::for_style(LeadershipStyle::Autocratic),
            StyleBias::new(1, 1, -1)
        );
    }

    #[test]
    fn bureaucratic_bias_raises_detection() {
        let bias = StyleBias::for_style(LeadershipStyle::Bureaucratic);
        assert_eq!(bias.severity_delta, -1);
        assert_eq!(bias.occurrence_delta, 0);
        assert_eq!(bias.detection_delta, 2);
    }

    #[test]
    fn servant_bias_is_neutral() {
        assert!(StyleBias::for_style(LeadershipStyle::Servant).is_neutral());
        assert!(!StyleBias::for_style(LeadershipStyle::Situational).is_neutral());
    }

    #[test]
    fn default_bias_is_neutral() {
        assert_eq!(StyleBias::default(), StyleBias::NEUTRAL);
    }
}
