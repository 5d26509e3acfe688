//! Static narrative text attached to every FMEA result.

use super::scoring::ScoreTriple;
use crate::domain::leadership::{LeadershipStyle, Persona};

/// Mitigations used when the persona is not one of the known styles.
pub const FALLBACK_MITIGATIONS: &[&str] = &["Establish controls, measure, iterate."];

/// Effects text shared by every analysis.
pub const EFFECTS: &str =
    "Delays, cost overruns, quality issues, compliance risks, or missed market opportunities.";

/// Returns the two recommended actions for a style, in order.
pub fn style_mitigations(style: LeadershipStyle) -> &'static [&'static str] {
    match style {
        LeadershipStyle::Autocratic => &[
            "Create a fast feedback loop (weekly red-team review).",
            "Nominate a devil’s advocate for critical decisions.",
        ],
        LeadershipStyle::Democratic => &[
            "Timebox discussions and set a decision deadline.",
            "Designate a final decision owner to avoid stalemates.",
        ],
        LeadershipStyle::LaissezFaire => &[
            "Set minimal check-ins (biweekly OKRs).",
            "Install simple dashboards for progress visibility.",
        ],
        LeadershipStyle::Transformational => &[
            "Translate vision into 30-60-90 day milestones.",
            "Pair inspiration with risk & dependency registers.",
        ],
        LeadershipStyle::Transactional => &[
            "Align incentives to long-term value, not vanity metrics.",
            "Audit KPIs quarterly to prevent gaming.",
        ],
        LeadershipStyle::Servant => &[
            "Balance empathy with clear performance gates.",
            "Escalate decisively when business risk rises.",
        ],
        LeadershipStyle::Charismatic => &[
            "Triangulate narratives with data and experiments.",
            "Use pre-mortems to counter optimism bias.",
        ],
        LeadershipStyle::Situational => &[
            "Reassess team readiness every sprint.",
            "Adapt coaching/directing mix as competency changes.",
        ],
        LeadershipStyle::Visionary => &[
            "Back-cast the vision into quarterly deliverables.",
            "Run discovery sprints and kill-switch gates.",
        ],
        LeadershipStyle::Bureaucratic => &[
            "Allow policy exceptions for controlled experiments.",
            "Create a lightweight fast-track for innovations.",
        ],
    }
}

/// Returns the ordered mitigations for a persona.
pub fn mitigations_for(persona: &Persona) -> &'static [&'static str] {
    persona
        .style()
        .map(style_mitigations)
        .unwrap_or(FALLBACK_MITIGATIONS)
}

/// Describes the generic failure mode seen through a persona's lens.
pub fn failure_mode(persona: &Persona) -> String {
    format!(
        "Execution gaps, misalignment, and unintended consequences while applying \
         the decision through the lens of {}.",
        persona.agent_label()
    )
}

/// Plain-language explanation of the three axes and the persona's final scores.
pub fn explanation(persona: &Persona, scores: &ScoreTriple) -> String {
    let (s, o, d) = scores.as_tuple();
    format!(
        "ELI5: Think of Severity as how big the ouch is, Occurrence as how often it happens, \
         and Detection as how quickly we can spot it. A higher RPN means more care is needed. \
         The {} style tilts risks like this: S={}, O={}, D={}.",
        persona, s, o, d
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_has_two_mitigations() {
        for style in LeadershipStyle::all() {
            let mitigations = mitigations_for(&Persona::from(*style));
            assert_eq!(mitigations.len(), 2, "{} should have two mitigations", style);
            assert!(mitigations.iter().all(|m| !m.is_empty()));
        }
    }

    #[test]
    fn mitigations_preserve_order() {
        let mitigations = mitigations_for(&LeadershipStyle::Democratic.into());
        assert_eq!(mitigations[0], "Timebox discussions and set a decision deadline.");
        assert_eq!(mitigations[1], "Designate a final decision owner to avoid stalemates.");
    }

    #[test]
    fn autocratic_mitigation_keeps_typographic_apostrophe() {
        let mitigations = style_mitigations(LeadershipStyle::Autocratic);
        assert_eq!(
            mitigations[1],
            "Nominate a devil\u{2019}s advocate for critical decisions."
        );
    }

    #[test]
    fn unrecognized_persona_gets_fallback() {
        assert_eq!(
            mitigations_for(&Persona::parse("Pirate")),
            &["Establish controls, measure, iterate."]
        );
    }

    #[test]
    fn failure_mode_names_the_agent() {
        let text = failure_mode(&LeadershipStyle::Visionary.into());
        assert!(text.starts_with("Execution gaps, misalignment"));
        assert!(text.ends_with("through the lens of Visionary Leader Agentic AI Agent CEO."));
    }

    #[test]
    fn explanation_interpolates_scores() {
        let scores = ScoreTriple::clamped(7, 6, 4);
        let text = explanation(&LeadershipStyle::Autocratic.into(), &scores);
        assert!(text.starts_with("ELI5:"));
        assert!(text.contains("The Autocratic style"));
        assert!(text.ends_with("S=7, O=6, D=4."));
    }
}
