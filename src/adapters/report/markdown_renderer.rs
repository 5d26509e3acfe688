//! Markdown report renderer adapter.
//!
//! Renders a leadership FMEA report as a single Markdown document: a
//! header with the inputs, one section per persona, and a risk summary.

use std::fmt::Write;

use crate::domain::fmea::{LeadershipFmeaReport, PersonaAssessment, RiskSummary};
use crate::ports::{RenderError, RenderOptions, ReportRenderer};

/// Markdown implementation of ReportRenderer.
#[derive(Debug, Clone, Default)]
pub struct MarkdownReportRenderer;

impl MarkdownReportRenderer {
    /// Creates a new markdown report renderer.
    pub fn new() -> Self {
        Self
    }

    fn render_header(&self, out: &mut String, report: &LeadershipFmeaReport) -> Result<(), RenderError> {
        writeln!(out, "# Leadership FMEA Report")?;
        writeln!(out)?;
        writeln!(out, "**Analysis ID:** {}  ", report.id)?;
        writeln!(out, "**Generated:** {}", report.generated_at)?;
        writeln!(out)?;
        writeln!(out, "## Problem")?;
        writeln!(out)?;
        write_quote(out, &report.problem)?;
        writeln!(out)?;
        writeln!(out, "## Decision taken by CEO")?;
        writeln!(out)?;
        write_quote(out, &report.decision)?;
        writeln!(out)?;
        Ok(())
    }

    fn render_assessment(
        &self,
        out: &mut String,
        position: usize,
        assessment: &PersonaAssessment,
        options: &RenderOptions,
    ) -> Result<(), RenderError> {
        let result = &assessment.result;

        writeln!(out, "---")?;
        writeln!(out)?;
        writeln!(out, "## {}. {}", position, assessment.agent_label)?;
        writeln!(out)?;
        writeln!(out, "*{}*", assessment.description)?;
        writeln!(out)?;
        writeln!(out, "**Failure Mode:** {}", result.failure_mode())?;
        writeln!(out)?;
        writeln!(out, "**Effects:** {}", result.effects())?;
        writeln!(out)?;

        if !options.compact {
            writeln!(out, "| Severity (S) | Occurrence (O) | Detection (D) | RPN = S×O×D |")?;
            writeln!(out, "|--------------|----------------|---------------|-------------|")?;
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                result.severity(),
                result.occurrence(),
                result.detection(),
                result.rpn()
            )?;
            writeln!(out)?;
        }

        writeln!(out, "**Mitigation Strategy:**")?;
        for mitigation in result.mitigations() {
            writeln!(out, "- {}", mitigation)?;
        }
        writeln!(out)?;

        if let Some(explanation) = result.explanation() {
            write_quote(out, explanation)?;
            writeln!(out)?;
        }

        Ok(())
    }

    fn render_summary(&self, out: &mut String, summary: &RiskSummary) -> Result<(), RenderError> {
        writeln!(out, "---")?;
        writeln!(out)?;
        writeln!(out, "## Risk Summary")?;
        writeln!(out)?;
        writeln!(
            out,
            "- **Highest RPN:** {} ({})",
            summary.highest.rpn, summary.highest.style
        )?;
        writeln!(
            out,
            "- **Lowest RPN:** {} ({})",
            summary.lowest.rpn, summary.lowest.style
        )?;
        writeln!(out, "- **Mean RPN:** {:.1}", summary.mean_rpn)?;
        Ok(())
    }
}

/// Writes text as a blockquote, one `>` per line.
fn write_quote(out: &mut String, text: &str) -> Result<(), RenderError> {
    for line in text.lines() {
        writeln!(out, "> {}", line)?;
    }
    Ok(())
}

impl ReportRenderer for MarkdownReportRenderer {
    fn render(
        &self,
        report: &LeadershipFmeaReport,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        if report.assessments.is_empty() {
            return Err(RenderError::EmptyReport);
        }

        let mut out = String::new();
        self.render_header(&mut out, report)?;
        for (idx, assessment) in report.assessments.iter().enumerate() {
            self.render_assessment(&mut out, idx + 1, assessment, options)?;
        }
        if let Some(summary) = &report.summary {
            self.render_summary(&mut out, summary)?;
        }

        Ok(out)
    }

    fn content_type(&self) -> &'static str {
        "text/markdown; charset=utf-8"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fmea::FmeaEngine;
    use crate::domain::leadership::LeadershipStyle;

    fn report(include_explanation: bool) -> LeadershipFmeaReport {
        let assessments = LeadershipStyle::all()
            .iter()
            .map(|style| {
                PersonaAssessment::new(
                    *style,
                    FmeaEngine::evaluate("Sales falling", "Cloud pivot", *style, include_explanation),
                )
            })
            .collect();
        LeadershipFmeaReport::new(
            "Sales falling\nacross regions".to_string(),
            "Cloud pivot".to_string(),
            assessments,
        )
    }

    fn render(report: &LeadershipFmeaReport, compact: bool) -> String {
        MarkdownReportRenderer::new()
            .render(report, &RenderOptions { compact })
            .unwrap()
    }

    #[test]
    fn header_includes_title_and_inputs() {
        let md = render(&report(false), false);
        assert!(md.starts_with("# Leadership FMEA Report\n"));
        assert!(md.contains("> Sales falling\n> across regions\n"));
        assert!(md.contains("## Decision taken by CEO\n\n> Cloud pivot\n"));
    }

    #[test]
    fn one_section_per_persona_in_order() {
        let md = render(&report(false), false);
        let first = md.find("## 1. Autocratic Leader Agentic AI Agent CEO").unwrap();
        let last = md.find("## 10. Bureaucratic Leader Agentic AI Agent CEO").unwrap();
        assert!(first < last);
        assert_eq!(md.matches("**Mitigation Strategy:**").count(), 10);
    }

    #[test]
    fn full_view_includes_score_table() {
        let md = render(&report(false), false);
        assert_eq!(md.matches("| Severity (S) |").count(), 10);
    }

    #[test]
    fn compact_view_hides_score_table() {
        let md = render(&report(false), true);
        assert!(!md.contains("| Severity (S) |"));
        assert!(md.contains("**Failure Mode:**"));
    }

    #[test]
    fn explanations_rendered_only_when_present() {
        assert!(!render(&report(false), false).contains("ELI5:"));
        assert_eq!(render(&report(true), false).matches("> ELI5:").count(), 10);
    }

    #[test]
    fn summary_footer_rendered() {
        let md = render(&report(false), false);
        assert!(md.contains("## Risk Summary"));
        assert!(md.contains("- **Highest RPN:**"));
        assert!(md.contains("- **Mean RPN:**"));
    }

    #[test]
    fn empty_report_is_an_error() {
        let empty = LeadershipFmeaReport::new("p".to_string(), "d".to_string(), vec![]);
        assert_eq!(
            MarkdownReportRenderer::new().render(&empty, &RenderOptions::default()),
            Err(RenderError::EmptyReport)
        );
    }

    #[test]
    fn content_type_is_markdown() {
        assert!(MarkdownReportRenderer::new().content_type().starts_with("text/markdown"));
    }
}
