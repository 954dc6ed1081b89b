use crate::application::dto::ReportResponse;
use crate::report_generation::services::AssessmentReshaper;
use owo_colors::OwoColorize;
use std::fmt::Write;

const RULE_WIDTH: usize = 70;
const MAX_ATTENTION_CONTROLS: usize = 10;
const MAX_FINDINGS_PER_CONTROL: usize = 2;

/// Renders the end-of-run console summary
///
/// Shows the per-framework rollup, the controls of the selected framework
/// that need attention, and every file that was written.
pub struct SummaryRenderer {
    colored: bool,
}

impl SummaryRenderer {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn render(&self, response: &ReportResponse) -> String {
        let model = &response.read_model;
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "\n{}", self.heading("📊 Compliance Assessment Summary"));
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "Assessment ID:      {}", model.response.id_or_na());
        let _ = writeln!(
            out,
            "Status:             {}",
            model.response.status.as_deref().unwrap_or("N/A")
        );
        let _ = writeln!(out, "Total Assets:       {}", model.total_assets());

        for row in &model.summary {
            let _ = writeln!(out, "\n{} {}", self.heading(&row.framework), row.version);
            let _ = writeln!(out, "  Total Controls:     {}", row.total_controls);
            let _ = writeln!(out, "  ✅ Satisfied:       {}", row.satisfied);
            let _ = writeln!(out, "  ❌ Not Satisfied:   {}", row.not_satisfied);
            let _ = writeln!(out, "  ⊘  Not Applicable:  {}", row.not_applicable);
            let _ = writeln!(out, "  Compliance Rate:    {}", row.compliance_percentage);
        }
        let _ = writeln!(out, "{}", rule);

        let attention = AssessmentReshaper::controls_needing_attention(&model.selected.view);
        if !attention.is_empty() {
            let title = format!(
                "⚠️  Controls Requiring Attention ({}):",
                attention.len()
            );
            let _ = writeln!(out, "\n{}", self.warn(&title));
            for control in attention.iter().take(MAX_ATTENTION_CONTROLS) {
                let _ = writeln!(out, "  • {}: {}", control.control_id(), control.title());
                for finding in control.findings.iter().take(MAX_FINDINGS_PER_CONTROL) {
                    let _ = writeln!(out, "    - {}", finding);
                }
            }
            if attention.len() > MAX_ATTENTION_CONTROLS {
                let _ = writeln!(
                    out,
                    "  ... and {} more",
                    attention.len() - MAX_ATTENTION_CONTROLS
                );
            }
        }

        if !response.written_files.is_empty() {
            let _ = writeln!(out, "\n{}", self.heading("📂 Generated files:"));
            for file in &response.written_files {
                let _ = writeln!(
                    out,
                    "  • {}: {} ({} bytes)",
                    file.label,
                    file.path.display(),
                    file.size_bytes
                );
            }
        }

        if !response.warnings.is_empty() {
            let _ = writeln!(
                out,
                "\n{}",
                self.warn(&format!("Completed with {} warning(s)", response.warnings.len()))
            );
        }

        out
    }

    fn heading(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn warn(&self, text: &str) -> String {
        if self.colored {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}
