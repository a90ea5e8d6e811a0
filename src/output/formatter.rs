//! Output formatters for match reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::MatchRecord;
use colored::Colorize;
use std::path::Path;

/// Formats single match records and ranked batch summaries.
pub trait OutputFormatter {
    fn format_record(&self, record: &MatchRecord) -> Result<String>;
    fn format_ranking(&self, records: &[MatchRecord]) -> Result<String>;
}

/// Console formatter with optional colors.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping results into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports.
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn paint_score(&self, text: String, score: f64) -> String {
        if !self.use_colors {
            return text;
        }
        if score >= 0.7 {
            text.green().bold().to_string()
        } else if score >= 0.5 {
            text.yellow().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }

    fn push_list(out: &mut String, heading: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        out.push_str(&format!("\n{}\n", heading));
        for item in items {
            out.push_str(&format!("  • {}\n", item));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_record(&self, record: &MatchRecord) -> Result<String> {
        let result = &record.result;
        let mut out = String::new();

        out.push_str(&format!("📊 Match report: {}\n", record.job_id));
        out.push_str(&format!(
            "   Overall score: {}\n",
            self.paint_score(
                format!("{:.1}%", result.overall_score * 100.0),
                result.overall_score
            )
        ));
        out.push_str(&format!("   Recommendation: {}\n", result.recommendation));

        let scores = &result.category_scores;
        out.push_str("\n📈 Category scores:\n");
        out.push_str(&format!("  • Technical skills: {:.1}%\n", scores.technical_skills * 100.0));
        out.push_str(&format!("  • Soft skills: {:.1}%\n", scores.soft_skills * 100.0));
        out.push_str(&format!("  • Experience: {:.1}%\n", scores.experience * 100.0));
        out.push_str(&format!("  • Keywords: {:.1}%\n", scores.keywords * 100.0));
        out.push_str(&format!("  • Must-have: {:.1}%\n", scores.must_have * 100.0));
        out.push_str(&format!("  • Nice-to-have: {:.1}%\n", scores.nice_to_have * 100.0));

        let analysis = &result.detailed_analysis;
        Self::push_list(&mut out, "💪 Strengths:", &analysis.strengths);
        Self::push_list(&mut out, "⚠️  Weaknesses:", &analysis.weaknesses);
        Self::push_list(&mut out, "💡 Recommendations:", &analysis.recommendations);

        if self.detailed {
            Self::push_list(
                &mut out,
                "✅ Technical skills matched:",
                &result.requirements_met.technical_skills,
            );
            Self::push_list(
                &mut out,
                "❌ Technical skills missing:",
                &result.requirements_missing.technical_skills,
            );
            Self::push_list(&mut out, "🔑 Must-have gaps:", &analysis.skill_gaps);
            Self::push_list(
                &mut out,
                "🏆 Competitive advantages:",
                &analysis.competitive_advantages,
            );
        }

        Ok(out)
    }

    fn format_ranking(&self, records: &[MatchRecord]) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!("🏁 Ranked matches ({} jobs):\n", records.len()));

        for (idx, record) in records.iter().enumerate() {
            let score = record.result.overall_score;
            out.push_str(&format!(
                "  {}. {} | {} | {}\n",
                idx + 1,
                record.job_id,
                self.paint_score(format!("{:.1}%", score * 100.0), score),
                record.result.recommendation
            ));
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_record(&self, record: &MatchRecord) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };
        Ok(rendered)
    }

    fn format_ranking(&self, records: &[MatchRecord]) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };
        Ok(rendered)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_record(&self, record: &MatchRecord) -> Result<String> {
        let result = &record.result;
        let scores = &result.category_scores;
        let mut out = String::new();

        out.push_str(&format!("# Match report: {}\n\n", record.job_id));
        out.push_str(&format!(
            "**Overall score:** {:.1}% ({})\n\n",
            result.overall_score * 100.0,
            result.recommendation
        ));

        out.push_str("| Category | Score |\n|---|---|\n");
        out.push_str(&format!("| Technical skills | {:.1}% |\n", scores.technical_skills * 100.0));
        out.push_str(&format!("| Soft skills | {:.1}% |\n", scores.soft_skills * 100.0));
        out.push_str(&format!("| Experience | {:.1}% |\n", scores.experience * 100.0));
        out.push_str(&format!("| Keywords | {:.1}% |\n", scores.keywords * 100.0));
        out.push_str(&format!("| Must-have | {:.1}% |\n", scores.must_have * 100.0));
        out.push_str(&format!("| Nice-to-have | {:.1}% |\n", scores.nice_to_have * 100.0));

        let analysis = &result.detailed_analysis;
        push_md_list(&mut out, "Strengths", &analysis.strengths);
        push_md_list(&mut out, "Weaknesses", &analysis.weaknesses);
        push_md_list(&mut out, "Recommendations", &analysis.recommendations);
        push_md_list(&mut out, "Skill gaps", &analysis.skill_gaps);
        push_md_list(
            &mut out,
            "Competitive advantages",
            &analysis.competitive_advantages,
        );
        push_md_list(
            &mut out,
            "Missing technical skills",
            &result.requirements_missing.technical_skills,
        );

        Ok(out)
    }

    fn format_ranking(&self, records: &[MatchRecord]) -> Result<String> {
        let mut out = String::new();
        out.push_str("# Ranked matches\n\n| Rank | Job | Score | Recommendation |\n|---|---|---|---|\n");
        for (idx, record) in records.iter().enumerate() {
            out.push_str(&format!(
                "| {} | {} | {:.1}% | {} |\n",
                idx + 1,
                record.job_id,
                record.result.overall_score * 100.0,
                record.result.recommendation
            ));
        }
        Ok(out)
    }
}

fn push_md_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("\n## {}\n\n", heading));
    for item in items {
        out.push_str(&format!("- {}\n", item));
    }
}

/// Dispatches to the formatter selected in configuration.
pub struct ReportGenerator {
    format: OutputFormat,
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(format: OutputFormat, use_colors: bool, detailed: bool) -> Self {
        Self {
            format,
            console: ConsoleFormatter::new(use_colors, detailed),
            json: JsonFormatter::new(true),
            markdown: MarkdownFormatter,
        }
    }

    pub fn format_record(&self, record: &MatchRecord) -> Result<String> {
        match self.format {
            OutputFormat::Console => self.console.format_record(record),
            OutputFormat::Json => self.json.format_record(record),
            OutputFormat::Markdown => self.markdown.format_record(record),
        }
    }

    pub fn format_ranking(&self, records: &[MatchRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Console => self.console.format_ranking(records),
            OutputFormat::Json => self.json.format_ranking(records),
            OutputFormat::Markdown => self.markdown.format_ranking(records),
        }
    }

    pub fn save_to_file(&self, content: &str, path: &Path) -> Result<()> {
        std::fs::write(path, content)?;
        Ok(())
    }
}
