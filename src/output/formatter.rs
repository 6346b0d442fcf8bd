//! Output formatters for analysis reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering an [`AnalysisReport`] into a displayable string.
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score badge.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured consumption.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation-style reports.
pub struct MarkdownFormatter;

/// Plain-text formatter matching the exported report format.
pub struct TextFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            80..=100 => ("STRONG", Color::Green),
            60..=79 => ("MODERATE", Color::Yellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("ATS MATCH ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        if let (Some(resume), Some(job)) = (&report.resume_file, &report.job_file) {
            output.push_str(&format!("Resume: {} | Job: {}\n", resume, job));
        }

        output.push_str(&self.format_header("Score", 2));
        output.push_str(&format!(
            "Overall: {}% {}\n",
            result.score,
            self.format_score_badge(result.score)
        ));
        output.push_str(&format!(
            "Matched {} of {} job keywords\n",
            result.matched_count, result.total_job_keywords
        ));

        output.push_str(&self.format_header("Category Breakdown", 3));
        output.push_str(&format!("  Skills: {}%\n", result.breakdown.skills));
        output.push_str(&format!("  Experience: {}%\n", result.breakdown.experience));
        output.push_str(&format!("  Education: {}%\n", result.breakdown.education));
        output.push_str(&format!("  Keywords: {}%\n", result.breakdown.keywords));

        if !result.matched_keywords.is_empty() {
            output.push_str(&self.format_header("Matched Keywords", 3));
            output.push_str(&format!(
                "  {}\n",
                self.colorize(&result.matched_keywords.join(", "), Color::Green)
            ));
        }

        if !result.missing_keywords.is_empty() {
            output.push_str(&self.format_header("Missing Keywords", 3));
            output.push_str(&format!(
                "  {}\n",
                self.colorize(&result.missing_keywords.join(", "), Color::Red)
            ));
        }

        if !result.improvements.is_empty() {
            output.push_str(&self.format_header("Improvement Suggestions", 2));
            for (i, suggestion) in result.improvements.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Details", 3));
            output.push_str(&format!(
                "  Displayed keyword lists are truncated; {} job keywords in total\n",
                result.total_job_keywords
            ));
            output.push_str(&format!("  Generator version: {}\n", report.app_version));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str("# ATS Analysis Report\n\n");
        output.push_str(&format!(
            "Generated: {}\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str("## Score\n\n");
        output.push_str(&format!(
            "**{}%** ({} of {} job keywords matched)\n\n",
            result.score, result.matched_count, result.total_job_keywords
        ));

        output.push_str("### Category Breakdown\n\n");
        output.push_str(&format!("- Skills: {}%\n", result.breakdown.skills));
        output.push_str(&format!("- Experience: {}%\n", result.breakdown.experience));
        output.push_str(&format!("- Education: {}%\n", result.breakdown.education));
        output.push_str(&format!("- Keywords: {}%\n\n", result.breakdown.keywords));

        output.push_str("## Matched Keywords\n\n");
        if result.matched_keywords.is_empty() {
            output.push_str("_None_\n\n");
        } else {
            for keyword in &result.matched_keywords {
                output.push_str(&format!("- `{}`\n", keyword));
            }
            output.push('\n');
        }

        output.push_str("## Missing Keywords\n\n");
        if result.missing_keywords.is_empty() {
            output.push_str("_None_\n\n");
        } else {
            for keyword in &result.missing_keywords {
                output.push_str(&format!("- `{}`\n", keyword));
            }
            output.push('\n');
        }

        output.push_str("## Improvements\n\n");
        for (i, suggestion) in result.improvements.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, suggestion));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl OutputFormatter for TextFormatter {
    /// Plain-text export: header, score, keyword lists, numbered improvements.
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;

        let improvements = result
            .improvements
            .iter()
            .enumerate()
            .map(|(i, imp)| format!("{}. {}", i + 1, imp))
            .collect::<Vec<String>>()
            .join("\n");

        Ok(format!(
            "ATS Analysis Report\n\nScore: {}%\n\nMatched Keywords: {}\n\nMissing Keywords: {}\n\nImprovements:\n{}",
            result.score,
            result.matched_keywords.join(", "),
            result.missing_keywords.join(", "),
            improvements
        ))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

/// Coordinates the individual formatters and file output.
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    text_formatter: TextFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter,
            text_formatter: TextFormatter,
        }
    }

    pub fn generate(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Text => self.text_formatter.format_report(report),
        }
    }

    pub fn save_to_file(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::matcher::KeywordMatcher;

    fn sample_report() -> AnalysisReport {
        let matcher = KeywordMatcher::new();
        let result = matcher.analyze(
            "Python developer with SQL and React skills and cloud experience",
            "Looking for a Python developer with React and AWS experience",
        );
        AnalysisReport::new(
            result,
            Some("resume.txt".to_string()),
            Some("job.txt".to_string()),
        )
    }

    #[test]
    fn test_text_export_format() {
        let report = sample_report();
        let text = TextFormatter.format_report(&report).unwrap();

        let expected = "ATS Analysis Report\n\n\
                        Score: 67%\n\n\
                        Matched Keywords: python, developer, react, experience\n\n\
                        Missing Keywords: looking, aws\n\n\
                        Improvements:\n\
                        1. Add looking, aws to better match job requirements\n\
                        2. Include more specific technical skills mentioned in the job description\n\
                        3. Quantify achievements with numbers and metrics\n\
                        4. Use action verbs to describe your experience\n\
                        5. Ensure all required qualifications are clearly mentioned";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_json_output_round_trips() {
        let report = sample_report();
        let json = JsonFormatter::new(true).format_report(&report).unwrap();

        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_console_output_without_colors() {
        let report = sample_report();
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&report).unwrap();

        assert!(output.contains("Overall: 67% [MODERATE]"));
        assert!(output.contains("Matched 4 of 6 job keywords"));
        assert!(output.contains("python, developer, react, experience"));
        assert!(output.contains("looking, aws"));
        // No ANSI escapes when colors are off.
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_markdown_output_structure() {
        let report = sample_report();
        let output = MarkdownFormatter.format_report(&report).unwrap();

        assert!(output.starts_with("# ATS Analysis Report\n"));
        assert!(output.contains("## Matched Keywords"));
        assert!(output.contains("- `python`"));
        assert!(output.contains("## Missing Keywords"));
        assert!(output.contains("- `aws`"));
    }

    #[test]
    fn test_generator_dispatch() {
        let report = sample_report();
        let generator = ReportGenerator::new(false, false);

        assert!(generator.generate(&report, OutputFormat::Text).is_ok());
        assert!(generator.generate(&report, OutputFormat::Json).is_ok());
        assert!(generator.generate(&report, OutputFormat::Markdown).is_ok());
        assert!(generator.generate(&report, OutputFormat::Console).is_ok());
    }
}
