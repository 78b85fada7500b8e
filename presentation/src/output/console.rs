//! Console output formatter for questions and verdicts

use colored::{ColoredString, Colorize};
use navigator_application::SymptomReport;
use navigator_domain::{AnswerType, Question, Severity, Verdict};

/// Formats screening output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a question with its position and input hint
    pub fn format_question(question: &Question, position: usize, total: usize) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            format!("[{}/{}]", position + 1, total).cyan().bold(),
            question.prompt()
        ));

        match question.answer_type() {
            AnswerType::YesNo => {
                output.push_str(&format!("{}\n", "  (yes/no)".dimmed()));
            }
            AnswerType::MultipleChoice { options } => {
                for (i, option) in options.iter().enumerate() {
                    output.push_str(&format!("  {} {}\n", format!("{}.", i + 1).bold(), option));
                }
                output.push_str(&format!("{}\n", "  (pick a number or type the option)".dimmed()));
            }
            AnswerType::FreeText => {
                output.push_str(&format!("{}\n", "  (free text)".dimmed()));
            }
        }

        output
    }

    /// Format the final verdict as a severity-colored card
    pub fn format_verdict(verdict: &Verdict) -> String {
        let label = Self::paint(verdict.severity, &verdict.label.to_string());
        let tier = Self::paint(verdict.severity, &verdict.severity.to_string());

        let mut output = String::new();
        output.push_str("\n");
        output.push_str("────────────────────────────────────────────\n");
        output.push_str(&format!("  {} [{}]\n", label.bold(), tier));
        output.push_str("────────────────────────────────────────────\n");
        output.push_str(&format!("  {}\n", verdict.message));
        output.push_str("────────────────────────────────────────────\n");
        output
    }

    /// Format a one-shot report as a card
    pub fn format_report(report: &SymptomReport) -> String {
        let label = Self::paint(report.level, &report.result);

        let mut output = String::new();
        output.push_str("────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  {} [{}]\n",
            label.bold(),
            Self::paint(report.level, &report.level.to_string())
        ));
        output.push_str("────────────────────────────────────────────\n");
        output.push_str(&format!("  {}\n", report.message));
        output.push_str("────────────────────────────────────────────\n");
        output
    }

    /// One line: recommendation and level
    pub fn format_report_line(report: &SymptomReport) -> String {
        format!("{} [{}]", report.result, report.level)
    }

    /// JSON, matching the wire format of the evaluate call
    pub fn format_report_json(report: &SymptomReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn paint(severity: Severity, text: &str) -> ColoredString {
        match severity {
            Severity::Green => text.green(),
            Severity::Yellow => text.yellow(),
            Severity::Red => text.red(),
        }
    }
}
