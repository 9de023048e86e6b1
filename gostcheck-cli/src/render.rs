//! Report rendering for the terminal and for machines.
//!
//! Text output groups each validator's findings by severity; a validator
//! with no findings at all is reported as a single "all OK" line.

use clap::ValueEnum;
use gostcheck_core::{DocumentReport, Finding, ValidationResult};
use std::fmt;

const RULE: &str = "============================================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report grouped by severity
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Text view of one report.
///
/// With `show_sections` the detected front-matter sections are listed
/// before the findings.
pub struct TextReport<'a> {
    pub report: &'a DocumentReport,
    pub show_sections: bool,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;

        writeln!(f, "\n📄 Файл: {}", report.filename)?;
        writeln!(f, "Найдено секций: {}", report.section_names.len())?;
        if self.show_sections && !report.section_names.is_empty() {
            writeln!(f, "  Секции документа: {}", report.section_names.join(", "))?;
        }

        writeln!(f, "\n{RULE}\nРЕЗУЛЬТАТЫ ВАЛИДАЦИИ\n{RULE}")?;
        for result in &report.results {
            write_result(f, result)?;
        }

        if report.is_valid() {
            writeln!(f, "\n✅ Документ соответствует обязательным требованиям")
        } else {
            writeln!(f, "\n❌ Критических ошибок: {}", report.critical_count())
        }
    }
}

pub fn render_text(report: &DocumentReport, show_sections: bool) -> String {
    TextReport {
        report,
        show_sections,
    }
    .to_string()
}

fn write_result(f: &mut fmt::Formatter<'_>, result: &ValidationResult) -> fmt::Result {
    if !result.has_findings() {
        return writeln!(f, "\n{}: ВСЕ OK", result.validator_name());
    }

    writeln!(f, "\n{}:", result.validator_name())?;
    write_group(
        f,
        "КРИТИЧЕСКИЕ ОШИБКИ (обязательно по ГОСТ):",
        result.critical_findings(),
    )?;
    write_group(
        f,
        "РЕКОМЕНДАЦИИ (желательно исправить):",
        result.recommendations(),
    )
}

fn write_group<'a>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    findings: impl Iterator<Item = &'a Finding>,
) -> fmt::Result {
    let mut findings = findings.peekable();
    if findings.peek().is_none() {
        return Ok(());
    }
    writeln!(f, "\n  {title}")?;
    for finding in findings {
        writeln!(f, "     - {}", finding.message)?;
    }
    Ok(())
}

/// Render all reports as a JSON array
pub fn render_json(reports: &[DocumentReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gostcheck_core::SectionSegmenter;

    fn report(results: Vec<ValidationResult>) -> DocumentReport {
        let document = SectionSegmenter::default()
            .segment_paragraphs(&["РЕФЕРАТ", "Отчет 50 с.", "ВВЕДЕНИЕ", "Текст"]);
        DocumentReport::new(&document, results)
    }

    #[test]
    fn test_clean_validator_is_all_ok() {
        let text = render_text(&report(vec![ValidationResult::new("TitlePageValidator")]), false);
        assert!(text.contains("TitlePageValidator: ВСЕ OK"));
        assert!(text.contains("✅"));
        assert!(!text.contains("Секции документа"));
    }

    #[test]
    fn test_findings_grouped_by_severity() {
        let mut result = ValidationResult::new("ExecutorListValidator");
        result.recommend("совет");
        result.critical("ошибка");
        let text = render_text(&report(vec![result]), true);

        let critical_at = text.find("КРИТИЧЕСКИЕ ОШИБКИ").unwrap();
        let recommendations_at = text.find("РЕКОМЕНДАЦИИ").unwrap();
        assert!(critical_at < recommendations_at);
        assert!(text.find("- ошибка").unwrap() < recommendations_at);
        assert!(text.find("- совет").unwrap() > recommendations_at);
        assert!(text.contains("Секции документа: РЕФЕРАТ, ВВЕДЕНИЕ"));
        assert!(text.contains("Критических ошибок: 1"));
    }

    #[test]
    fn test_recommendations_only_has_no_critical_group() {
        let mut result = ValidationResult::new("TitlePageValidator");
        result.recommend("совет");
        let text = render_text(&report(vec![result]), false);
        assert!(!text.contains("КРИТИЧЕСКИЕ ОШИБКИ"));
        assert!(text.contains("РЕКОМЕНДАЦИИ"));
    }

    #[test]
    fn test_text_report_displays_like_render_text() {
        let report = report(vec![ValidationResult::new("TitlePageValidator")]);
        let shown = TextReport {
            report: &report,
            show_sections: true,
        }
        .to_string();
        assert_eq!(shown, render_text(&report, true));
        assert!(shown.ends_with("требованиям\n"));
    }

    #[test]
    fn test_json_carries_validity_and_severity() {
        let mut result = ValidationResult::new("TitlePageValidator");
        result.critical("ошибка");
        let json = render_json(&[report(vec![result])]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value[0]["results"][0];
        assert_eq!(first["validator_name"], "TitlePageValidator");
        assert_eq!(first["is_valid"], false);
        assert_eq!(first["findings"][0]["severity"], "CRITICAL");
        assert_eq!(value[0]["section_names"][1], "ВВЕДЕНИЕ");
    }
}
