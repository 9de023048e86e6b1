// Section segmentation: flat paragraph list -> title page + named sections
//
// Front matter of a GOST report is a run of uppercase structural headers
// (РЕФЕРАТ, СОДЕРЖАНИЕ, СПИСОК ИСПОЛНИТЕЛЕЙ, ...) each followed by its body,
// ending where the numbered main body starts ("1 ТЕОРИЯ", "Глава 1").

use crate::config::SegmentationConfig;
use crate::heuristics::{is_uppercase_text, match_keyword_closely};
use crate::types::{DocumentStructure, SectionMap};
use regex::Regex;
use std::sync::LazyLock;

static MAIN_BODY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:\d+\s+[А-ЯA-Z]|\d+\.\s+[А-ЯA-Z]|глава\s+\d+)", // "1 ТЕОРИЯ", "1. Теория", "Глава 1"
    )
    .unwrap()
});

/// True if the paragraph opens the numbered main body of the document.
pub fn is_main_body_start(text: &str) -> bool {
    MAIN_BODY_REGEX.is_match(text.trim())
}

/// Automaton state while walking the paragraphs
#[derive(Debug)]
enum SegmenterState {
    Outside,
    Inside { header: String, body: Vec<String> },
}

pub struct SectionSegmenter {
    config: SegmentationConfig,
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new(SegmentationConfig::default())
    }
}

impl SectionSegmenter {
    pub fn new(config: SegmentationConfig) -> Self {
        Self { config }
    }

    /// Strict header test: short, fully uppercase, and close in length to a
    /// known structural element name. Numbered headings belong to the main
    /// body and are never front-matter headers.
    pub fn is_section_header(&self, text: &str) -> bool {
        let trimmed = text.trim();
        trimmed.chars().count() <= self.config.max_header_length
            && is_uppercase_text(trimmed)
            && match_keyword_closely(
                trimmed,
                &self.config.section_keywords,
                self.config.header_length_tolerance,
            )
            .is_some()
            && !is_main_body_start(trimmed)
    }

    pub fn segment(&self, filename: &str, paragraphs: Vec<String>) -> DocumentStructure {
        let title_page_text = paragraphs
            .iter()
            .take(self.config.title_page_paragraphs)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n");

        let sections = self.segment_sections(&paragraphs);
        log::debug!(
            "Segmented {}: {} paragraphs, {} sections",
            filename,
            paragraphs.len(),
            sections.len()
        );

        DocumentStructure {
            filename: filename.to_string(),
            title_page_text,
            sections,
            all_paragraphs: paragraphs,
        }
    }

    /// Segment paragraphs that did not come from a file
    pub fn segment_paragraphs<S: AsRef<str>>(&self, paragraphs: &[S]) -> DocumentStructure {
        let owned = paragraphs
            .iter()
            .map(|p| p.as_ref().to_string())
            .collect();
        self.segment("", owned)
    }

    fn segment_sections(&self, paragraphs: &[String]) -> SectionMap {
        let mut sections = SectionMap::new();
        let mut state = SegmenterState::Outside;

        for para in paragraphs {
            state = if self.is_section_header(para) {
                // Header: close whatever is open, open a new section
                flush(&mut sections, state);
                SegmenterState::Inside {
                    header: para.trim().to_string(),
                    body: Vec::new(),
                }
            } else {
                match state {
                    SegmenterState::Inside { header, body } if is_main_body_start(para) => {
                        // Main body reached: close the section, drop this paragraph
                        flush(&mut sections, SegmenterState::Inside { header, body });
                        SegmenterState::Outside
                    }
                    SegmenterState::Inside { header, mut body } => {
                        body.push(para.clone());
                        SegmenterState::Inside { header, body }
                    }
                    // Front matter before the first header, or main body text
                    SegmenterState::Outside => SegmenterState::Outside,
                }
            };
        }

        flush(&mut sections, state);
        sections
    }
}

fn flush(sections: &mut SectionMap, state: SegmenterState) {
    if let SegmenterState::Inside { header, body } = state {
        sections.insert(header, body.join("\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn segment(paragraphs: &[&str]) -> SectionMap {
        SectionSegmenter::default()
            .segment_paragraphs(paragraphs)
            .sections
    }

    #[test]
    fn test_main_body_start_patterns() {
        assert!(is_main_body_start("1 ТЕОРЕТИЧЕСКАЯ ЧАСТЬ"));
        assert!(is_main_body_start("1 теоретическая часть"));
        assert!(is_main_body_start("2. Theory"));
        assert!(is_main_body_start("Глава 3"));
        assert!(is_main_body_start("ГЛАВА 3"));
        assert!(!is_main_body_start("1.1 Подраздел"));
        assert!(!is_main_body_start("Москва 2024"));
        assert!(!is_main_body_start("ПРИЛОЖЕНИЕ А"));
    }

    #[test]
    fn test_header_detection() {
        let segmenter = SectionSegmenter::default();
        assert!(segmenter.is_section_header("РЕФЕРАТ"));
        assert!(segmenter.is_section_header("ПРИЛОЖЕНИЕ А"));
        assert!(segmenter.is_section_header("СПИСОК ИСПОЛЬНИТЕЛЕЙ"));
        assert!(!segmenter.is_section_header("Реферат"));
        assert!(!segmenter.is_section_header("1 ВВЕДЕНИЕ"));
        assert!(!segmenter.is_section_header(
            "ТАБЛИЦА 1 ИЗ РАЗДЕЛА ВВЕДЕНИЕ С ДАННЫМИ О ЗАТРАТАХ"
        ));
    }

    #[test]
    fn test_main_body_start_terminates_section() {
        let sections = segment(&["РЕФЕРАТ", "text", "1 ВВЕДЕНИЕ", "more"]);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.get("РЕФЕРАТ"), Some("text"));
    }

    #[test]
    fn test_front_matter_before_first_header_is_dropped() {
        let sections = segment(&["МИНИСТЕРСТВО", "Москва 2024", "РЕФЕРАТ", "Отчет 50 с."]);
        assert_eq!(sections.keys().collect::<Vec<_>>(), vec!["РЕФЕРАТ"]);
        assert_eq!(sections.get("РЕФЕРАТ"), Some("Отчет 50 с."));
    }

    #[test]
    fn test_consecutive_headers_give_empty_body() {
        let sections = segment(&["СОДЕРЖАНИЕ", "ВВЕДЕНИЕ", "Текст введения", "Еще текст"]);
        assert_eq!(sections.get("СОДЕРЖАНИЕ"), Some(""));
        assert_eq!(sections.get("ВВЕДЕНИЕ"), Some("Текст введения\nЕще текст"));
    }

    #[test]
    fn test_no_headers_gives_empty_sections() {
        assert!(segment(&["просто текст", "и еще текст"]).is_empty());
        assert!(segment(&[]).is_empty());
    }

    #[test]
    fn test_sections_reopen_after_main_body() {
        let sections = segment(&[
            "ВВЕДЕНИЕ",
            "вводный текст",
            "1 ОСНОВНАЯ ЧАСТЬ",
            "текст главы",
            "ЗАКЛЮЧЕНИЕ",
            "выводы",
        ]);
        assert_eq!(
            sections.iter().collect::<Vec<_>>(),
            vec![("ВВЕДЕНИЕ", "вводный текст"), ("ЗАКЛЮЧЕНИЕ", "выводы")]
        );
    }

    #[test]
    fn test_title_page_window() {
        let paragraphs: Vec<String> = (0..40).map(|i| format!("строка {i}")).collect();
        let doc = SectionSegmenter::default().segment("report.docx", paragraphs);
        assert_eq!(doc.title_page_lines().len(), 30);
        assert_eq!(doc.title_page_lines()[29], "строка 29");
        assert_eq!(doc.all_paragraphs.len(), 40);
        assert_eq!(doc.filename, "report.docx");
    }
}
