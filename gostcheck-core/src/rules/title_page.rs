use super::engine::Validator;
use super::messages;
use crate::config::TitlePageConfig;
use crate::heuristics::{
    contains_digit, contains_ignore_case, extract_initials, find_approval_stamp,
    find_document_type, find_first_containing, find_metadata_block, find_organization_block,
    find_place_and_year_within, is_uppercase_text,
};
use crate::types::{DocumentStructure, ValidationResult};

pub const TITLE_PAGE_VALIDATOR: &str = "TitlePageValidator";

// TitlePageValidator - checks the mandatory blocks of a GOST 7.32 title page
//
// Five independent checks run over the title page paragraphs:
// 1. Organization name (top, uppercase)
// 2. Metadata (УДК index, registration numbers)
// 3. Approval stamp УТВЕРЖДАЮ with the approver's initials
// 4. Document type (ОТЧЕТ / О НАУЧНО-ИССЛЕДОВАТЕЛЬСКОЙ РАБОТЕ)
// 5. Place and year (bottom)
// A missing block only adds findings; it never stops the other checks.
pub struct TitlePageValidator {
    config: TitlePageConfig,
    current_year: i32,
}

impl TitlePageValidator {
    pub fn new(current_year: i32) -> Self {
        Self::with_config(TitlePageConfig::default(), current_year)
    }

    pub fn with_config(config: TitlePageConfig, current_year: i32) -> Self {
        Self {
            config,
            current_year,
        }
    }
}

impl Validator for TitlePageValidator {
    fn validate(&self, document: &DocumentStructure) -> ValidationResult {
        let mut result = ValidationResult::new(TITLE_PAGE_VALIDATOR);
        let paragraphs = document.title_page_lines();

        self.check_organization(&paragraphs, &mut result);
        self.check_metadata(&paragraphs, &mut result);
        self.check_approval_stamps(&paragraphs, &mut result);
        self.check_document_type(&paragraphs, &mut result);
        self.check_place_and_year(&paragraphs, &mut result);

        result
    }

    fn name(&self) -> &str {
        TITLE_PAGE_VALIDATOR
    }
}

impl TitlePageValidator {
    fn check_organization(&self, paragraphs: &[&str], result: &mut ValidationResult) {
        let org_block = find_organization_block(paragraphs, 0, self.config.organization_window);

        if org_block.is_empty() {
            result.critical(messages::ORGANIZATION_MISSING);
            return;
        }

        for line in org_block.iter().filter(|line| !is_uppercase_text(line)) {
            result.critical(messages::organization_not_uppercase(line));
        }

        let org_text = org_block.join(" ");
        let has_keyword = self
            .config
            .organization_keywords
            .iter()
            .any(|kw| contains_ignore_case(&org_text, kw));
        if !has_keyword {
            result.recommend(messages::ORGANIZATION_KEYWORDS_MISSING);
        }
    }

    fn check_metadata(&self, paragraphs: &[&str], result: &mut ValidationResult) {
        let metadata = find_metadata_block(paragraphs);

        match metadata.udc.as_deref() {
            None => result.critical(messages::UDC_MISSING),
            Some(udc_line) if !contains_digit(udc_line) => {
                result.critical(messages::UDC_WITHOUT_DIGITS)
            }
            Some(_) => {}
        }

        if metadata.nioktr_registration.is_none() {
            result.recommend(messages::NIOKTR_REGISTRATION_MISSING);
        }
    }

    fn check_approval_stamps(&self, paragraphs: &[&str], result: &mut ValidationResult) {
        // СОГЛАСОВАНО is conditional; only УТВЕРЖДАЮ is mandatory
        let Some(approved) = find_approval_stamp(paragraphs).approved else {
            result.critical(messages::APPROVAL_STAMP_MISSING);
            return;
        };

        if !approved.text.to_uppercase().contains("УТВЕРЖДАЮ") {
            result.critical(messages::APPROVAL_STAMP_NOT_UPPERCASE);
        }

        // Approver's position and initials follow the first УТВЕРЖДАЮ line,
        // even when a later line repeats the word
        let start = find_first_containing(paragraphs, "УТВЕРЖДАЮ").unwrap_or(approved.index);
        let end = (start + self.config.approval_context_lines).min(paragraphs.len());
        let context = paragraphs[start..end].join("\n");
        if extract_initials(&context).is_empty() {
            result.critical(messages::APPROVAL_INITIALS_MISSING);
        }
    }

    fn check_document_type(&self, paragraphs: &[&str], result: &mut ValidationResult) {
        let Some(doc_type) = find_document_type(paragraphs) else {
            result.critical(messages::DOCUMENT_TYPE_MISSING);
            return;
        };

        let lines: Vec<&str> = doc_type.split('\n').collect();
        if lines.len() != 2 {
            result.critical(messages::DOCUMENT_TYPE_NOT_TWO_LINES);
        }

        if !lines.iter().all(|line| is_uppercase_text(line)) {
            result.critical(messages::DOCUMENT_TYPE_NOT_UPPERCASE);
        }
    }

    fn check_place_and_year(&self, paragraphs: &[&str], result: &mut ValidationResult) {
        let (place, year) = find_place_and_year_within(paragraphs, self.config.place_year_tail);

        let Some(year) = year else {
            result.critical(messages::YEAR_MISSING);
            return;
        };

        if year > self.current_year {
            result.critical(messages::year_in_future(year, self.current_year));
        }

        if place.is_none() {
            result.recommend(messages::PLACE_MISSING);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::SectionSegmenter;
    use crate::types::Severity;

    fn validate(paragraphs: &[&str]) -> ValidationResult {
        let document = SectionSegmenter::default().segment_paragraphs(paragraphs);
        TitlePageValidator::new(2024).validate(&document)
    }

    fn messages_of(result: &ValidationResult, severity: Severity) -> Vec<String> {
        result
            .findings()
            .iter()
            .filter(|f| f.severity == severity)
            .map(|f| f.message.clone())
            .collect()
    }

    const COMPLETE_TITLE_PAGE: &[&str] = &[
        "МИНИСТЕРСТВО НАУКИ И ВЫСШЕГО ОБРАЗОВАНИЯ РОССИЙСКОЙ ФЕДЕРАЦИИ",
        "ФЕДЕРАЛЬНОЕ ГОСУДАРСТВЕННОЕ БЮДЖЕТНОЕ УЧРЕЖДЕНИЕ",
        "(НИИ ПРИКЛАДНЫХ ИССЛЕДОВАНИЙ)",
        "УДК 004.8",
        "Рег. № НИОКТР АААА-А20-120011690073-4",
        "УТВЕРЖДАЮ",
        "Директор института",
        "И.И. Петров",
        "ОТЧЕТ",
        "О НАУЧНО-ИССЛЕДОВАТЕЛЬСКОЙ РАБОТЕ",
        "Москва 2024",
    ];

    #[test]
    fn test_complete_title_page_has_no_findings() {
        let result = validate(COMPLETE_TITLE_PAGE);
        assert!(result.is_valid());
        assert!(!result.has_findings(), "{:?}", result.findings());
        assert_eq!(result.validator_name(), "TitlePageValidator");
    }

    #[test]
    fn test_empty_title_page_reports_every_block() {
        let result = validate(&[]);
        assert_eq!(
            messages_of(&result, Severity::Critical),
            vec![
                messages::ORGANIZATION_MISSING,
                messages::UDC_MISSING,
                messages::APPROVAL_STAMP_MISSING,
                messages::DOCUMENT_TYPE_MISSING,
                messages::YEAR_MISSING,
            ]
        );
        assert_eq!(
            messages_of(&result, Severity::Recommendation),
            vec![messages::NIOKTR_REGISTRATION_MISSING]
        );
    }

    #[test]
    fn test_organization_without_keywords_is_recommendation() {
        let mut paragraphs = COMPLETE_TITLE_PAGE.to_vec();
        paragraphs[0] = "ООО РОГА И КОПЫТА";
        paragraphs[1] = "ОТДЕЛ РАЗРАБОТКИ";
        let result = validate(&paragraphs);
        assert!(result.is_valid());
        assert_eq!(
            messages_of(&result, Severity::Recommendation),
            vec![messages::ORGANIZATION_KEYWORDS_MISSING]
        );
    }

    #[test]
    fn test_udc_without_digits() {
        let mut paragraphs = COMPLETE_TITLE_PAGE.to_vec();
        paragraphs[3] = "УДК";
        let result = validate(&paragraphs);
        assert_eq!(
            messages_of(&result, Severity::Critical),
            vec![messages::UDC_WITHOUT_DIGITS]
        );
    }

    #[test]
    fn test_approval_without_initials() {
        let mut paragraphs = COMPLETE_TITLE_PAGE.to_vec();
        paragraphs[7] = "Петров Иван";
        let result = validate(&paragraphs);
        assert_eq!(
            messages_of(&result, Severity::Critical),
            vec![messages::APPROVAL_INITIALS_MISSING]
        );
    }

    #[test]
    fn test_initials_beyond_context_window_are_not_counted() {
        let paragraphs = vec![
            "МИНИСТЕРСТВО",
            "УТВЕРЖДАЮ",
            "a",
            "b",
            "c",
            "d",
            "И.И. Петров",
        ];
        let result = validate(&paragraphs);
        assert!(messages_of(&result, Severity::Critical)
            .contains(&messages::APPROVAL_INITIALS_MISSING.to_string()));
    }

    #[test]
    fn test_initials_window_starts_at_first_stamp() {
        // A later "Утверждаю" line wins the stamp search but not the window
        let paragraphs = vec![
            "МИНИСТЕРСТВО НАУКИ",
            "УДК 004.8",
            "УТВЕРЖДАЮ",
            "Директор",
            "И.И. Петров",
            "ОТЧЕТ",
            "О НАУЧНО-ИССЛЕДОВАТЕЛЬСКОЙ РАБОТЕ",
            "Утверждаю к печати",
            "Москва 2024",
        ];
        let result = validate(&paragraphs);
        assert!(result.is_valid(), "{:?}", result.findings());
        assert!(messages_of(&result, Severity::Critical).is_empty());
    }

    #[test]
    fn test_no_initials_after_first_stamp() {
        let mut paragraphs = COMPLETE_TITLE_PAGE.to_vec();
        paragraphs[7] = "Петров Иван";
        paragraphs.push("Утверждаю: А.Б. Сидоров");
        let result = validate(&paragraphs);
        assert!(messages_of(&result, Severity::Critical)
            .contains(&messages::APPROVAL_INITIALS_MISSING.to_string()));
    }

    #[test]
    fn test_lowercase_document_type() {
        let mut paragraphs = COMPLETE_TITLE_PAGE.to_vec();
        paragraphs[8] = "Отчет";
        let result = validate(&paragraphs);
        assert_eq!(
            messages_of(&result, Severity::Critical),
            vec![messages::DOCUMENT_TYPE_NOT_UPPERCASE]
        );
    }

    #[test]
    fn test_future_year_and_missing_place() {
        let mut paragraphs = COMPLETE_TITLE_PAGE.to_vec();
        paragraphs[10] = "2031";
        let result = validate(&paragraphs);
        assert_eq!(
            messages_of(&result, Severity::Critical),
            vec![messages::year_in_future(2031, 2024)]
        );
        assert_eq!(
            messages_of(&result, Severity::Recommendation),
            vec![messages::PLACE_MISSING]
        );
    }
}
