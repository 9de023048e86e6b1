use super::engine::Validator;
use super::messages;
use crate::config::ExecutorListConfig;
use crate::heuristics::{contains_ignore_case, contains_initials};
use crate::types::{DocumentStructure, SectionMap, ValidationResult};
use regex::Regex;
use std::sync::LazyLock;

pub const EXECUTOR_LIST_VALIDATOR: &str = "ExecutorListValidator";

// "Исполнитель: ... А.В." anywhere on the title page, across lines; only the
// first letter may vary in case
static TITLE_PAGE_EXECUTOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)[Ии]сполнитель[:\s]+.*?[А-ЯA-Z]\.[А-ЯA-Z]\.").unwrap()
});

/// Checks the "list of executors" structural element.
///
/// The list is conditional: with more than two executors it is a separate
/// section, otherwise the executor is named on the title page. When the
/// section exists its body is checked, otherwise the title page is.
pub struct ExecutorListValidator {
    config: ExecutorListConfig,
}

impl Default for ExecutorListValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutorListValidator {
    pub fn new() -> Self {
        Self::with_config(ExecutorListConfig::default())
    }

    pub fn with_config(config: ExecutorListConfig) -> Self {
        Self { config }
    }

    /// Body of the first section whose header names the executor list.
    fn find_executor_section<'d>(&self, sections: &'d SectionMap) -> Option<&'d str> {
        sections
            .iter()
            .find(|(header, _)| {
                self.config
                    .section_keywords
                    .iter()
                    .any(|kw| contains_ignore_case(header, kw))
            })
            .map(|(_, body)| body)
    }

    fn check_title_page_executor(&self, title_page: &str, result: &mut ValidationResult) {
        if !title_page.to_lowercase().contains("исполнитель") {
            result.recommend(messages::EXECUTORS_NOT_MENTIONED);
            return;
        }

        if !TITLE_PAGE_EXECUTOR_REGEX.is_match(title_page) {
            result.recommend(messages::TITLE_PAGE_EXECUTOR_INITIALS_MISSING);
        }
    }

    fn check_executor_section(&self, section_text: &str, result: &mut ValidationResult) {
        let lines: Vec<String> = section_text.split('\n').map(str::to_lowercase).collect();

        if !lines.iter().any(|line| line.contains("исполнител")) {
            result.critical(messages::EXECUTOR_ROLE_MISSING);
        }

        // One line per person: position on the left, initials and surname on the right
        let listed = section_text
            .split('\n')
            .filter(|line| contains_initials(line))
            .count();
        if listed == 0 {
            result.critical(messages::EXECUTOR_INITIALS_MISSING);
        } else if listed < self.config.min_listed_executors {
            result.recommend(messages::too_few_executors(listed));
        }

        let has_responsible = lines
            .iter()
            .any(|line| line.contains("отв") && line.contains("исполнител"));
        if !has_responsible {
            result.recommend(messages::RESPONSIBLE_EXECUTOR_MISSING);
        }
    }
}

impl Validator for ExecutorListValidator {
    fn validate(&self, document: &DocumentStructure) -> ValidationResult {
        let mut result = ValidationResult::new(EXECUTOR_LIST_VALIDATOR);

        match self.find_executor_section(&document.sections) {
            Some(section_text) => self.check_executor_section(section_text, &mut result),
            None => self.check_title_page_executor(&document.title_page_text, &mut result),
        }

        result
    }

    fn name(&self) -> &str {
        EXECUTOR_LIST_VALIDATOR
    }
}
