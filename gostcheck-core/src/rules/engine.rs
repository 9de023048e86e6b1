use crate::config::ValidationConfig;
use crate::types::{DocumentStructure, ValidationResult};

use super::executor_list::ExecutorListValidator;
use super::title_page::TitlePageValidator;

/// A rule checker over a segmented document.
///
/// Validators never fail: a missing or malformed block is reported as a
/// finding in the returned result.
pub trait Validator {
    fn validate(&self, document: &DocumentStructure) -> ValidationResult;
    fn name(&self) -> &str;
}

/// Ordered registry of validators.
#[derive(Default)]
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from the pipeline section of the config, in the
    /// listed order. Disabled and unknown rules are skipped.
    pub fn from_config(config: &ValidationConfig, current_year: i32) -> Self {
        let mut engine = Self::new();

        for rule_config in &config.pipeline.rules {
            if !rule_config.enabled {
                log::debug!("Skipping disabled rule: {}", rule_config.name);
                continue;
            }

            match rule_config.name.as_str() {
                "TitlePageValidator" => engine.register(Box::new(TitlePageValidator::with_config(
                    config.title_page.clone(),
                    current_year,
                ))),
                "ExecutorListValidator" => engine.register(Box::new(
                    ExecutorListValidator::with_config(config.executor_list.clone()),
                )),
                unknown => log::warn!("Unknown rule: {unknown}. Skipping..."),
            }
        }

        engine
    }

    /// Append a validator. No de-duplication, no priorities.
    pub fn register(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Run every registered validator, one result per validator in
    /// registration order.
    pub fn run(&self, document: &DocumentStructure) -> Vec<ValidationResult> {
        self.validators
            .iter()
            .map(|validator| {
                let result = validator.validate(document);
                log::debug!(
                    "{}: {} critical, {} recommendations",
                    validator.name(),
                    result.critical_count(),
                    result.recommendation_count()
                );
                result
            })
            .collect()
    }

    pub fn validator_names(&self) -> Vec<&str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use crate::segmenter::SectionSegmenter;

    struct FixedValidator {
        name: &'static str,
        critical: bool,
    }

    impl Validator for FixedValidator {
        fn validate(&self, _document: &DocumentStructure) -> ValidationResult {
            let mut result = ValidationResult::new(self.name);
            if self.critical {
                result.critical("always broken");
            }
            result
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    fn empty_document() -> DocumentStructure {
        SectionSegmenter::default().segment_paragraphs::<&str>(&[])
    }

    #[test]
    fn test_run_preserves_registration_order() {
        let mut engine = ValidationEngine::new();
        engine.register(Box::new(FixedValidator { name: "B", critical: true }));
        engine.register(Box::new(FixedValidator { name: "A", critical: false }));
        engine.register(Box::new(FixedValidator { name: "B", critical: true }));

        let results = engine.run(&empty_document());
        let names: Vec<_> = results.iter().map(|r| r.validator_name()).collect();
        assert_eq!(names, vec!["B", "A", "B"]);
        assert!(!results[0].is_valid());
        assert!(results[1].is_valid());
    }

    #[test]
    fn test_empty_engine_returns_no_results() {
        assert!(ValidationEngine::new().run(&empty_document()).is_empty());
    }

    #[test]
    fn test_from_config_follows_pipeline() {
        let mut config = ValidationConfig::default();
        config.pipeline.rules = vec![
            RuleConfig { name: "ExecutorListValidator".to_string(), enabled: true },
            RuleConfig { name: "NoSuchValidator".to_string(), enabled: true },
            RuleConfig { name: "TitlePageValidator".to_string(), enabled: false },
        ];

        let engine = ValidationEngine::from_config(&config, 2024);
        assert_eq!(engine.validator_names(), vec!["ExecutorListValidator"]);
    }

    #[test]
    fn test_default_pipeline_registers_both_validators() {
        let engine = ValidationEngine::from_config(&ValidationConfig::default(), 2024);
        assert_eq!(
            engine.validator_names(),
            vec!["TitlePageValidator", "ExecutorListValidator"]
        );
    }
}
