use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_title_page_paragraphs() -> usize {
    30 // GOST title page comfortably fits in the first 30 paragraphs
}

fn default_max_header_length() -> usize {
    60
}

fn default_header_length_tolerance() -> usize {
    5 // "ПРИЛОЖЕНИЕ А" style suffixes, not captions mentioning a keyword
}

fn default_organization_window() -> usize {
    15
}

fn default_approval_context_lines() -> usize {
    5
}

fn default_place_year_tail() -> usize {
    5
}

fn default_min_listed_executors() -> usize {
    2
}

fn default_section_keywords() -> Vec<String> {
    vec![
        "РЕФЕРАТ".to_string(),
        "СОДЕРЖАНИЕ".to_string(),
        "ТЕРМИНЫ И ОПРЕДЕЛЕНИЯ".to_string(),
        "ПЕРЕЧЕНЬ СОКРАЩЕНИЙ И ОБОЗНАЧЕНИЙ".to_string(),
        "ВВЕДЕНИЕ".to_string(),
        "ЗАКЛЮЧЕНИЕ".to_string(),
        "СПИСОК ИСПОЛЬЗОВАННЫХ ИСТОЧНИКОВ".to_string(),
        "ПРИЛОЖЕНИЕ".to_string(),
        "СПИСОК ИСПОЛНИТЕЛЕЙ".to_string(),
        "СПИСОК ИСПОЛЬНИТЕЛЕЙ".to_string(), // common misspelling
    ]
}

fn default_organization_keywords() -> Vec<String> {
    vec![
        "МИНИСТЕРСТВО".to_string(),
        "ФЕДЕРАЛЬНОЕ".to_string(),
        "АГЕНТСТВО".to_string(),
        "УНИВЕРСИТЕТ".to_string(),
    ]
}

fn default_executor_section_keywords() -> Vec<String> {
    vec![
        "СПИСОК ИСПОЛНИТЕЛЕЙ".to_string(),
        "СПИСОК ИСПОЛЬНИТЕЛЕЙ".to_string(),
        "ИСПОЛНИТЕЛИ".to_string(),
    ]
}

/// Top-level configuration. Every field has a default, so an empty YAML
/// document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub segmentation: SegmentationConfig,
    #[serde(default)]
    pub title_page: TitlePageConfig,
    #[serde(default)]
    pub executor_list: ExecutorListConfig,
    /// Pipeline configuration - defines which validators run and in what order
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Number of leading paragraphs treated as the title page
    #[serde(default = "default_title_page_paragraphs")]
    pub title_page_paragraphs: usize,
    /// Longest paragraph (in characters) that can still be a section header
    #[serde(default = "default_max_header_length")]
    pub max_header_length: usize,
    /// Allowed length difference between a header and the keyword it matched
    #[serde(default = "default_header_length_tolerance")]
    pub header_length_tolerance: usize,
    /// Structural element names recognized as section headers
    #[serde(default = "default_section_keywords")]
    pub section_keywords: Vec<String>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            title_page_paragraphs: default_title_page_paragraphs(),
            max_header_length: default_max_header_length(),
            header_length_tolerance: default_header_length_tolerance(),
            section_keywords: default_section_keywords(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitlePageConfig {
    /// Organization block is searched in paragraphs [0, organization_window)
    #[serde(default = "default_organization_window")]
    pub organization_window: usize,
    /// Words expected somewhere in the organization name
    #[serde(default = "default_organization_keywords")]
    pub organization_keywords: Vec<String>,
    /// Lines scanned for initials, starting at the УТВЕРЖДАЮ stamp
    #[serde(default = "default_approval_context_lines")]
    pub approval_context_lines: usize,
    /// Trailing title-page paragraphs searched for place and year
    #[serde(default = "default_place_year_tail")]
    pub place_year_tail: usize,
    /// Fixed "current year" for the year sanity check; local clock if absent
    #[serde(default)]
    pub current_year: Option<i32>,
}

impl Default for TitlePageConfig {
    fn default() -> Self {
        Self {
            organization_window: default_organization_window(),
            organization_keywords: default_organization_keywords(),
            approval_context_lines: default_approval_context_lines(),
            place_year_tail: default_place_year_tail(),
            current_year: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutorListConfig {
    /// Section header variants that hold the list of executors
    #[serde(default = "default_executor_section_keywords")]
    pub section_keywords: Vec<String>,
    /// Below this many listed people the list may live on the title page instead
    #[serde(default = "default_min_listed_executors")]
    pub min_listed_executors: usize,
}

impl Default for ExecutorListConfig {
    fn default() -> Self {
        Self {
            section_keywords: default_executor_section_keywords(),
            min_listed_executors: default_min_listed_executors(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// List of validators to run in order
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Name of the validator
    pub name: String,
    /// Whether this validator is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                RuleConfig {
                    name: "TitlePageValidator".to_string(),
                    enabled: true,
                },
                RuleConfig {
                    name: "ExecutorListValidator".to_string(),
                    enabled: true,
                },
            ],
        }
    }
}

impl ValidationConfig {
    /// Load config from a YAML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                log::warn!("{e}; using default config");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config = ValidationConfig::from_yaml_str("").unwrap();
        assert_eq!(config.segmentation.title_page_paragraphs, 30);
        assert_eq!(config.pipeline.rules.len(), 2);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = "title_page:\n  current_year: 2024\nsegmentation:\n  max_header_length: 40\n";
        let config = ValidationConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.title_page.current_year, Some(2024));
        assert_eq!(config.title_page.organization_window, 15);
        assert_eq!(config.segmentation.max_header_length, 40);
        assert_eq!(config.segmentation.header_length_tolerance, 5);
        assert!(config
            .segmentation
            .section_keywords
            .iter()
            .any(|k| k == "СПИСОК ИСПОЛНИТЕЛЕЙ"));
    }

    #[test]
    fn test_rule_enabled_defaults_to_true() {
        let yaml = "pipeline:\n  rules:\n    - name: ExecutorListValidator\n    - name: TitlePageValidator\n      enabled: false\n";
        let config = ValidationConfig::from_yaml_str(yaml).unwrap();
        assert!(config.pipeline.rules[0].enabled);
        assert!(!config.pipeline.rules[1].enabled);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = ValidationConfig::load_with_fallback(Some("/nonexistent/gostcheck.yaml"));
        assert_eq!(config.executor_list.min_listed_executors, 2);
    }
}
