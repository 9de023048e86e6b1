use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ===== DOCUMENT MODEL =====
// A document enters the pipeline as an ordered list of trimmed, non-empty
// paragraphs and leaves the segmenter as a DocumentStructure. Everything
// downstream of the segmenter is read-only over it.

/// Header -> body mapping of recognized front-matter sections.
///
/// Keys are unique. Iteration follows the order in which each header was
/// first inserted (document order); inserting an existing header replaces
/// its body in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMap {
    entries: Vec<(String, String)>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: String, body: String) {
        match self.entries.iter_mut().find(|(key, _)| *key == header) {
            Some(entry) => entry.1 = body,
            None => self.entries.push((header, body)),
        }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == header)
            .map(|(_, body)| body.as_str())
    }

    pub fn contains_key(&self, header: &str) -> bool {
        self.get(header).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, body)| (key.as_str(), body.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Segmented view of one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStructure {
    pub filename: String,
    /// First title-page paragraphs joined with '\n'
    pub title_page_text: String,
    pub sections: SectionMap,
    pub all_paragraphs: Vec<String>,
}

impl DocumentStructure {
    /// Title page split back into its paragraphs.
    pub fn title_page_lines(&self) -> Vec<&str> {
        self.title_page_text.split('\n').collect()
    }
}

// ===== FINDINGS =====

/// How binding a finding is. `Critical` orders before `Recommendation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Violates a mandatory rule of the standard
    Critical,
    /// Non-binding improvement
    Recommendation,
}

impl Severity {
    pub fn is_critical(self) -> bool {
        matches!(self, Severity::Critical)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Recommendation => write!(f, "RECOMMENDATION"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Outcome of one validator over one document.
///
/// Validity is derived from the findings on every call, so a result can never
/// report itself valid while holding a critical finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "SerializedResult")]
pub struct ValidationResult {
    validator_name: String,
    findings: Vec<Finding>,
}

impl ValidationResult {
    pub fn new(validator_name: impl Into<String>) -> Self {
        Self {
            validator_name: validator_name.into(),
            findings: Vec::new(),
        }
    }

    pub fn add_finding(&mut self, severity: Severity, message: impl Into<String>) {
        self.findings.push(Finding::new(severity, message));
    }

    pub fn critical(&mut self, message: impl Into<String>) {
        self.add_finding(Severity::Critical, message);
    }

    pub fn recommend(&mut self, message: impl Into<String>) {
        self.add_finding(Severity::Recommendation, message);
    }

    pub fn validator_name(&self) -> &str {
        &self.validator_name
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn is_valid(&self) -> bool {
        !self.findings.iter().any(|f| f.severity.is_critical())
    }

    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    pub fn critical_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity.is_critical())
    }

    pub fn recommendations(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.severity.is_critical())
    }

    pub fn critical_count(&self) -> usize {
        self.critical_findings().count()
    }

    pub fn recommendation_count(&self) -> usize {
        self.recommendations().count()
    }
}

/// Wire shape of a ValidationResult: carries the derived validity flag.
#[derive(Debug, Clone, Serialize)]
struct SerializedResult {
    validator_name: String,
    is_valid: bool,
    findings: Vec<Finding>,
}

impl From<ValidationResult> for SerializedResult {
    fn from(result: ValidationResult) -> Self {
        Self {
            is_valid: result.is_valid(),
            validator_name: result.validator_name,
            findings: result.findings,
        }
    }
}

/// Everything produced for one validated document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub filename: String,
    pub section_names: Vec<String>,
    pub results: Vec<ValidationResult>,
    pub checked_at: DateTime<Utc>,
}

impl DocumentReport {
    pub fn new(document: &DocumentStructure, results: Vec<ValidationResult>) -> Self {
        Self {
            filename: document.filename.clone(),
            section_names: document.sections.keys().map(str::to_string).collect(),
            results,
            checked_at: Utc::now(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.results.iter().all(ValidationResult::is_valid)
    }

    pub fn critical_count(&self) -> usize {
        self.results.iter().map(ValidationResult::critical_count).sum()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_validity_follows_findings() {
        let mut result = ValidationResult::new("Probe");
        assert!(result.is_valid());

        result.recommend("advisory");
        assert!(result.is_valid());

        result.critical("broken");
        assert!(!result.is_valid());
        assert_eq!(result.critical_count(), 1);
        assert_eq!(result.recommendation_count(), 1);
    }

    #[test]
    fn test_findings_keep_insertion_order() {
        let mut result = ValidationResult::new("Probe");
        result.recommend("first");
        result.critical("second");
        let messages: Vec<_> = result.findings().iter().map(|f| f.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_severity_order_puts_critical_first() {
        let mut severities = vec![Severity::Recommendation, Severity::Critical];
        severities.sort();
        assert_eq!(severities, vec![Severity::Critical, Severity::Recommendation]);
    }

    #[test]
    fn test_section_map_replaces_in_place() {
        let mut sections = SectionMap::new();
        sections.insert("РЕФЕРАТ".to_string(), "old".to_string());
        sections.insert("ВВЕДЕНИЕ".to_string(), "intro".to_string());
        sections.insert("РЕФЕРАТ".to_string(), "new".to_string());

        assert_eq!(sections.len(), 2);
        assert_eq!(sections.get("РЕФЕРАТ"), Some("new"));
        assert_eq!(sections.keys().collect::<Vec<_>>(), vec!["РЕФЕРАТ", "ВВЕДЕНИЕ"]);
    }

    #[test]
    fn test_serialized_result_carries_validity() {
        let mut result = ValidationResult::new("Probe");
        result.critical("broken");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["validator_name"], "Probe");
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["findings"][0]["severity"], "CRITICAL");
    }
}
