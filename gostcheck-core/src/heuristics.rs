//! Text heuristics shared by the segmenter and the validators.
//!
//! Every function here is a pure predicate or extractor over already
//! extracted paragraph text. None of them fail: "not found" is `None` or an
//! empty collection.

use regex::Regex;
use std::sync::LazyLock;

/// Paragraphs considered part of the title page
pub const TITLE_PAGE_PARAGRAPHS: usize = 30;

/// Trailing paragraphs searched for "place, year"
pub const PLACE_YEAR_TAIL: usize = 5;

// Pre-compiled patterns
static INITIALS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[А-ЯA-Z]\.[А-ЯA-Z]\.").unwrap());

static YEAR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b20[0-9]{2}\b").unwrap());

/// True iff `text` has at least one letter and no lowercase letters.
/// Digits, punctuation and whitespace are ignored.
pub fn is_uppercase_text(text: &str) -> bool {
    let mut has_upper = false;
    for c in text.chars().filter(|c| c.is_alphabetic()) {
        if c.is_lowercase() {
            return false;
        }
        has_upper |= c.is_uppercase();
    }
    has_upper
}

/// Initials like "А.В." in left-to-right order, non-overlapping.
pub fn extract_initials(text: &str) -> Vec<String> {
    INITIALS_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn contains_initials(text: &str) -> bool {
    INITIALS_REGEX.is_match(text)
}

/// First standalone "20xx" year in the text.
pub fn extract_year(text: &str) -> Option<i32> {
    YEAR_REGEX
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

pub fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_uppercase().contains(&needle.to_uppercase())
}

/// Index of the first paragraph containing `keyword`, case-insensitively.
pub fn find_first_containing<S: AsRef<str>>(paragraphs: &[S], keyword: &str) -> Option<usize> {
    paragraphs
        .iter()
        .position(|para| contains_ignore_case(para.as_ref(), keyword))
}

/// Returns the first keyword that `text` contains (case-insensitively) and
/// whose trimmed length is within `tolerance` characters of the trimmed text.
///
/// This separates a real header ("ПРИЛОЖЕНИЕ А") from a caption that merely
/// mentions the keyword.
pub fn match_keyword_closely<'k>(
    text: &str,
    keywords: &'k [String],
    tolerance: usize,
) -> Option<&'k str> {
    let trimmed = text.trim();
    let upper = trimmed.to_uppercase();
    let text_len = trimmed.chars().count();

    keywords
        .iter()
        .map(|keyword| keyword.trim())
        .filter(|keyword| !keyword.is_empty() && upper.contains(&keyword.to_uppercase()))
        .find(|keyword| text_len.abs_diff(keyword.chars().count()) <= tolerance)
}

fn title_window<S: AsRef<str>>(paragraphs: &[S]) -> &[S] {
    &paragraphs[..paragraphs.len().min(TITLE_PAGE_PARAGRAPHS)]
}

/// Organization name block at the top of the title page.
///
/// Leading blank or non-uppercase lines are skipped (the ministry line is
/// sometimes typed in normal case). Once an uppercase line is seen, the block
/// runs until the next non-uppercase line.
pub fn find_organization_block<S: AsRef<str>>(
    paragraphs: &[S],
    start: usize,
    end: usize,
) -> Vec<String> {
    let end = end.min(paragraphs.len());
    let start = start.min(end);

    let mut block = Vec::new();
    for para in &paragraphs[start..end] {
        let line = para.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        if is_uppercase_text(line) {
            block.push(line.to_string());
        } else if !block.is_empty() {
            break;
        }
    }
    block
}

/// UDC index and registration numbers from the left column of the title page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataBlock {
    pub udc: Option<String>,
    pub nioktr_registration: Option<String>,
    pub ikrbs_registration: Option<String>,
}

/// Scans the title page for metadata lines. A line counts for the first key
/// it matches (УДК, then НИОКТР, then ИКРБС); a later match replaces an
/// earlier one for the same key.
pub fn find_metadata_block<S: AsRef<str>>(paragraphs: &[S]) -> MetadataBlock {
    let mut metadata = MetadataBlock::default();

    for para in title_window(paragraphs) {
        let line = para.as_ref().trim();
        let upper = line.to_uppercase();

        if upper.contains("УДК") {
            metadata.udc = Some(line.to_string());
        } else if upper.contains("РЕГ") && upper.contains("НИОКТР") {
            metadata.nioktr_registration = Some(line.to_string());
        } else if upper.contains("РЕГ") && upper.contains("ИКРБС") {
            metadata.ikrbs_registration = Some(line.to_string());
        }
    }
    metadata
}

/// A stamp line and its paragraph index on the title page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampLine {
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApprovalStamps {
    /// СОГЛАСОВАНО
    pub agreed: Option<StampLine>,
    /// УТВЕРЖДАЮ
    pub approved: Option<StampLine>,
}

/// Finds the СОГЛАСОВАНО and УТВЕРЖДАЮ stamps. When a stamp word occurs on
/// several lines, the last one wins.
pub fn find_approval_stamp<S: AsRef<str>>(paragraphs: &[S]) -> ApprovalStamps {
    let mut stamps = ApprovalStamps::default();

    for (index, para) in title_window(paragraphs).iter().enumerate() {
        let line = para.as_ref().trim();
        let upper = line.to_uppercase();

        if upper.contains("СОГЛАСОВАНО") {
            stamps.agreed = Some(StampLine {
                index,
                text: line.to_string(),
            });
        }
        if upper.contains("УТВЕРЖДАЮ") {
            stamps.approved = Some(StampLine {
                index,
                text: line.to_string(),
            });
        }
    }
    stamps
}

/// "ОТЧЕТ" followed on the next line by "О НАУЧНО-ИССЛЕДОВАТЕЛЬСКОЙ РАБОТЕ",
/// returned as the two lines joined with '\n'.
pub fn find_document_type<S: AsRef<str>>(paragraphs: &[S]) -> Option<String> {
    let window = title_window(paragraphs);

    for (i, para) in window.iter().enumerate() {
        let line = para.as_ref();
        if !line.to_uppercase().contains("ОТЧЕТ") {
            continue;
        }
        if let Some(next) = paragraphs.get(i + 1) {
            let next = next.as_ref();
            if next.to_uppercase().contains("НАУЧНО-ИССЛЕДОВАТЕЛЬСКОЙ") {
                return Some(format!("{}\n{}", line.trim(), next.trim()));
            }
        }
    }
    None
}

/// Place and year from the bottom of the title page ("Москва 2024",
/// "Москва, 2024"). Looks at the last five paragraphs, bottom-up.
pub fn find_place_and_year<S: AsRef<str>>(paragraphs: &[S]) -> (Option<String>, Option<i32>) {
    find_place_and_year_within(paragraphs, PLACE_YEAR_TAIL)
}

pub fn find_place_and_year_within<S: AsRef<str>>(
    paragraphs: &[S],
    tail: usize,
) -> (Option<String>, Option<i32>) {
    let start = paragraphs.len().saturating_sub(tail);

    for para in paragraphs[start..].iter().rev() {
        let line = para.as_ref();
        if let Some(year) = extract_year(line) {
            let without_year = YEAR_REGEX.replace_all(line, "");
            let place = without_year.trim_matches(|c| c == ' ' || c == ',');
            let place = (!place.is_empty()).then(|| place.to_string());
            return (place, Some(year));
        }
    }
    (None, None)
}
