//! Document Preprocessors
//!
//! This module provides the preprocessing layer for turning a document file
//! into the ordered list of paragraphs the segmenter consumes.
//!
//! ## Architecture
//!
//! ```text
//! Document (DOCX, TXT)
//!     ↓
//! [Format-specific Preprocessor]
//!     ↓
//! Vec<String> (trimmed, non-empty paragraphs in document order)
//!     ↓
//! [SectionSegmenter]
//!     ↓
//! DocumentStructure
//! ```
//!
//! ## Available Preprocessors
//!
//! - `DocxPreprocessor` - Word documents (zip container + WordprocessingML)
//! - `TextPreprocessor` - Plain UTF-8 text, one paragraph per line

pub mod preprocessor;
#[cfg(feature = "docx")]
pub mod docx;
pub mod text;

// Re-export main types
pub use preprocessor::Preprocessor;
#[cfg(feature = "docx")]
pub use docx::DocxPreprocessor;
pub use text::TextPreprocessor;

/// Every preprocessor compiled into this build
pub fn default_preprocessors() -> Vec<Box<dyn Preprocessor>> {
    vec![
        #[cfg(feature = "docx")]
        Box::new(DocxPreprocessor::new()),
        Box::new(TextPreprocessor::new()),
    ]
}

/// Trim paragraphs and drop the empty ones
pub(crate) fn normalize_paragraphs<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|p| p.as_ref().trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

pub(crate) fn has_extension(path: &std::path::Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}
