//! Plain text preprocessor: one paragraph per line.

use super::{has_extension, normalize_paragraphs, Preprocessor};
use crate::error::DocumentError;
use std::path::Path;

#[derive(Debug, Default)]
pub struct TextPreprocessor;

impl TextPreprocessor {
    pub fn new() -> Self {
        Self
    }
}

impl Preprocessor for TextPreprocessor {
    fn extract_paragraphs(&self, bytes: &[u8]) -> Result<Vec<String>, DocumentError> {
        let text = std::str::from_utf8(bytes).map_err(DocumentError::unreadable)?;
        // Tolerate a UTF-8 byte order mark from Windows editors
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Ok(normalize_paragraphs(text.lines()))
    }

    fn name(&self) -> &str {
        "TextPreprocessor"
    }

    fn supports_file_type(&self, path: &Path) -> bool {
        has_extension(path, "txt")
    }
}
