// Preprocessor abstraction for document loading
//
// This module defines the boundary between document extraction
// (file -> paragraphs) and structural processing (paragraphs -> sections ->
// findings). Everything after this point works with plain paragraph strings
// and is format-agnostic.

use crate::error::DocumentError;
use std::path::Path;

/// Preprocessor trait - converts a document into its paragraphs
///
/// Preprocessors handle:
/// - Container format parsing (zip, XML, text encodings)
/// - Paragraph extraction in document order
/// - Trimming and dropping empty paragraphs
pub trait Preprocessor {
    /// Extract trimmed, non-empty paragraphs from the raw file bytes.
    ///
    /// Errors carry no path; `process_file` attaches it.
    fn extract_paragraphs(&self, bytes: &[u8]) -> Result<Vec<String>, DocumentError>;

    /// Convenience method: Process from file path
    ///
    /// Reads the file and extracts its paragraphs.
    fn process_file(&self, input: &Path) -> Result<Vec<String>, DocumentError> {
        let bytes = std::fs::read(input).map_err(|source| DocumentError::Io {
            path: input.to_path_buf(),
            source,
        })?;
        self.extract_paragraphs(&bytes)
            .map_err(|e| e.with_path(input))
    }

    /// Get preprocessor name for debugging/logging
    fn name(&self) -> &str;

    /// Check if preprocessor supports the given file type
    fn supports_file_type(&self, path: &Path) -> bool;
}
