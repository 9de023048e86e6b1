//! DOCX Preprocessor
//!
//! Opens the Office Open XML container and extracts body paragraphs from
//! `word/document.xml`. Two stages:
//! 1. Container: zip archive → document part XML
//! 2. XML parsing: WordprocessingML → paragraph strings

pub mod document_xml;

use super::{has_extension, Preprocessor};
use crate::error::DocumentError;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

/// Main document part inside the container
pub const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Default)]
pub struct DocxPreprocessor;

impl DocxPreprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Read the main document part out of the zip container
    fn read_document_part(bytes: &[u8]) -> Result<String, DocumentError> {
        let mut archive =
            ZipArchive::new(Cursor::new(bytes)).map_err(DocumentError::invalid_container)?;

        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            DocumentError::unreadable(format!("{DOCUMENT_PART}: {e}"))
        })?;

        let mut xml = String::with_capacity(part.size() as usize);
        part.read_to_string(&mut xml)
            .map_err(|e| DocumentError::unreadable(format!("{DOCUMENT_PART}: {e}")))?;

        Ok(xml)
    }
}

impl Preprocessor for DocxPreprocessor {
    fn extract_paragraphs(&self, bytes: &[u8]) -> Result<Vec<String>, DocumentError> {
        let xml = Self::read_document_part(bytes)?;
        let paragraphs = document_xml::parse_body_paragraphs(&xml)?;
        log::debug!("DOCX: {} non-empty body paragraphs", paragraphs.len());
        Ok(paragraphs)
    }

    fn name(&self) -> &str {
        "DocxPreprocessor"
    }

    fn supports_file_type(&self, path: &Path) -> bool {
        has_extension(path, "docx")
    }
}
