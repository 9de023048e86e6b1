//! WordprocessingML paragraph extraction
//!
//! Streams `word/document.xml` and collects the text of body-level
//! paragraphs in document order. Paragraphs inside tables and text boxes
//! are skipped. Within a paragraph:
//! - `<w:t>` contributes its text
//! - `<w:tab/>` inside a run becomes `\t`
//! - `<w:br/>` and `<w:cr/>` become `\n`

use crate::error::DocumentError;
use crate::preprocessors::normalize_paragraphs;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Nesting counters while walking the XML tree
#[derive(Debug, Default)]
struct BodyCursor {
    paragraph_depth: usize,
    table_depth: usize,
    text_box_depth: usize,
    run_depth: usize,
    in_text: bool,
}

impl BodyCursor {
    fn in_body_paragraph(&self) -> bool {
        self.paragraph_depth > 0 && self.table_depth == 0 && self.text_box_depth == 0
    }
}

/// Parse the main document part into trimmed, non-empty paragraphs
pub fn parse_body_paragraphs(xml: &str) -> Result<Vec<String>, DocumentError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut cursor = BodyCursor::default();
    let mut current = String::new();
    let mut paragraphs = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => cursor.paragraph_depth += 1,
                b"w:tbl" => cursor.table_depth += 1,
                b"w:txbxContent" => cursor.text_box_depth += 1,
                b"w:r" => cursor.run_depth += 1,
                b"w:t" => cursor.in_text = true,
                _ => push_run_break(&e, &cursor, &mut current),
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                // Self-closing paragraph carries no text
                b"w:p" => {}
                _ => push_run_break(&e, &cursor, &mut current),
            },
            Ok(Event::Text(t)) => {
                if cursor.in_text && cursor.in_body_paragraph() {
                    let text = t
                        .unescape()
                        .map_err(|e| DocumentError::unreadable(format!("bad XML text: {e}")))?;
                    current.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    cursor.paragraph_depth = cursor.paragraph_depth.saturating_sub(1);
                    if cursor.paragraph_depth == 0 {
                        if cursor.table_depth == 0 && cursor.text_box_depth == 0 {
                            paragraphs.push(std::mem::take(&mut current));
                        } else {
                            current.clear();
                        }
                    }
                }
                b"w:tbl" => cursor.table_depth = cursor.table_depth.saturating_sub(1),
                b"w:txbxContent" => {
                    cursor.text_box_depth = cursor.text_box_depth.saturating_sub(1)
                }
                b"w:r" => cursor.run_depth = cursor.run_depth.saturating_sub(1),
                b"w:t" => cursor.in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocumentError::unreadable(format!(
                    "malformed XML at position {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(normalize_paragraphs(paragraphs))
}

/// Tabs and line breaks count only inside runs; `<w:tab>` in paragraph
/// properties is a tab stop definition.
fn push_run_break(element: &BytesStart, cursor: &BodyCursor, current: &mut String) {
    if cursor.run_depth == 0 || !cursor.in_body_paragraph() {
        return;
    }
    match element.name().as_ref() {
        b"w:tab" => current.push('\t'),
        b"w:br" | b"w:cr" => current.push('\n'),
        _ => {}
    }
}
