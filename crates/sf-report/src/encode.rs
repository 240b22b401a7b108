//! Document encoders.
//!
//! The real document backend (PDF or otherwise) lives outside this crate.
//! These encoders cover a readable text artifact and a JSON placement list
//! that such a backend can replay.

use crate::document::{Document, LineKind};
use crate::error::ReportError;

pub trait DocumentEncoder {
    /// File extension, without the dot.
    fn extension(&self) -> &'static str;

    /// Encode the whole document.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Encode`] if serialization fails.
    fn encode(&self, document: &Document) -> Result<Vec<u8>, ReportError>;
}

/// Plain text: items indented, a blank line before the title and each
/// category, a form feed between pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEncoder;

impl DocumentEncoder for TextEncoder {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn encode(&self, document: &Document) -> Result<Vec<u8>, ReportError> {
        let mut out = String::new();
        for (index, page) in document.pages.iter().enumerate() {
            if index > 0 {
                out.push('\u{000C}');
                out.push('\n');
            }
            for (position, placement) in page.placements.iter().enumerate() {
                match placement.kind {
                    LineKind::Title | LineKind::Category if position > 0 => out.push('\n'),
                    _ => {}
                }
                if placement.kind == LineKind::Item {
                    out.push_str("  ");
                }
                out.push_str(&placement.text);
                out.push('\n');
            }
        }
        Ok(out.into_bytes())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl DocumentEncoder for JsonEncoder {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn encode(&self, document: &Document) -> Result<Vec<u8>, ReportError> {
        let mut bytes = serde_json::to_vec_pretty(document)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::document::{Page, TextPlacement};

    fn line(kind: LineKind, text: &str) -> TextPlacement {
        TextPlacement {
            x: 10.0,
            y: 15.0,
            font_size: 12,
            kind,
            text: text.to_string(),
        }
    }

    fn two_page_document() -> Document {
        Document {
            pages: vec![
                Page {
                    placements: vec![
                        line(LineKind::Header, "QA Name: Dana"),
                        line(LineKind::Title, "Script"),
                        line(LineKind::Category, "Offline"),
                        line(LineKind::Item, "[X] Unplug."),
                    ],
                },
                Page {
                    placements: vec![
                        line(LineKind::Category, "Final Review"),
                        line(LineKind::Item, "[ ] Report. - Notes: pending"),
                    ],
                },
            ],
        }
    }

    #[test]
    fn text_layout() {
        let bytes = TextEncoder.encode(&two_page_document()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "QA Name: Dana\n\nScript\n\nOffline\n  [X] Unplug.\n\u{c}\nFinal Review\n  [ ] Report. - Notes: pending\n"
        );
    }

    #[test]
    fn json_is_a_placement_list() {
        let bytes = JsonEncoder.encode(&two_page_document()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["pages"].as_array().unwrap().len(), 2);
        assert_eq!(value["pages"][0]["placements"][1]["kind"], "title");
        assert_eq!(value["pages"][1]["placements"][1]["text"], "[ ] Report. - Notes: pending");
        assert_eq!(value["pages"][0]["placements"][0]["font_size"], 12);
    }

    #[test]
    fn extensions() {
        assert_eq!(TextEncoder.extension(), "txt");
        assert_eq!(JsonEncoder.extension(), "json");
    }
}
