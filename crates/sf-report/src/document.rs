//! Positioned-text document model.
//!
//! A [`Document`] is what the export primitive consumes: pages of text
//! placements, each with coordinates (millimetres from the top-left corner)
//! and a font size. It carries no styling beyond that.

use serde::Serialize;

/// What a placed line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Header,
    Title,
    Category,
    Item,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextPlacement {
    pub x: f32,
    pub y: f32,
    pub font_size: u8,
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub placements: Vec<TextPlacement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    /// Every placement in reading order, across pages.
    pub fn placements(&self) -> impl Iterator<Item = &TextPlacement> {
        self.pages.iter().flat_map(|page| page.placements.iter())
    }

    /// Text of every line in reading order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.placements().map(|placement| placement.text.as_str())
    }
}

/// Page geometry and line spacing, in millimetres and points.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub left_margin: f32,
    pub item_indent: f32,
    pub top_margin: f32,
    /// A line whose baseline would fall below this starts a new page.
    pub page_bottom: f32,
    pub header_font_size: u8,
    pub title_font_size: u8,
    pub body_font_size: u8,
    pub header_advance: f32,
    pub header_block_advance: f32,
    pub title_advance: f32,
    pub category_advance: f32,
    pub item_advance: f32,
    pub section_gap: f32,
}

/// A4 portrait, millimetres.
impl Default for Layout {
    fn default() -> Self {
        Self {
            left_margin: 10.0,
            item_indent: 15.0,
            top_margin: 15.0,
            page_bottom: 285.0,
            header_font_size: 10,
            title_font_size: 14,
            body_font_size: 12,
            header_advance: 7.0,
            header_block_advance: 10.0,
            title_advance: 10.0,
            category_advance: 7.0,
            item_advance: 6.0,
            section_gap: 5.0,
        }
    }
}

/// Places lines top to bottom and breaks pages.
pub(crate) struct Cursor<'a> {
    layout: &'a Layout,
    pages: Vec<Page>,
    y: f32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(layout: &'a Layout) -> Self {
        Self {
            layout,
            pages: vec![Page::default()],
            y: layout.top_margin,
        }
    }

    pub(crate) fn place(
        &mut self,
        x: f32,
        font_size: u8,
        kind: LineKind,
        text: String,
        advance: f32,
    ) {
        if self.y > self.layout.page_bottom {
            self.pages.push(Page::default());
            self.y = self.layout.top_margin;
        }
        let y = self.y;
        if let Some(page) = self.pages.last_mut() {
            page.placements.push(TextPlacement {
                x,
                y,
                font_size,
                kind,
                text,
            });
        }
        self.y += advance;
    }

    pub(crate) fn skip(&mut self, gap: f32) {
        self.y += gap;
    }

    pub(crate) fn finish(self) -> Document {
        Document { pages: self.pages }
    }
}
