//! Catalog + item state + metadata -> [`Document`].

pub use sf_core::DEFAULT_TITLE;
use sf_core::{Catalog, ItemState, Progress, SessionMetadata, StateSnapshot};

use crate::document::{Cursor, Document, Layout, LineKind};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub title: String,
    pub layout: Layout,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            layout: Layout::default(),
        }
    }
}

/// Render the report. Pure: the same inputs always produce the same
/// document. Date and time come from `metadata`, which the caller captures
/// once per export.
#[must_use]
pub fn render(
    catalog: &Catalog,
    snapshot: &StateSnapshot<'_>,
    metadata: &SessionMetadata,
    options: &RenderOptions,
) -> Document {
    let layout = &options.layout;
    let progress = Progress::from_snapshot(snapshot);
    let mut cursor = Cursor::new(layout);

    let header = [
        (
            format!("Date: {}    Time: {}", metadata.date, metadata.time),
            layout.header_advance,
        ),
        (
            format!("Device/Public IP: {}", metadata.network_identity),
            layout.header_advance,
        ),
        (
            format!("QA Name: {}", metadata.operator_name),
            layout.header_block_advance,
        ),
        (format!("Completion: {progress}"), layout.header_block_advance),
    ];
    for (text, advance) in header {
        cursor.place(
            layout.left_margin,
            layout.header_font_size,
            LineKind::Header,
            text,
            advance,
        );
    }

    cursor.place(
        layout.left_margin,
        layout.title_font_size,
        LineKind::Title,
        options.title.clone(),
        layout.title_advance,
    );

    for category in catalog.categories() {
        cursor.place(
            layout.left_margin,
            layout.body_font_size,
            LineKind::Category,
            category.name().to_string(),
            layout.category_advance,
        );
        for item in category.items() {
            cursor.place(
                layout.item_indent,
                layout.body_font_size,
                LineKind::Item,
                item_line(item.description(), snapshot.get(item.description())),
                layout.item_advance,
            );
        }
        cursor.skip(layout.section_gap);
    }

    cursor.finish()
}

/// `[X] description` or `[ ] description`, with ` - Notes: <note>` when the
/// note has content. The note is printed exactly as typed.
fn item_line(description: &str, state: Option<&ItemState>) -> String {
    let marker = if state.is_some_and(|s| s.completed) {
        "[X]"
    } else {
        "[ ]"
    };
    match state.filter(|s| s.has_note()) {
        Some(state) => format!("{marker} {description} - Notes: {}", state.note),
        None => format!("{marker} {description}"),
    }
}
