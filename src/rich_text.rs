//! Rich text adapter over a WYSIWYG editor widget.
//!
//! DESIGN
//! ======
//! Widgets are shared handles owned by the view layer, so every method takes
//! `&self`. A surface (create form, edit modal) owns five editors, one per
//! [`RichField`]; any of them may be missing if the widget failed to mount,
//! and a missing editor reads as empty.

#[cfg(test)]
#[path = "rich_text_test.rs"]
mod rich_text_test;

use crate::types::{RichContent, RichField};

/// Operations the client needs from a rich-text widget.
pub trait RichTextEditor {
    /// Plain-text content (no markup).
    fn text(&self) -> String;

    /// HTML serialization of the content.
    fn html(&self) -> String;

    /// Remove all content.
    fn clear(&self);

    /// Insert `html` through the widget's own sanitizing paste pipeline.
    fn paste_html(&self, html: &str);
}

/// HTML of `editor`, or `""` when there is no editor or only whitespace text.
///
/// Untouched widgets still serialize to markup such as `<p><br></p>`; this
/// keeps that out of storage.
pub fn extract_html_or_empty<E: RichTextEditor>(editor: Option<&E>) -> String {
    let Some(editor) = editor else {
        return String::new();
    };
    if editor.text().trim().is_empty() {
        return String::new();
    }
    editor.html()
}

/// Replace the editor content with `html` (or leave it empty).
pub fn load_html<E: RichTextEditor>(editor: Option<&E>, html: Option<&str>) {
    let Some(editor) = editor else {
        return;
    };
    editor.clear();
    if let Some(html) = html.filter(|h| !h.is_empty()) {
        editor.paste_html(html);
    }
}

/// The five editors of one editing surface.
pub struct RichFields<E> {
    editors: [Option<E>; 5],
}

impl<E: RichTextEditor> RichFields<E> {
    /// Build a field set, asking `mount` for each field's editor.
    pub fn new(mount: impl FnMut(RichField) -> Option<E>) -> Self {
        Self { editors: RichField::ALL.map(mount) }
    }

    #[must_use]
    pub fn get(&self, field: RichField) -> Option<&E> {
        self.editors[field.index()].as_ref()
    }

    /// Extract all five fields.
    #[must_use]
    pub fn extract(&self) -> RichContent {
        RichContent::from_fn(|field| extract_html_or_empty(self.get(field)))
    }

    /// Load all five fields from stored HTML.
    pub fn load(&self, content: &RichContent) {
        for field in RichField::ALL {
            load_html(self.get(field), Some(content.get(field)));
        }
    }

    /// Reset all five editors to empty.
    pub fn clear(&self) {
        for editor in self.editors.iter().flatten() {
            editor.clear();
        }
    }
}
