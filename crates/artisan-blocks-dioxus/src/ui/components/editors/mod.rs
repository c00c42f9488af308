//! Per-tag sub-editors. Each one is handed its block's current payload and
//! reports every change as a complete replacement payload.

pub mod gallery;
pub mod list;
pub mod markup;
pub mod media;
pub mod product;
pub mod text;
pub mod unsupported;

pub use gallery::GalleryEditor;
pub use list::ListEditor;
pub use markup::{EmbedEditor, HtmlEditor};
pub use media::{ImageEditor, VideoEditor};
pub use product::ProductEditor;
pub use text::{HeadingEditor, ParagraphEditor, QuoteEditor};
pub use unsupported::UnsupportedNotice;

/// Empty optional fields are stored as absent
pub(crate) fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Rows for a textarea holding this text, capped at 20
pub(crate) fn calculate_textarea_rows(content: &str) -> u32 {
    let line_count = content.lines().count().max(1);
    (line_count as u32).min(20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_textarea_rows() {
        assert_eq!(calculate_textarea_rows("Single line"), 1);
        assert_eq!(calculate_textarea_rows("Line 1\nLine 2\nLine 3"), 3);
        assert_eq!(calculate_textarea_rows(""), 1);
        assert_eq!(calculate_textarea_rows(&"Line\n".repeat(30)), 20);
    }

    #[test]
    fn test_optional() {
        assert_eq!(optional(String::new()), None);
        assert_eq!(optional("  ".to_string()), None);
        assert_eq!(optional("Studio".to_string()), Some("Studio".to_string()));
    }
}
