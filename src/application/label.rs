//! Option label decoration.
//!
//! Authors often start labels with an emoji or symbol ("🎨 Art and design").
//! Presenters show that glyph separately from the text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading symbols, optional spacing, then the label text.
///
/// Joiners and variation selectors count as part of the glyph so composed
/// emoji such as "👩‍🏫" or "❤️" stay whole.
static LABEL_GLYPH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((?:[^\w\s]|[\x{200D}\x{FE0E}\x{FE0F}])+)\s*(.+)$")
        .unwrap_or_else(|e| unreachable!("label glyph pattern: {e}"))
});

/// Splits a leading run of symbol characters from the rest of a label.
///
/// Returns `(None, label)` when the label has no leading glyph or consists
/// of nothing but one.
pub fn split_label_glyph(label: &str) -> (Option<&str>, &str) {
    match LABEL_GLYPH.captures(label) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(glyph), Some(text)) if !text.as_str().trim().is_empty() => {
                (Some(glyph.as_str()), text.as_str())
            }
            _ => (None, label),
        },
        None => (None, label),
    }
}
