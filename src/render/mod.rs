//! Template renderer: maps a layout id plus résumé data to an HTML document.
//!
//! Rendering is total over all layout-id strings — anything unrecognized
//! falls back to `layout-1` — and total over all documents: empty sections
//! render a human-readable placeholder instead of disappearing or failing.

use crate::resume::ResumeData;

mod classic;
mod creative;
mod modern;

pub use classic::Classic;
pub use creative::Creative;
pub use modern::Modern;

pub const DEFAULT_LAYOUT: &str = "layout-1";

/// A layout variant. All variants consume the identical data shape and are
/// pure: same (layout, data) always yields the same document.
pub trait Layout: Send + Sync {
    fn id(&self) -> &'static str;
    fn render(&self, data: &ResumeData) -> String;
}

/// Resolves a layout id, falling back to the classic variant for anything
/// unrecognized.
pub fn layout_for(id: &str) -> &'static dyn Layout {
    match id {
        "layout-2" => &Modern,
        "layout-3" => &Creative,
        _ => &Classic,
    }
}

pub fn render(layout_id: &str, data: &ResumeData) -> String {
    layout_for(layout_id).render(data)
}

/// Minimal HTML escaping for user-supplied text.
pub(crate) fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped field value, or the placeholder when the field is absent/blank.
pub(crate) fn text_or<'a>(value: &'a Option<String>, placeholder: &'a str) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => esc(v),
        _ => placeholder.to_string(),
    }
}

/// Escaped field value, or empty output when absent.
pub(crate) fn text(value: &Option<String>) -> String {
    value.as_deref().map(esc).unwrap_or_default()
}
