//! Inline SVG icons.
//!
//! Feather-style stroke icons embedded directly in the markup so the
//! exported site carries no icon font dependency.

use maud::{Markup, PreEscaped, html};

/// Wraps icon path data in a standard stroke-icon svg element.
fn icon(paths: &str, size: u32) -> Markup {
    html! {
        (PreEscaped(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{paths}</svg>"#
        )))
    }
}

/// GitHub mark.
pub fn github(size: u32) -> Markup {
    icon(
        r#"<path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/>"#,
        size,
    )
}

/// LinkedIn glyph.
pub fn linkedin(size: u32) -> Markup {
    icon(
        r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/>"#,
        size,
    )
}

/// Twitter bird.
pub fn twitter(size: u32) -> Markup {
    icon(
        r#"<path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-10.9a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"/>"#,
        size,
    )
}

/// Document with text lines.
pub fn file_text(size: u32) -> Markup {
    icon(
        r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><polyline points="14 2 14 8 20 8"/><line x1="16" y1="13" x2="8" y2="13"/><line x1="16" y1="17" x2="8" y2="17"/><polyline points="10 9 9 9 8 9"/>"#,
        size,
    )
}

/// Circled information mark.
pub fn info(size: u32) -> Markup {
    icon(
        r#"<circle cx="12" cy="12" r="10"/><line x1="12" y1="16" x2="12" y2="12"/><line x1="12" y1="8" x2="12.01" y2="8"/>"#,
        size,
    )
}
