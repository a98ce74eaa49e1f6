//! Citation superscripts and the footnote block relabeling.
//!
//! The technical report writes citation markers as plain superscripts.
//! Each one is turned into an in-page anchor link pointing at the
//! matching reference entry, and the footnote definitions block that
//! comrak emits at the end of the document is relabeled as a
//! "References" section.

/// Links every bare superscript to its citation anchor.
///
/// Scans the rendered HTML for `<sup>text</sup>` spans whose content is
/// plain text and rewrites them as links to `#citation-<text>`, where
/// `<text>` is the superscript's literal content. Superscripts that
/// carry attributes or contain nested markup (comrak's own footnote
/// references among them) pass through unchanged. The literal content
/// is not validated for numeric form or uniqueness.
///
/// # Arguments
///
/// * `html`: HTML from markdown conversion
///
/// # Returns
///
/// HTML with citation superscripts rewritten as anchor links
pub fn link_citations(html: &str) -> String {
    const OPEN: &str = "<sup>";
    const CLOSE: &str = "</sup>";

    let mut result = String::with_capacity(html.len());
    let mut pos = 0;

    while let Some(start) = html[pos..].find(OPEN) {
        let start = pos + start;
        let inner_start = start + OPEN.len();

        let Some(end) = html[inner_start..].find(CLOSE) else {
            break;
        };
        let inner_end = inner_start + end;
        let inner = &html[inner_start..inner_end];

        result.push_str(&html[pos..start]);

        if inner.is_empty() || inner.contains('<') {
            // Nested markup or empty marker: not a citation
            result.push_str(&html[start..inner_end + CLOSE.len()]);
        } else {
            result.push_str("<sup class=\"citation\"><a href=\"#citation-");
            result.push_str(inner);
            result.push_str("\">");
            result.push_str(inner);
            result.push_str("</a></sup>");
        }

        pos = inner_end + CLOSE.len();
    }

    result.push_str(&html[pos..]);
    result
}

/// Relabels the generated footnotes block as a References section.
///
/// Comrak emits footnote definitions inside a container marked with the
/// `footnotes` class. A "References" heading is inserted right after
/// that container's opening tag; the stylesheet separates the section
/// from preceding content. Blocks with any other class pass through
/// unmodified, as does a document without footnotes.
///
/// # Arguments
///
/// * `html`: HTML from markdown conversion
///
/// # Returns
///
/// HTML with the footnotes container relabeled
pub fn relabel_footnotes(html: &str) -> String {
    const MARKER: &str = "class=\"footnotes\"";
    const HEADING: &str = "<h2 class=\"references-title\">References</h2>";

    let Some(marker_pos) = html.find(MARKER) else {
        return html.to_string();
    };

    let Some(tag_end) = html[marker_pos..].find('>') else {
        return html.to_string();
    };
    let insert_at = marker_pos + tag_end + 1;

    let mut result = String::with_capacity(html.len() + HEADING.len());
    result.push_str(&html[..insert_at]);
    result.push_str(HEADING);
    result.push_str(&html[insert_at..]);
    result
}
