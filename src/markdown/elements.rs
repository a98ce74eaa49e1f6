//! Per-element style policy for rendered report HTML.
//!
//! Comrak emits bare tags; the report's typography is driven by a fixed
//! element-to-class table applied as a post-pass. Elements without an
//! entry keep comrak's default rendering.

/// Element name to CSS class table.
///
/// Heading levels 1-3 get distinct styles; level 4 shares the level 3
/// style. Tables get the bordered zebra-striped treatment.
const ELEMENT_CLASSES: &[(&str, &str)] = &[
    ("h1", "report-h1"),
    ("h2", "report-h2"),
    ("h3", "report-h3"),
    ("h4", "report-h3"),
    ("p", "report-p"),
    ("ul", "report-list"),
    ("ol", "report-list report-ordered"),
    ("li", "report-item"),
    ("a", "report-link"),
    ("table", "report-table"),
    ("thead", "report-thead"),
    ("tbody", "report-tbody"),
    ("tr", "report-tr"),
    ("th", "report-th"),
    ("td", "report-td"),
];

/// Looks up the style class for an element name.
fn class_for(tag: &str) -> Option<&'static str> {
    ELEMENT_CLASSES
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, class)| *class)
}

/// Injects style classes into opening tags per the element table.
///
/// Scans the HTML for opening tags whose names appear in the lookup
/// table and inserts the class attribute right after the tag name.
/// Closing tags, comments, tags outside the table, and tags that
/// already carry a class attribute (comrak's footnote backrefs among
/// them) pass through. Other attributes and children survive unchanged.
///
/// # Arguments
///
/// * `html`: HTML from markdown conversion
///
/// # Returns
///
/// HTML with style classes applied
pub fn apply_element_classes(html: &str) -> String {
    let mut result = String::with_capacity(html.len() + html.len() / 4);
    let bytes = html.as_bytes();
    let mut pos = 0;

    while let Some(lt) = html[pos..].find('<') {
        let lt = pos + lt;
        result.push_str(&html[pos..lt]);

        let name_start = lt + 1;
        let mut name_end = name_start;
        while name_end < bytes.len() && bytes[name_end].is_ascii_alphanumeric() {
            name_end += 1;
        }

        // Opening tags only: name must exist and end at '>' or whitespace
        let is_open = name_end > name_start
            && name_end < bytes.len()
            && (bytes[name_end] == b'>' || bytes[name_end].is_ascii_whitespace());

        if is_open && !has_class_attribute(html, name_end) {
            if let Some(class) = class_for(&html[name_start..name_end]) {
                result.push_str(&html[lt..name_end]);
                result.push_str(" class=\"");
                result.push_str(class);
                result.push('"');
                pos = name_end;
                continue;
            }
        }

        result.push_str(&html[lt..name_end]);
        pos = name_end;
    }

    result.push_str(&html[pos..]);
    result
}

/// True when the tag whose attributes start at `attrs_start` already
/// carries a class attribute. Injecting a second one would be invalid
/// HTML and browsers would drop the original.
fn has_class_attribute(html: &str, attrs_start: usize) -> bool {
    let rest = &html[attrs_start..];
    let attrs_end = rest.find('>').unwrap_or(rest.len());
    rest[..attrs_end].contains(" class=\"")
}

/// Wraps every table in a horizontally scrollable container.
///
/// Wide result tables in the report overflow narrow viewports; the
/// wrapper scrolls horizontally instead of breaking the page layout.
///
/// # Arguments
///
/// * `html`: HTML with table tags (classes already applied)
///
/// # Returns
///
/// HTML with each table inside a `table-scroll` container
pub fn wrap_tables(html: &str) -> String {
    const OPEN: &str = "<table";
    const CLOSE: &str = "</table>";

    let mut result = String::with_capacity(html.len());
    let mut pos = 0;

    while let Some(start) = html[pos..].find(OPEN) {
        let start = pos + start;

        let Some(end) = html[start..].find(CLOSE) else {
            break;
        };
        let end = start + end + CLOSE.len();

        result.push_str(&html[pos..start]);
        result.push_str("<div class=\"table-scroll\">");
        result.push_str(&html[start..end]);
        result.push_str("</div>");

        pos = end;
    }

    result.push_str(&html[pos..]);
    result
}
