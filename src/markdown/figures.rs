//! Figure size directives embedded in image alt text.
//!
//! The technical report marks up figure sizing with a bracketed tag in
//! the image alt text (`![[large] Figure 1: results](chart.png)`). The
//! tag selects a fixed aspect-ratio container; the remaining alt text
//! becomes the visible caption.

use crate::routes::Routes;

/// Aspect-ratio preset for report figures.
///
/// Closed vocabulary resolved from the alt text directive. Unrecognized
/// or absent tags fall back to `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureSize {
    Small,
    Medium,
    Large,
}

impl FigureSize {
    /// Parses a directive tag (without brackets) case insensitively.
    ///
    /// # Arguments
    ///
    /// * `tag`: Inner text of a bracketed token from the alt text
    ///
    /// # Returns
    ///
    /// Matching size, or None for anything outside the vocabulary
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    /// CSS class selecting the fixed aspect-ratio container.
    pub fn aspect_class(&self) -> &'static str {
        match self {
            Self::Small => "figure-small",
            Self::Medium => "figure-medium",
            Self::Large => "figure-large",
        }
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::Medium
    }
}

/// Resolved figure directive: size plus cleaned caption text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureDirective {
    pub size: FigureSize,
    pub caption: String,
}

/// Extracts the size directive from image alt text.
///
/// Scans for bracketed tokens anywhere in the alt text and consumes the
/// first one whose inner text matches the size vocabulary. That token
/// (brackets included) is removed along with its surrounding
/// whitespace: a mid-text tag leaves a single space between the
/// flanking halves, and the result is trimmed at the ends. Later
/// tokens, recognized or not, stay in the caption as literal text.
///
/// # Arguments
///
/// * `alt`: Raw image alt text
///
/// # Returns
///
/// Directive with resolved size (Medium when no tag matched) and the
/// caption left after stripping the consumed tag
pub fn parse_alt(alt: &str) -> FigureDirective {
    let mut search = 0;

    while let Some(open) = alt[search..].find('[') {
        let open = search + open;
        let Some(close) = alt[open..].find(']') else {
            break;
        };
        let close = open + close;

        if let Some(size) = FigureSize::from_tag(&alt[open + 1..close]) {
            let before = alt[..open].trim();
            let after = alt[close + 1..].trim();
            let caption = if before.is_empty() || after.is_empty() {
                format!("{}{}", before, after)
            } else {
                format!("{} {}", before, after)
            };
            return FigureDirective { size, caption };
        }

        search = close + 1;
    }

    FigureDirective {
        size: FigureSize::default(),
        caption: alt.trim().to_string(),
    }
}

/// Rewrites every image tag into a fixed-aspect figure.
///
/// Scans the rendered HTML for `<img>` tags, resolves the alt text
/// directive, and replaces the tag with a `<figure>` carrying the
/// aspect class from the size lookup. Images load lazily and fill the
/// container width. The caption renders beneath the image only when
/// non-empty after stripping the directive. When routes are supplied,
/// relative image sources resolve against the deployed image directory.
///
/// # Arguments
///
/// * `html`: HTML from markdown conversion
/// * `routes`: Optional base-path resolver for image sources
///
/// # Returns
///
/// HTML with images wrapped in figure containers
pub fn render_figures(html: &str, routes: Option<&Routes>) -> String {
    const OPEN: &str = "<img ";

    let mut result = String::with_capacity(html.len());
    let mut pos = 0;

    while let Some(start) = html[pos..].find(OPEN) {
        let start = pos + start;

        let Some(tag_len) = html[start..].find('>') else {
            break;
        };
        let tag_end = start + tag_len + 1;
        let tag = &html[start..tag_end];

        result.push_str(&html[pos..start]);

        match attribute_value(tag, "src") {
            Some(src) => {
                let alt = attribute_value(tag, "alt").unwrap_or_default();
                let directive = parse_alt(alt);
                let src = match routes {
                    Some(routes) => routes.resolve_src(src),
                    None => src.to_string(),
                };

                result.push_str("<figure class=\"report-figure ");
                result.push_str(directive.size.aspect_class());
                result.push_str("\"><img src=\"");
                result.push_str(&src);
                result.push_str("\" alt=\"");
                result.push_str(&directive.caption);
                result.push_str("\" loading=\"lazy\">");
                if !directive.caption.is_empty() {
                    result.push_str("<figcaption>");
                    result.push_str(&directive.caption);
                    result.push_str("</figcaption>");
                }
                result.push_str("</figure>");
            }
            // No source: leave the tag as comrak wrote it
            None => result.push_str(tag),
        }

        pos = tag_end;
    }

    result.push_str(&html[pos..]);
    result
}

/// Extracts a double-quoted attribute value from a tag.
///
/// Values are comrak's entity-escaped output, so scanning for the
/// closing quote is safe.
fn attribute_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alt_leading_tag() {
        // Arrange & Act
        let directive = parse_alt("[large] Figure 1: results");

        // Assert
        assert_eq!(directive.size, FigureSize::Large);
        assert_eq!(directive.caption, "Figure 1: results");
    }

    #[test]
    fn test_parse_alt_case_insensitive() {
        // Arrange & Act
        let directive = parse_alt("[SMALL] latency plot");

        // Assert
        assert_eq!(directive.size, FigureSize::Small);
        assert_eq!(directive.caption, "latency plot");
    }

    #[test]
    fn test_parse_alt_tag_mid_text() {
        // Arrange: tag may appear anywhere in the alt text
        let directive = parse_alt("Figure 2 [medium] energy per op");

        // Act & Assert: the seam collapses to a single space
        assert_eq!(directive.size, FigureSize::Medium);
        assert_eq!(directive.caption, "Figure 2 energy per op");
    }

    #[test]
    fn test_parse_alt_mid_text_no_doubled_space() {
        // Arrange
        let directive = parse_alt("energy [small] per op");

        // Act & Assert
        assert_eq!(directive.size, FigureSize::Small);
        assert!(
            !directive.caption.contains("  "),
            "Tag removal must not leave doubled whitespace: {:?}",
            directive.caption
        );
        assert_eq!(directive.caption, "energy per op");
    }

    #[test]
    fn test_parse_alt_no_tag_defaults_medium() {
        // Arrange & Act
        let directive = parse_alt("  plain caption  ");

        // Assert
        assert_eq!(directive.size, FigureSize::Medium);
        assert_eq!(directive.caption, "plain caption");
    }

    #[test]
    fn test_parse_alt_unrecognized_tag_left_literal() {
        // Arrange & Act
        let directive = parse_alt("[huge] not a real size");

        // Assert: unknown token stays in caption, size defaults
        assert_eq!(directive.size, FigureSize::Medium);
        assert_eq!(directive.caption, "[huge] not a real size");
    }

    #[test]
    fn test_parse_alt_first_match_only() {
        // Arrange: only the first recognized tag is consumed
        let directive = parse_alt("[small] chart [large]");

        // Act & Assert
        assert_eq!(directive.size, FigureSize::Small);
        assert_eq!(directive.caption, "chart [large]");
    }

    #[test]
    fn test_parse_alt_skips_unrecognized_before_recognized() {
        // Arrange: unrecognized bracket token before a real tag
        let directive = parse_alt("[fig] overview [large]");

        // Act & Assert: first *recognized* tag wins
        assert_eq!(directive.size, FigureSize::Large);
        assert_eq!(directive.caption, "[fig] overview");
    }

    #[test]
    fn test_parse_alt_empty() {
        // Arrange & Act
        let directive = parse_alt("");

        // Assert
        assert_eq!(directive.size, FigureSize::Medium);
        assert_eq!(directive.caption, "");
    }

    #[test]
    fn test_parse_alt_tag_only() {
        // Arrange & Act
        let directive = parse_alt("[medium]");

        // Assert: nothing left for a caption
        assert_eq!(directive.size, FigureSize::Medium);
        assert_eq!(directive.caption, "");
    }

    #[test]
    fn test_aspect_class_lookup() {
        assert_eq!(FigureSize::Small.aspect_class(), "figure-small");
        assert_eq!(FigureSize::Medium.aspect_class(), "figure-medium");
        assert_eq!(FigureSize::Large.aspect_class(), "figure-large");
    }

    #[test]
    fn test_render_figures_basic() {
        // Arrange
        let html = "<p><img src=\"chart.png\" alt=\"[large] Figure 1: results\" /></p>";

        // Act
        let out = render_figures(html, None);

        // Assert
        assert!(
            out.contains("<figure class=\"report-figure figure-large\">"),
            "Should use the large aspect class: {}",
            out
        );
        assert!(
            out.contains("<figcaption>Figure 1: results</figcaption>"),
            "Caption should have the tag stripped: {}",
            out
        );
        assert!(out.contains("loading=\"lazy\""), "Images load lazily");
    }

    #[test]
    fn test_render_figures_no_tag_defaults_medium() {
        // Arrange
        let html = "<img src=\"a.png\" alt=\"just a caption\" />";

        // Act
        let out = render_figures(html, None);

        // Assert
        assert!(out.contains("figure-medium"), "Default size: {}", out);
        assert!(out.contains("<figcaption>just a caption</figcaption>"));
    }

    #[test]
    fn test_render_figures_empty_alt_no_caption() {
        // Arrange
        let html = "<img src=\"a.png\" alt=\"\" />";

        // Act
        let out = render_figures(html, None);

        // Assert
        assert!(out.contains("figure-medium"), "Defaults to medium");
        assert!(
            !out.contains("figcaption"),
            "Empty alt renders no caption: {}",
            out
        );
    }

    #[test]
    fn test_render_figures_resolves_relative_src() {
        // Arrange
        let routes = Routes::new("/site");
        let html = "<img src=\"chart.png\" alt=\"x\" />";

        // Act
        let out = render_figures(html, Some(&routes));

        // Assert
        assert!(
            out.contains("src=\"/site/images/chart.png\""),
            "Relative source resolves against the image directory: {}",
            out
        );
    }

    #[test]
    fn test_render_figures_absolute_src_unchanged() {
        // Arrange
        let routes = Routes::new("/site");
        let html = "<img src=\"https://cdn.example.com/a.png\" alt=\"\" />";

        // Act
        let out = render_figures(html, Some(&routes));

        // Assert
        assert!(out.contains("src=\"https://cdn.example.com/a.png\""));
    }

    #[test]
    fn test_render_figures_surrounding_html_preserved() {
        // Arrange
        let html = "<p>before</p><img src=\"a.png\" alt=\"\" /><p>after</p>";

        // Act
        let out = render_figures(html, None);

        // Assert
        assert!(out.starts_with("<p>before</p><figure"));
        assert!(out.ends_with("</figure><p>after</p>"));
    }

    #[test]
    fn test_unclosed_bracket() {
        // Arrange & Act
        let directive = parse_alt("[small chart");

        // Assert: unterminated token is not a directive
        assert_eq!(directive.size, FigureSize::Medium);
        assert_eq!(directive.caption, "[small chart");
    }
}
