//! Technical report rendering pipeline.

use anyhow::Result;
use comrak::Options;
use syntect::parsing::SyntaxSet;

use super::citations::{link_citations, relabel_footnotes};
use super::code::highlight_blocks;
use super::elements::{apply_element_classes, wrap_tables};
use super::figures::render_figures;
use crate::routes::Routes;

/// Renders the technical report markdown to styled HTML.
///
/// Comrak handles the markdown-to-HTML conversion with GFM extensions
/// (tables, strikethrough, autolinks, footnotes, superscript); a series
/// of post-passes then applies the report's presentation conventions:
/// the per-element style policy, citation superscript linking, figure
/// size directives, the References relabeling of the footnote block,
/// and syntect code highlighting. Rendering is a pure function of the
/// document text; no state survives between calls.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
    routes: Option<Routes>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates a renderer with the report's markdown options.
    ///
    /// Configures GFM extensions plus the superscript extension used by
    /// citation markers, smart punctuation, and raw HTML passthrough
    /// (report content is trusted).
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.footnotes = true;
        options.extension.superscript = true;

        options.parse.smart = true;

        // Trusted content: raw HTML passes through
        options.render.unsafe_ = true;

        let syntax_set = SyntaxSet::load_defaults_newlines();

        Self {
            options,
            syntax_set,
            routes: None,
        }
    }

    /// Creates a renderer that resolves image sources for deployment.
    ///
    /// Relative image references in the report resolve against the
    /// deployed image directory under the configured base path.
    ///
    /// # Arguments
    ///
    /// * `routes`: URL builder for the deployed site
    pub fn with_routes(routes: Routes) -> Self {
        let mut renderer = Self::new();
        renderer.routes = Some(routes);
        renderer
    }

    /// Renders the document text to HTML.
    ///
    /// Unrecognized markdown constructs keep comrak's default
    /// rendering; nothing in the document itself can fail the render.
    ///
    /// # Arguments
    ///
    /// * `content`: Raw markdown text of the report
    ///
    /// # Returns
    ///
    /// Styled HTML string
    ///
    /// # Errors
    ///
    /// Returns error only if syntax highlighting fails
    pub fn render(&self, content: &str) -> Result<String> {
        let html = comrak::markdown_to_html(content, &self.options);

        let html = apply_element_classes(&html);
        let html = wrap_tables(&html);
        let html = link_citations(&html);
        let html = render_figures(&html, self.routes.as_ref());
        let html = relabel_footnotes(&html);

        highlight_blocks(&html, &self.syntax_set)
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
