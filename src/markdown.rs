//! Markdown rendering for the technical report.
//!
//! Comrak handles parsing with GFM extensions. The report's two content
//! conventions sit on top as post-passes: figure size directives in
//! image alt text, and citation superscripts linked to a References
//! section built from the footnote block.

mod citations;
mod code;
mod elements;
mod figures;
mod renderer;

pub use figures::{FigureDirective, FigureSize, parse_alt};
pub use renderer::MarkdownRenderer;
