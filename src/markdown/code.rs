//! Syntax highlighting for fenced code blocks in the report.

use anyhow::{Context, Result};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Highlights every `<code class="language-*">` block in rendered HTML.
///
/// Comrak emits fenced blocks with a language class and escaped plain
/// text content. This pass decodes the content, runs it through syntect
/// with CSS-class output (`hljs-` prefix), and splices the highlighted
/// markup back in place. Blocks with an unknown language keep their
/// escaped plain text.
///
/// # Arguments
///
/// * `html`: HTML from markdown conversion
/// * `syntax_set`: Loaded syntax definitions
///
/// # Returns
///
/// HTML with highlighted code blocks
///
/// # Errors
///
/// Returns error if syntect fails to parse a line
pub fn highlight_blocks(html: &str, syntax_set: &SyntaxSet) -> Result<String> {
    const PREFIX: &str = "<code class=\"language-";
    const CLOSE: &str = "</code>";

    let mut result = String::with_capacity(html.len());
    let mut last_end = 0;
    let mut search = 0;

    while let Some(found) = html[search..].find(PREFIX) {
        let block_start = search + found;
        let lang_start = block_start + PREFIX.len();

        let Some(lang_len) = html[lang_start..].find('"') else {
            search = block_start + 1;
            continue;
        };
        let language = &html[lang_start..lang_start + lang_len];

        let Some(tag_close) = html[lang_start..].find('>') else {
            search = block_start + 1;
            continue;
        };
        let content_start = lang_start + tag_close + 1;

        let Some(content_len) = html[content_start..].find(CLOSE) else {
            search = block_start + 1;
            continue;
        };
        let content_end = content_start + content_len;

        let code = decode_entities(&html[content_start..content_end]);

        result.push_str(&html[last_end..content_start]);
        let highlighted = highlight_one(&code, language, syntax_set)
            .with_context(|| format!("Failed to highlight {} code block", language))?;
        result.push_str(&highlighted);
        result.push_str(CLOSE);

        last_end = content_end + CLOSE.len();
        search = last_end;
    }

    result.push_str(&html[last_end..]);
    Ok(result)
}

/// Highlights a single block, falling back to escaped text for unknown
/// languages.
fn highlight_one(code: &str, language: &str, syntax_set: &SyntaxSet) -> Result<String> {
    if code.is_empty() {
        return Ok(String::new());
    }

    let syntax = syntax_set
        .find_syntax_by_token(language)
        .or_else(|| syntax_set.find_syntax_by_extension(language));

    let Some(syntax) = syntax else {
        return Ok(escape_entities(code));
    };

    let mut generator = ClassedHTMLGenerator::new_with_class_style(
        syntax,
        syntax_set,
        ClassStyle::SpacedPrefixed { prefix: "hljs-" },
    );

    for line in LinesWithEndings::from(code) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .context("Failed to parse line for syntax highlighting")?;
    }

    Ok(generator.finalize())
}

/// Reverses comrak's entity escaping inside code block content.
fn decode_entities(html: &str) -> String {
    html.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

/// Escapes HTML special characters for the plain text fallback.
fn escape_entities(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
