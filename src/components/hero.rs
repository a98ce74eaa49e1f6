//! Landing page hero component

use maud::{Markup, html};

use super::icons;
use crate::backdrop;

/// Renders the full-viewport hero section
///
/// Project tagline and headline over the flowing-path backdrop, with
/// call-to-action buttons for the technical report and the project
/// repository. Two mirrored backdrop layers drift behind the text.
///
/// # Arguments
///
/// * `report_url`: External link for the technical report button
/// * `repo_url`: External link for the repository button
///
/// # Returns
///
/// Hero section markup
pub fn hero(report_url: &str, repo_url: &str) -> Markup {
    html! {
        section class="hero" {
            (backdrop::layer(1))
            (backdrop::layer(-1))

            div class="hero-content" {
                p class="hero-eyebrow" { "the l-mul algorithm" }
                h1 class="hero-title" {
                    "floating point multiplication,"
                    br;
                    span class="hero-accent" { "faster" }
                }
                div class="hero-actions" {
                    a href=(report_url) target="_blank" rel="noopener noreferrer" class="button button-primary" {
                        (icons::file_text(20))
                        " Read Technical Report"
                    }
                    a href=(repo_url) target="_blank" rel="noopener noreferrer" class="button button-outline" {
                        (icons::github(20))
                        " View on GitHub"
                    }
                }
            }
        }
    }
}
