//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::site_footer;
use super::nav::{ActivePage, site_nav};
use crate::routes::Routes;

/// Color scheme applied to one generated document.
///
/// Passed explicitly per page rather than toggled globally: each
/// document carries its own body class, so a dark page (the demo)
/// cannot leak its scheme into the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Body class selecting the scheme.
    pub fn body_class(&self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }
}

/// Wraps page content with the standard HTML structure
///
/// Provides DOCTYPE, head metadata, stylesheet links, the fixed
/// navigation header, and the shared footer. The caller provides the
/// page-specific body content.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `routes`: URL builder for stylesheet and navigation hrefs
/// * `stylesheets`: CSS asset names to include
/// * `theme`: Color scheme for this document
/// * `active`: Navigation entry to highlight
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(
    title: &str,
    routes: &Routes,
    stylesheets: &[&str],
    theme: Theme,
    active: ActivePage,
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Hardware Accelerators" }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(routes.asset(stylesheet));
                }
            }
            body class=(theme.body_class()) {
                (site_nav(routes, active))
                main {
                    (body)
                }
                (site_footer())
            }
        }
    }
}
