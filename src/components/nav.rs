//! Fixed top navigation component

use maud::{Markup, html};

use crate::routes::Routes;

/// Page identifiers for active-link highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePage {
    Home,
    Demo,
    Team,
}

/// Nav entries in display order: page, route, label.
const LINKS: &[(ActivePage, &str, &str)] = &[
    (ActivePage::Home, "", "Home"),
    (ActivePage::Demo, "demo/", "Demo"),
    (ActivePage::Team, "team/", "Team"),
];

/// Renders the fixed translucent navigation header
///
/// Three centered links with the current page marked by an underline
/// element. Hrefs go through the route builder so the base path prefix
/// is applied.
///
/// # Arguments
///
/// * `routes`: URL builder for the deployed site
/// * `active`: Page currently being generated
///
/// # Returns
///
/// Header markup with the navigation list
pub fn site_nav(routes: &Routes, active: ActivePage) -> Markup {
    html! {
        header class="site-nav" {
            nav {
                ul class="nav-links" {
                    @for (page, route, label) in LINKS {
                        li class="nav-item" {
                            @if *page == active {
                                a href=(routes.page(route)) class="nav-link nav-active" { (label) }
                                span class="nav-marker" {}
                            } @else {
                                a href=(routes.page(route)) class="nav-link" { (label) }
                            }
                        }
                    }
                }
            }
        }
    }
}
