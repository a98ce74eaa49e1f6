//! Landing page generation

use maud::{Markup, PreEscaped, html};

use crate::components::hero::hero;
use crate::components::layout::{Theme, page_wrapper};
use crate::components::nav::ActivePage;
use crate::content::ContentState;
use crate::routes::Routes;

/// Data container for landing page generation
pub struct HomePageData<'a> {
    pub routes: &'a Routes,
    pub report_url: &'a str,
    pub repo_url: &'a str,
    /// Report panel state. `Loaded` carries rendered HTML, not raw
    /// markdown; `Failed` carries the load failure reason.
    pub report: &'a ContentState,
}

/// Generates the landing page: hero section plus the report panel
///
/// The report panel renders exactly one of the three content states.
/// On failure the panel shows the reason and nothing else; no stale
/// or partial report content ever appears.
///
/// # Arguments
///
/// * `data`: Landing page data container
///
/// # Returns
///
/// Complete HTML markup for the landing page
pub fn generate(data: HomePageData<'_>) -> Markup {
    page_wrapper(
        "Home",
        data.routes,
        &["home.css", "markdown.css"],
        Theme::Light,
        ActivePage::Home,
        html! {
            (hero(data.report_url, data.repo_url))

            section class="report-section" {
                div class="report-panel" {
                    @match data.report {
                        ContentState::Loading => {
                            div class="report-loading" {
                                p { "Loading content..." }
                            }
                        }
                        ContentState::Failed(reason) => {
                            div class="report-error" {
                                p { "Error loading content: " (reason) }
                            }
                        }
                        ContentState::Loaded(rendered) => {
                            article class="report-content" {
                                (PreEscaped(rendered))
                            }
                        }
                    }
                }
            }
        },
    )
}
