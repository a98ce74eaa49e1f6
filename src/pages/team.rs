//! Team roster page generation

use maud::{Markup, html};

use crate::components::layout::{Theme, page_wrapper};
use crate::components::nav::ActivePage;
use crate::components::person::person_card;
use crate::routes::Routes;
use crate::team;

/// Generates the team page: mentor section plus the member grid
///
/// # Arguments
///
/// * `routes`: URL builder for the deployed site
///
/// # Returns
///
/// Complete HTML markup for the team page
pub fn generate(routes: &Routes) -> Markup {
    page_wrapper(
        "Team",
        routes,
        &["team.css"],
        Theme::Dark,
        ActivePage::Team,
        html! {
            section class="team-section" {
                div class="team-group" {
                    h2 class="team-heading" { "Our Mentor" }
                    (person_card(team::mentor(), routes))
                }

                div class="team-group" {
                    h2 class="team-heading" { "Our Team" }
                    div class="team-grid" {
                        @for person in team::members() {
                            (person_card(person, routes))
                        }
                    }
                }
            }
        },
    )
}
