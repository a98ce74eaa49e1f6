//! Team member card component

use maud::{Markup, html};

use super::icons;
use crate::routes::Routes;
use crate::team::Person;

/// Renders one team member card
///
/// Photo on the left, role/name/bio on the right, with social links
/// rendered only for the profiles the person actually has.
///
/// # Arguments
///
/// * `person`: Roster record to render
/// * `routes`: URL builder for the photo path
///
/// # Returns
///
/// Card markup for the team page grid
pub fn person_card(person: &Person, routes: &Routes) -> Markup {
    html! {
        div class="person-card" {
            img class="person-photo" src=(routes.image(person.image)) alt=(person.name) loading="lazy";
            div class="person-body" {
                div class="person-role" { (person.role) }
                h3 class="person-name" { (person.name) }
                p class="person-bio" { (person.bio) }
                div class="person-socials" {
                    @if let Some(url) = person.socials.twitter {
                        a href=(url) target="_blank" rel="noopener noreferrer" class="social-link" {
                            (icons::twitter(20))
                        }
                    }
                    @if let Some(url) = person.socials.linkedin {
                        a href=(url) target="_blank" rel="noopener noreferrer" class="social-link" {
                            (icons::linkedin(20))
                        }
                    }
                    @if let Some(url) = person.socials.github {
                        a href=(url) target="_blank" rel="noopener noreferrer" class="social-link" {
                            (icons::github(20))
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::Socials;

    fn sample() -> Person {
        Person {
            name: "Ada Lovelace",
            role: "Analyst",
            image: "ada.jpg",
            bio: "First programmer.",
            socials: Socials {
                twitter: None,
                linkedin: Some("https://linkedin.example/ada"),
                github: Some("https://github.example/ada"),
            },
        }
    }

    #[test]
    fn test_card_content() {
        // Arrange
        let routes = Routes::new("/site");

        // Act
        let html = person_card(&sample(), &routes).into_string();

        // Assert
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("Analyst"));
        assert!(html.contains("First programmer."));
        assert!(
            html.contains("src=\"/site/images/ada.jpg\""),
            "Photo path goes through routes: {}",
            html
        );
    }

    #[test]
    fn test_only_present_socials_rendered() {
        // Arrange
        let routes = Routes::new("");

        // Act
        let html = person_card(&sample(), &routes).into_string();

        // Assert
        assert_eq!(
            html.matches("social-link").count(),
            2,
            "Twitter absent, LinkedIn and GitHub present: {}",
            html
        );
        assert!(html.contains("https://linkedin.example/ada"));
        assert!(html.contains("https://github.example/ada"));
    }
}
