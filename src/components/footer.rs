//! Site footer component

use maud::{Markup, html};

/// Renders the shared copyright footer.
pub fn site_footer() -> Markup {
    html! {
        footer class="site-footer" {
            p {
                "© UC San Diego, Kai Breese, Justin Chou, Katelyn Abille, "
                "Lukas Fullner, Rajesh Gupta. All rights reserved."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_names_the_team() {
        // Arrange & Act
        let html = site_footer().into_string();

        // Assert
        assert!(html.contains("UC San Diego"));
        assert!(html.contains("All rights reserved"));
    }
}
