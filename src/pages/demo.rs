//! Demo page generation

use maud::{Markup, html};

use crate::components::icons;
use crate::components::layout::{Theme, page_wrapper};
use crate::components::nav::ActivePage;
use crate::routes::Routes;

/// Explanatory text for the demo info panel.
const ABOUT_THE_DEMO: &str = "This demo shows our hardware accelerator in action. \
We have used the MNIST dataset to train a simple convolutional neural network to \
classify handwritten digits. The model is first run on our \u{201c}ground truth\u{201d} \
PyTorch implementation, then is run on our hardware simulator. You can experiment \
with different data types and multipliers to see how the hardware accelerator \
performs. Please be aware that the accelerator is not complete and the results \
are not representative of the final product.";

/// Generates the demo page embedding the external interactive demo
///
/// Dark-themed page with an expandable info panel above a full-width
/// iframe. The embedded demo is an opaque external collaborator; the
/// page only frames it.
///
/// # Arguments
///
/// * `routes`: URL builder for the deployed site
/// * `demo_url`: External demo application URL
///
/// # Returns
///
/// Complete HTML markup for the demo page
pub fn generate(routes: &Routes, demo_url: &str) -> Markup {
    page_wrapper(
        "Demo",
        routes,
        &["demo.css"],
        Theme::Dark,
        ActivePage::Demo,
        html! {
            section class="demo-section" {
                details class="demo-info" {
                    summary class="demo-info-toggle" {
                        (icons::info(16))
                        span class="sr-only" { "Page information" }
                    }
                    div class="demo-info-body" {
                        h2 { "About the Demo" }
                        p { (ABOUT_THE_DEMO) }
                    }
                }

                iframe class="demo-frame" src=(demo_url) title="Hardware accelerator demo" {}
            }
        },
    )
}
