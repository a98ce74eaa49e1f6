//! Procedural SVG backdrop for the hero section.
//!
//! Two mirrored layers of flowing cubic bezier strokes drift behind the
//! hero text. Geometry is fully deterministic so repeated builds emit
//! identical markup; motion comes from CSS keyframes on the stroke
//! dash offset.

use maud::{Markup, PreEscaped, html};

/// Number of strokes per layer.
const PATH_COUNT: i32 = 36;

/// Generates one layer of flowing paths as an SVG string.
///
/// Successive strokes shift diagonally and widen slightly, producing a
/// layered current across the viewbox. `direction` mirrors the drift
/// horizontally; the two layers use +1 and -1.
///
/// # Arguments
///
/// * `direction`: Horizontal drift sign (1 or -1)
/// * `size`: Rendered width/height hint in CSS pixels
pub fn flowing_paths_svg(direction: i32, size: u32) -> String {
    let mut paths = String::new();

    for i in 0..PATH_COUNT {
        let drift = i * 5 * direction;
        let x0 = -(380 - drift);
        let y0 = -(189 + i * 6);
        let x1 = -(312 - drift);
        let y1 = 216 - i * 6;
        let x2 = 152 - drift;
        let y2 = 343 - i * 6;
        let x3 = 616 - drift;
        let y3 = 470 - i * 6;
        let x4 = 684 - drift;
        let y4 = 875 - i * 6;

        let width = 0.5 + i as f32 * 0.03;
        let opacity = (0.15 + i as f32 * 0.04).min(1.0);
        // Staggered durations keep neighboring strokes out of phase
        let duration = 20 + i % 10;

        paths.push_str(&format!(
            r#"<path class="hero-path" d="M{x0} {y0}C{x0} {y0} {x1} {y1} {x2} {y2}C{x3} {y3} {x4} {y4} {x4} {y4}" stroke="currentColor" stroke-width="{width:.2}" stroke-opacity="{opacity:.2}" style="animation-duration:{duration}s"/>"#
        ));
    }

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 696 316" fill="none" aria-hidden="true">{paths}</svg>"#
    )
}

/// Renders one backdrop layer element.
pub fn layer(direction: i32) -> Markup {
    html! {
        div class="hero-backdrop" {
            (PreEscaped(flowing_paths_svg(direction, 696)))
        }
    }
}
