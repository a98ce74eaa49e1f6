//! Static site generator for the hardware-accelerators research project.

mod assets;
pub mod backdrop;
pub mod components;
mod config;
mod content;
mod markdown;
pub mod pages;
mod routes;
pub mod team;

pub use assets::write_css_assets;
pub use config::Config;
pub use content::{ContentState, load_report};
pub use markdown::{FigureDirective, FigureSize, MarkdownRenderer, parse_alt};
pub use routes::Routes;
