//! Reusable HTML components for page generation
//!
//! Maud component functions shared across the three site pages. Each
//! component owns one UI element with consistent styling so the page
//! generators stay declarative.

pub mod footer;
pub mod hero;
pub mod icons;
pub mod layout;
pub mod nav;
pub mod person;
