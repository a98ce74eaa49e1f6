//! Page generation modules for the three site views
//!
//! Each page module produces one complete HTML document through the
//! shared layout wrapper, using components from the components module.

pub mod demo;
pub mod home;
pub mod team;
