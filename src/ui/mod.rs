//! Console UI: design tokens and render helpers.

pub mod theme;
pub mod views;
