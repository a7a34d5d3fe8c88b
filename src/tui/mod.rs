//! Terminal presentation layer.

pub mod components;
pub mod theme;
pub mod ui;
