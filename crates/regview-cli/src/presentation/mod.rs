//! Everything that paints view models: plain/JSON console output and the
//! terminal UI.

pub mod formatters;
pub mod renderers;
pub mod view_models;
pub mod views;
