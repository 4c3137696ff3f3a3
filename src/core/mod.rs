//! Settings-to-command translation: loading `readme-settings.json`,
//! deriving converter parameters from it, and rendering the command line.
//! These are the pure building blocks consumed by the `api` module.
pub mod params;
pub mod render;
pub mod settings;
