//! Command Line Interface (CLI) layer for readme-builder.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the init and build flows. It
//! wires user-provided options to `readme_builder::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
