//! readme-builder CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, dispatch to the init or
//! build flow, and exit with the converter's status on failure.
//! For programmatic use, prefer the library API (`readme_builder::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
