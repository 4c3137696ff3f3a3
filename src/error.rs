//! Crate-level error type and `Result` alias.
//! Separates configuration problems (missing or malformed settings), input
//! problems (nothing to convert) and the three ways running the converter
//! can go wrong: the shell could not be spawned, the converter could not be
//! found, or the converter exited non-zero.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Settings file not found: {}", .path.display())]
    SettingsNotFound { path: PathBuf },

    #[error("Invalid settings file {}: {source}", .path.display())]
    InvalidSettings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No source files found in {}", .dir.display())]
    EmptySource { dir: PathBuf },

    #[error("Failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Converter not found while running `{command}` (exit code {code}): {stderr}")]
    ConverterNotFound {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Converter exited with code {code}: {stderr}")]
    ConverterFailed { code: i32, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for this error. A failed conversion reports the
    /// converter's own code; anything else is a generic failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::ConverterFailed { code, .. } | Error::ConverterNotFound { code, .. } => {
                u8::try_from(*code)
                .ok()
                .filter(|c| *c != 0)
                    .unwrap_or(1)
            }
            _ => 1,
        }
    }
}
