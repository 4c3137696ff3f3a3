use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot determine working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("Working directory does not exist: {dir}")]
    MissingWorkingDir { dir: String },

    #[error(transparent)]
    Core(#[from] readme_builder::Error),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Core(e) => e.exit_code(),
            _ => 1,
        }
    }
}
