//! Shared types used across the crate.
//! Includes the resolved run `Mode` and the `ExecOutput` returned by an
//! execution backend.

/// What a single invocation does, resolved once from the command line.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Mode {
    /// Scaffold a project from the bundled template. `name` is the folder
    /// to create under the working directory; without it the working
    /// directory itself is scaffolded.
    Init { name: Option<String> },
    /// Load the settings file and run the converter.
    Build,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Init { name: Some(name) } => write!(f, "init ({})", name),
            Mode::Init { name: None } => write!(f, "init"),
            Mode::Build => write!(f, "build"),
        }
    }
}

/// Captured result of a finished child process.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ExecOutput {
    /// Exit code; `None` if the child was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}
