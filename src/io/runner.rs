//! Execution of the rendered converter command.
//!
//! `Executor` is the seam between the build flow and the operating system:
//! `ShellExecutor` hands the command line to the platform shell, while tests
//! substitute a fake backend. `run_command` interprets the captured result.
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::ExecOutput;

/// Exit status the shell uses when it cannot find the command
#[cfg(not(windows))]
const COMMAND_NOT_FOUND: i32 = 127;
#[cfg(windows)]
const COMMAND_NOT_FOUND: i32 = 9009;

/// Runs a command line to completion and captures its output.
pub trait Executor {
    fn execute(&self, command: &str, cwd: &Path) -> std::io::Result<ExecOutput>;
}

/// Runs commands through `sh -c` (`cmd /C` on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor;

impl Executor for ShellExecutor {
    fn execute(&self, command: &str, cwd: &Path) -> std::io::Result<ExecOutput> {
        let mut shell = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C");
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c");
            c
        };

        let output = shell
            .arg(command)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        Ok(ExecOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Run `command` in `cwd` and wait for it.
///
/// On success any stdout is echoed. A non-zero exit is logged as a warning
/// and returned as `Error::ConverterFailed` carrying the converter's exit
/// code and trimmed stderr. A child killed without an exit code is reported
/// as code 1.
pub fn run_command<E: Executor + ?Sized>(
    executor: &E,
    command: &str,
    cwd: &Path,
) -> Result<ExecOutput> {
    debug!("Executing in {:?}: {}", cwd, command);
    let output = executor
        .execute(command, cwd)
        .map_err(|source| Error::Launch {
            command: command.to_string(),
            source,
        })?;

    match output.code {
        Some(0) => {
            if !output.stdout.is_empty() {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(output.stdout.as_bytes())?;
                stdout.flush()?;
            }
            Ok(output)
        }
        Some(COMMAND_NOT_FOUND) => {
            warn!("Converter not found (exit code {})", COMMAND_NOT_FOUND);
            Err(Error::ConverterNotFound {
                command: command.to_string(),
                code: COMMAND_NOT_FOUND,
                stderr: output.stderr.trim().to_string(),
            })
        }
        code => {
            let code = code.unwrap_or(1);
            warn!("Converter exited with code {}", code);
            Err(Error::ConverterFailed {
                code,
                stderr: output.stderr.trim().to_string(),
            })
        }
    }
}
