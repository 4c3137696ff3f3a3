//! High-level library API: the build and init flows as plain functions.
//! Every entry point takes the working directory explicitly, so callers (and
//! tests) can point it anywhere without touching the process state.
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::params::ConversionParameters;
use crate::core::settings::Settings;
use crate::error::Result;
use crate::io::runner::{Executor, run_command};
use crate::io::template::{set_project_name, write_template};
use crate::types::ExecOutput;

/// Load settings from `settings_path` (relative paths resolve against
/// `cwd`) and render the converter command line.
pub fn render_build_command(cwd: &Path, settings_path: &Path) -> Result<String> {
    let settings = Settings::load(&cwd.join(settings_path))?;
    render_command(&settings, cwd)
}

/// Render the converter command line for already loaded settings.
pub fn render_command(settings: &Settings, cwd: &Path) -> Result<String> {
    Ok(ConversionParameters::from_settings(settings, cwd)?.render())
}

/// Build the project in `cwd`: load settings, render the command, run it
/// with `executor` and wait for it to finish.
pub fn build_project<E: Executor + ?Sized>(
    cwd: &Path,
    settings_path: &Path,
    executor: &E,
) -> Result<ExecOutput> {
    let command = render_build_command(cwd, settings_path)?;
    info!("Running: {}", command);
    let output = run_command(executor, &command, cwd)?;
    info!("Build finished");
    Ok(output)
}

/// Scaffold a project from the bundled template.
///
/// With `name`, the project goes into `<cwd>/<name>`; otherwise `cwd` itself
/// is scaffolded. The copied settings get `project` set to the target's
/// folder name. Returns the target directory.
pub fn init_project(cwd: &Path, name: Option<&str>) -> Result<PathBuf> {
    let target = match name {
        Some(name) => cwd.join(name),
        None => cwd.to_path_buf(),
    };

    write_template(&target)?;

    let project = project_name(&target);
    set_project_name(&target, &project)?;
    info!("Initialized project {:?} in {:?}", project, target);
    Ok(target)
}

/// Folder name of `target`, resolving `.`/`..` through the filesystem.
fn project_name(target: &Path) -> String {
    let resolved;
    let path = if target.file_name().is_some() {
        target
    } else {
        resolved = target.canonicalize().unwrap_or_else(|_| target.to_path_buf());
        resolved.as_path()
    };
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string())
}
