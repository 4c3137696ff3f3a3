use std::path::{Path, PathBuf};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use readme_builder::{Mode, ShellExecutor, build_project, init_project, render_build_command};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    // Converter output owns stdout; diagnostics go to stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_working_dir(dir: Option<&Path>) -> Result<PathBuf, AppError> {
    let current = std::env::current_dir().map_err(AppError::WorkingDir)?;
    let cwd = match dir {
        Some(dir) => current.join(dir),
        None => current,
    };
    if !cwd.is_dir() {
        return Err(AppError::MissingWorkingDir {
            dir: cwd.display().to_string(),
        });
    }
    Ok(cwd)
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.log);

    let cwd = resolve_working_dir(args.dir.as_deref())?;
    let mode = args.mode();
    debug!("Mode: {}, working directory: {:?}", mode, cwd);

    match mode {
        Mode::Init { name } => {
            let target = init_project(&cwd, name.as_deref())?;
            info!("Project ready in {:?}", target);
        }
        Mode::Build if args.dry_run => {
            let command = render_build_command(&cwd, &args.settings)?;
            println!("{}", command);
        }
        Mode::Build => {
            build_project(&cwd, &args.settings, &ShellExecutor)?;
            info!("Successfully built project in {:?}", cwd);
        }
    }

    Ok(())
}
