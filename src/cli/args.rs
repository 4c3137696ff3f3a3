use clap::Parser;
use std::path::PathBuf;

use readme_builder::{Mode, SETTINGS_FILE};

#[derive(Parser, Debug)]
#[command(
    name = "readme-builder",
    version,
    about = "Build a documentation project with pandoc from readme-settings.json"
)]
pub struct CliArgs {
    /// Build the project in the working directory (default)
    #[arg(short, long, default_value_t = true, conflicts_with = "init")]
    pub build: bool,

    /// Scaffold a new project from the bundled template
    #[arg(short, long, default_value_t = false)]
    pub init: bool,

    /// Project folder to create (with --init)
    #[arg(short, long, requires = "init", conflicts_with = "build")]
    pub name: Option<String>,

    /// Working directory (defaults to the current directory)
    #[arg(short = 'C', long)]
    pub dir: Option<PathBuf>,

    /// Settings file, relative to the working directory
    #[arg(short, long, default_value = SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Print the converter command instead of running it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// Collapse the build/init flags into the single mode to run.
    pub fn mode(&self) -> Mode {
        if self.init {
            Mode::Init {
                name: self.name.clone(),
            }
        } else {
            Mode::Build
        }
    }
}
