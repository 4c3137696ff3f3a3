#![doc = r#"
readme-builder: build documentation projects by driving pandoc from a small
JSON settings file.

A project directory holds a `readme-settings.json` describing where the
sources live and which metadata, bibliography and header files to pass
along. This crate turns those settings into one converter command line,
runs it, and reports the result. It also scaffolds new projects from a
template compiled into the binary. It powers the `readme-builder` CLI and
can be embedded in other tools.

Settings file
-------------
```json
{
  "project": "manual",
  "sourceDir": "src",
  "metadata": "metadata.yaml",
  "bib": "references.bib",
  "header": "header.tex",
  "output": "manual.pdf",
  "pandoc": "pandoc"
}
```
Only `project` and `output` are required. `sourceDir` defaults to `src`
and `pandoc` (the converter executable) to `pandoc`.

Quick start: render the command without running it
---------------------------------------------------
```rust,no_run
use std::path::Path;

fn main() -> readme_builder::Result<()> {
    let command = readme_builder::render_build_command(
        Path::new("/work/manual"),
        Path::new("readme-settings.json"),
    )?;
    // pandoc --bibliography=references.bib ... --output=manual.pdf
    println!("{command}");
    Ok(())
}
```

Build a project
---------------
```rust,no_run
use std::path::Path;
use readme_builder::{build_project, ShellExecutor};

fn main() -> readme_builder::Result<()> {
    let output = build_project(
        Path::new("/work/manual"),
        Path::new("readme-settings.json"),
        &ShellExecutor,
    )?;
    assert!(output.success());
    Ok(())
}
```

Any type implementing [`Executor`] can stand in for the shell, which is how
the build flow is tested without pandoc installed.

Error handling
--------------
All public functions return `readme_builder::Result<T>`; match on
`readme_builder::Error` to tell the failure kinds apart.

```rust,no_run
use std::path::Path;
use readme_builder::{build_project, Error, ShellExecutor};

fn main() {
    match build_project(Path::new("."), Path::new("readme-settings.json"), &ShellExecutor) {
        Ok(_) => {}
        Err(Error::SettingsNotFound { path }) => eprintln!("no settings at {}", path.display()),
        Err(Error::ConverterFailed { code, stderr }) => eprintln!("pandoc failed ({code}): {stderr}"),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`]: the build and init flows.
- [`core`]: settings, parameter derivation and command rendering.
- [`io`]: the converter runner and the bundled template.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::ConversionParameters;
pub use crate::core::settings::{SETTINGS_FILE, Settings};
pub use error::{Error, Result};
pub use types::{ExecOutput, Mode};

pub use io::runner::{Executor, ShellExecutor, run_command};

pub use api::{build_project, init_project, render_build_command, render_command};
