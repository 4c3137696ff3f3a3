//! I/O layer: running the converter (`runner`) and writing the bundled
//! project template to disk (`template`).
pub mod runner;
pub use runner::{Executor, ShellExecutor, run_command};

pub mod template;
pub use template::{set_project_name, template_files, write_template};
