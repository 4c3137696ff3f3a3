use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::core::render::quote_arg;
use crate::core::settings::Settings;
use crate::error::{Error, Result};

/// Converter invocation derived from `Settings`. Built, rendered once, dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionParameters {
    pub executable: String,
    /// Space-joined input files, metadata file first when configured
    pub inputs: String,
    /// `--bibliography=<path>`
    pub bibliography: Option<String>,
    /// `--include-in-header=<path>`
    pub header: Option<String>,
    /// `--output=<path>`
    pub output: String,
}

impl ConversionParameters {
    /// Resolve the source directory against `cwd`, enumerate its files and
    /// merge in the optional metadata, bibliography and header paths.
    pub fn from_settings(settings: &Settings, cwd: &Path) -> Result<Self> {
        let source_dir = settings.source_dir(cwd);
        let files = collect_source_files(&source_dir)?;
        debug!("Found {} source file(s) in {:?}", files.len(), source_dir);

        let mut inputs: Vec<String> = Vec::with_capacity(files.len() + 1);
        if let Some(metadata) = &settings.metadata {
            inputs.push(quote_arg(metadata));
        }
        inputs.extend(
            files
                .iter()
                .map(|file| quote_arg(&relative_to(file, cwd))),
        );

        Ok(Self {
            executable: settings.executable().to_string(),
            inputs: inputs.join(" "),
            bibliography: settings
                .bib
                .as_deref()
                .map(|bib| format!("--bibliography={}", quote_arg(bib))),
            header: settings
                .header
                .as_deref()
                .map(|header| format!("--include-in-header={}", quote_arg(header))),
            output: format!("--output={}", quote_arg(&settings.output)),
        })
    }
}

/// Every non-directory entry below `dir`, sorted by path.
///
/// Ordering compares path components, so `a/b.md` sorts before `a.md`.
pub fn collect_source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::EmptySource {
            dir: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_dir() {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        return Err(Error::EmptySource {
            dir: dir.to_path_buf(),
        });
    }
    files.sort();
    Ok(files)
}

/// `path` relative to `base`, `/`-separated with `.` segments dropped.
/// Paths outside `base` stay absolute.
fn relative_to(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# heading\n").unwrap();
    }

    #[test]
    fn defaults_to_src_and_pandoc() {
        let td = TempDir::new().unwrap();
        touch(td.path(), "src/a.md");

        let params =
            ConversionParameters::from_settings(&Settings::new("p", "out.pdf"), td.path()).unwrap();
        assert_eq!(params.executable, "pandoc");
        assert_eq!(params.inputs, "src/a.md");
        assert_eq!(params.bibliography, None);
        assert_eq!(params.header, None);
        assert_eq!(params.output, "--output=out.pdf");
    }

    #[test]
    fn files_are_sorted_and_recursive() {
        let td = TempDir::new().unwrap();
        for rel in ["src/c.md", "src/a.md", "src/part2/b.md", "src/part1/z.md"] {
            touch(td.path(), rel);
        }

        let files = collect_source_files(&td.path().join("src")).unwrap();
        let rendered: Vec<String> = files.iter().map(|f| relative_to(f, td.path())).collect();
        assert_eq!(
            rendered,
            ["src/a.md", "src/c.md", "src/part1/z.md", "src/part2/b.md"]
        );
    }

    #[test]
    fn empty_source_dir_fails() {
        let td = TempDir::new().unwrap();
        fs::create_dir_all(td.path().join("src/empty/nested")).unwrap();

        let err = ConversionParameters::from_settings(&Settings::new("p", "out.pdf"), td.path())
            .unwrap_err();
        match err {
            Error::EmptySource { dir } => assert_eq!(dir, td.path().join("src")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_source_dir_fails() {
        let td = TempDir::new().unwrap();
        let err = ConversionParameters::from_settings(&Settings::new("p", "out.pdf"), td.path())
            .unwrap_err();
        assert!(matches!(err, Error::EmptySource { .. }), "{err}");
    }

    #[test]
    fn metadata_is_prepended() {
        let td = TempDir::new().unwrap();
        touch(td.path(), "docs/b.md");
        touch(td.path(), "docs/a.md");

        let mut settings = Settings::new("p", "out.pdf");
        settings.source_dir = Some("docs".to_string());
        settings.metadata = Some("meta.yaml".to_string());

        let params = ConversionParameters::from_settings(&settings, td.path()).unwrap();
        assert_eq!(params.inputs, "meta.yaml docs/a.md docs/b.md");
    }

    #[test]
    fn optional_flags_are_built() {
        let td = TempDir::new().unwrap();
        touch(td.path(), "src/a.md");

        let mut settings = Settings::new("p", "book.html");
        settings.bib = Some("refs.bib".to_string());
        settings.header = Some("header.tex".to_string());
        settings.executable = Some("/usr/local/bin/pandoc".to_string());

        let params = ConversionParameters::from_settings(&settings, td.path()).unwrap();
        assert_eq!(params.executable, "/usr/local/bin/pandoc");
        assert_eq!(params.bibliography.as_deref(), Some("--bibliography=refs.bib"));
        assert_eq!(params.header.as_deref(), Some("--include-in-header=header.tex"));
        assert_eq!(params.output, "--output=book.html");
    }

    #[test]
    fn source_dir_dot_renders_bare_names() {
        let td = TempDir::new().unwrap();
        touch(td.path(), "b.md");
        touch(td.path(), "a.md");

        let mut settings = Settings::new("p", "out.pdf");
        settings.source_dir = Some(".".to_string());

        let params = ConversionParameters::from_settings(&settings, td.path()).unwrap();
        assert_eq!(params.inputs, "a.md b.md");
    }

    #[cfg(unix)]
    #[test]
    fn paths_with_spaces_are_quoted() {
        let td = TempDir::new().unwrap();
        touch(td.path(), "src/my chapter.md");

        let params =
            ConversionParameters::from_settings(&Settings::new("p", "out.pdf"), td.path()).unwrap();
        assert_eq!(params.inputs, "'src/my chapter.md'");
    }

    #[cfg(unix)]
    #[test]
    fn file_names_with_shell_operators_stay_one_argument() {
        use crate::io::runner::{Executor, ShellExecutor};

        let td = TempDir::new().unwrap();
        touch(td.path(), "src/notes&draft.md");
        touch(td.path(), "src/a (copy).md");

        let mut settings = Settings::new("p", "out.txt");
        settings.executable = Some("printf '%s\\n'".to_string());
        let command = ConversionParameters::from_settings(&settings, td.path())
            .unwrap()
            .render();
        assert_eq!(
            command,
            "printf '%s\\n' 'src/a (copy).md' 'src/notes&draft.md' --output=out.txt"
        );

        let out = ShellExecutor.execute(&command, td.path()).unwrap();
        assert_eq!(out.code, Some(0), "{}", out.stderr);
        assert_eq!(
            out.stdout,
            "src/a (copy).md\nsrc/notes&draft.md\n--output=out.txt\n"
        );
    }
}
