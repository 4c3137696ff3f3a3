use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Settings file name, looked up relative to the working directory
pub const SETTINGS_FILE: &str = "readme-settings.json";
/// Source directory used when `sourceDir` is absent
pub const DEFAULT_SOURCE_DIR: &str = "src";
/// Converter used when `pandoc` is absent
pub const DEFAULT_EXECUTABLE: &str = "pandoc";

/// Project settings as stored in `readme-settings.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub project: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<String>,
    /// Metadata file passed ahead of the sources (e.g. a YAML block)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bib: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Converter executable override
    #[serde(rename = "pandoc", default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,
}

impl Settings {
    /// Minimal settings with only the required fields set
    pub fn new(project: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            output: output.into(),
            source_dir: None,
            metadata: None,
            bib: None,
            header: None,
            executable: None,
        }
    }

    /// Read and parse a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::SettingsNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path)?;
        let settings: Settings =
            serde_json::from_str(&raw).map_err(|source| Error::InvalidSettings {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Loaded settings for project {:?} from {:?}", settings.project, path);
        Ok(settings)
    }

    /// Absolute source directory. Relative values resolve against `cwd`.
    pub fn source_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(self.source_dir.as_deref().unwrap_or(DEFAULT_SOURCE_DIR))
    }

    pub fn executable(&self) -> &str {
        self.executable.as_deref().unwrap_or(DEFAULT_EXECUTABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_a_configuration_error() {
        let td = TempDir::new().unwrap();
        let err = Settings::load(&td.path().join(SETTINGS_FILE)).unwrap_err();
        match err {
            Error::SettingsNotFound { path } => assert_eq!(path, td.path().join(SETTINGS_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parses_all_fields() {
        let td = TempDir::new().unwrap();
        fs::write(
            td.path().join(SETTINGS_FILE),
            r#"{
                "project": "manual",
                "header": "header.tex",
                "sourceDir": "chapters",
                "metadata": "meta.yaml",
                "bib": "refs.bib",
                "output": "manual.pdf",
                "pandoc": "/opt/pandoc/bin/pandoc"
            }"#,
        )
        .unwrap();

        let settings = Settings::load(&td.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(settings.project, "manual");
        assert_eq!(settings.output, "manual.pdf");
        assert_eq!(settings.source_dir.as_deref(), Some("chapters"));
        assert_eq!(settings.metadata.as_deref(), Some("meta.yaml"));
        assert_eq!(settings.bib.as_deref(), Some("refs.bib"));
        assert_eq!(settings.header.as_deref(), Some("header.tex"));
        assert_eq!(settings.executable(), "/opt/pandoc/bin/pandoc");
    }

    #[test]
    fn optional_fields_default() {
        let settings: Settings =
            serde_json::from_str(r#"{"project": "p", "output": "out.pdf", "extra": 1}"#).unwrap();
        assert_eq!(settings, Settings::new("p", "out.pdf"));
        assert_eq!(settings.executable(), "pandoc");
        assert_eq!(settings.source_dir(Path::new("/work")), Path::new("/work/src"));
    }

    #[test]
    fn missing_output_is_rejected() {
        let td = TempDir::new().unwrap();
        fs::write(td.path().join(SETTINGS_FILE), r#"{"project": "p"}"#).unwrap();
        let err = Settings::load(&td.path().join(SETTINGS_FILE)).unwrap_err();
        assert!(matches!(err, Error::InvalidSettings { .. }), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn absolute_source_dir_is_kept() {
        let mut settings = Settings::new("p", "out.pdf");
        settings.source_dir = Some("/data/docs".to_string());
        assert_eq!(settings.source_dir(Path::new("/work")), Path::new("/data/docs"));
    }
}
