//! Project scaffolding from the template tree compiled into the binary.
use std::fs;
use std::path::Path;

use rust_embed::RustEmbed;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::settings::SETTINGS_FILE;
use crate::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "template/"]
struct Template;

/// Relative paths of every bundled template file, sorted
pub fn template_files() -> Vec<String> {
    let mut files: Vec<String> = Template::iter().map(|p| p.into_owned()).collect();
    files.sort();
    files
}

/// Write the template tree into `target`, creating it if needed. Files that
/// already exist under the same name are overwritten.
pub fn write_template(target: &Path) -> Result<usize> {
    fs::create_dir_all(target)?;

    let mut written = 0;
    for rel in template_files() {
        let Some(file) = Template::get(&rel) else {
            continue;
        };
        let dest = target.join(&rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, &file.data)?;
        debug!("Wrote {:?}", dest);
        written += 1;
    }

    info!("Copied {} template file(s) to {:?}", written, target);
    Ok(written)
}

/// Set `project` in `<dir>/readme-settings.json`, keeping every other key
/// and the key order intact.
pub fn set_project_name(dir: &Path, project: &str) -> Result<()> {
    let path = dir.join(SETTINGS_FILE);
    if !path.is_file() {
        return Err(Error::SettingsNotFound { path });
    }

    let raw = fs::read_to_string(&path)?;
    let mut doc: Value = serde_json::from_str(&raw).map_err(|source| Error::InvalidSettings {
        path: path.clone(),
        source,
    })?;
    let Some(obj) = doc.as_object_mut() else {
        return Err(Error::InvalidSettings {
            path,
            source: serde::de::Error::custom("expected a JSON object"),
        });
    };
    obj.insert("project".to_string(), Value::String(project.to_string()));

    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    fs::write(&path, out)?;
    Ok(())
}
