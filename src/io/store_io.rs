use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

use crate::model::settings::Settings;
use crate::model::task::Task;

pub const TASKS_FILE: &str = "tasks.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// Error type for task/settings file writes
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("could not serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        source: serde_json::Error,
    },
}

/// Outcome of reading one of the JSON files
enum Loaded<T> {
    Missing,
    Malformed(String),
    Ok(T),
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Loaded<T> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Loaded::Missing,
        Err(e) => return Loaded::Malformed(e.to_string()),
    };
    match serde_json::from_str(&content) {
        Ok(v) => Loaded::Ok(v),
        Err(e) => Loaded::Malformed(e.to_string()),
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
/// The parent directory is created when missing.
fn atomic_write(path: &Path, content: &[u8]) -> Result<(), StoreError> {
    let dir = path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(dir).map_err(|source| StoreError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Read the task list from `<data_dir>/tasks.json`.
///
/// A missing file yields an empty list (and the data directory is created);
/// an unreadable or malformed file yields an empty list and logs an error.
pub fn load_tasks(data_dir: &Path) -> Vec<Task> {
    let path = data_dir.join(TASKS_FILE);
    match read_json::<Vec<Value>>(&path) {
        Loaded::Ok(entries) => {
            let tasks = tasks_from_entries(entries);
            debug!(count = tasks.len(), path = %path.display(), "loaded tasks");
            tasks
        }
        Loaded::Missing => {
            info!(path = %path.display(), "tasks file not found, starting with an empty list");
            if let Err(e) = fs::create_dir_all(data_dir) {
                error!(dir = %data_dir.display(), "could not create data directory: {}", e);
            }
            Vec::new()
        }
        Loaded::Malformed(reason) => {
            error!(path = %path.display(), "invalid task data, starting with an empty list: {}", reason);
            Vec::new()
        }
    }
}

/// Convert array elements one at a time so a single bad entry only costs
/// itself.
fn tasks_from_entries(entries: Vec<Value>) -> Vec<Task> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<Task>(entry) {
            Ok(task) => Some(task),
            Err(e) => {
                warn!(entry = i, "skipping unreadable task: {}", e);
                None
            }
        })
        .collect()
}

/// Write the full task list as a compact JSON array.
pub fn save_tasks(data_dir: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let path = data_dir.join(TASKS_FILE);
    let content = serde_json::to_vec(tasks).map_err(|source| StoreError::Serialize {
        what: "tasks",
        source,
    })?;
    atomic_write(&path, &content)?;
    debug!(count = tasks.len(), path = %path.display(), "saved tasks");
    Ok(())
}

/// Read settings from `<data_dir>/settings.json`, merged onto the defaults.
pub fn load_settings(data_dir: &Path) -> Settings {
    let path = data_dir.join(SETTINGS_FILE);
    match read_json::<Map<String, Value>>(&path) {
        Loaded::Ok(map) => merge_settings(map),
        Loaded::Missing => {
            info!(path = %path.display(), "settings file not found, using defaults");
            Settings::default()
        }
        Loaded::Malformed(reason) => {
            error!(path = %path.display(), "invalid settings data, using defaults: {}", reason);
            Settings::default()
        }
    }
}

/// Apply each known key onto the defaults. A key with a value of the wrong
/// type is skipped without losing the others; unknown keys are ignored.
fn merge_settings(map: Map<String, Value>) -> Settings {
    let mut settings = Settings::default();
    for (key, value) in map {
        let applied = match key.as_str() {
            "font_family" => serde_json::from_value(value).map(|v| settings.font_family = v),
            "font_size" => serde_json::from_value(value).map(|v| settings.font_size = v),
            "dark_mode" => serde_json::from_value(value).map(|v| settings.dark_mode = v),
            _ => continue,
        };
        if let Err(e) = applied {
            warn!(key = %key, "ignoring invalid setting: {}", e);
        }
    }
    settings
}

/// Write settings as indented JSON.
pub fn save_settings(data_dir: &Path, settings: &Settings) -> Result<(), StoreError> {
    let path = data_dir.join(SETTINGS_FILE);
    let content = serialize_pretty(settings).map_err(|source| StoreError::Serialize {
        what: "settings",
        source,
    })?;
    atomic_write(&path, &content)?;
    debug!(path = %path.display(), "saved settings");
    Ok(())
}

/// Pretty-print with 2-space indentation
fn serialize_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = serde_json::to_vec_pretty(value)?;
    out.push(b'\n');
    Ok(out)
}
