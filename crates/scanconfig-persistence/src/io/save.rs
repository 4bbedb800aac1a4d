//! Configuration saving.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use scanconfig_model::Configuration;

use super::backup::create_backup;
use crate::document::ConfigDocument;
use crate::error::{PersistenceError, Result};

/// Where a save landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub path: PathBuf,
    /// Copy of the previous file, when there was one.
    pub backup: Option<PathBuf>,
}

/// Save `config` to `path`, backing up any existing file first.
pub fn save_configuration(config: &Configuration, path: &Path) -> Result<SaveOutcome> {
    save_configuration_at(config, path, Local::now().naive_local())
}

/// Save with an explicit clock reading for the backup name.
///
/// Sheet names are checked before anything touches disk. The column mapping
/// is trusted as given; validate it first.
pub fn save_configuration_at(
    config: &Configuration,
    path: &Path,
    now: NaiveDateTime,
) -> Result<SaveOutcome> {
    let sheets = config
        .sheets
        .resolve()
        .map_err(|missing| PersistenceError::MissingSheetSelection { missing })?;

    let document = ConfigDocument::new(config, sheets);
    let json = serde_json::to_string_pretty(&document)
        .map_err(|e| PersistenceError::Serialization { source: e })?;

    // Create parent directory if needed
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let backup = if path.exists() {
        Some(create_backup(path, now)?)
    } else {
        None
    };

    write_atomically(path, json.as_bytes())?;

    tracing::info!("Saved configuration to {}", path.display());
    Ok(SaveOutcome {
        path: path.to_path_buf(),
        backup,
    })
}

/// Write to a sibling temp file, then rename over the target.
///
/// The temp file is removed again when any step after its creation fails.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    let result = fill_and_rename(&mut file, &temp_path, path, bytes);
    if result.is_err() {
        drop(file);
        if let Err(e) = fs::remove_file(&temp_path) {
            tracing::warn!("Could not remove {}: {e}", temp_path.display());
        }
    }
    result
}

fn fill_and_rename(file: &mut File, temp_path: &Path, path: &Path, bytes: &[u8]) -> Result<()> {
    file.write_all(bytes).map_err(|e| PersistenceError::Io {
        operation: "write",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    fs::rename(temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.to_path_buf(),
        target_path: path.to_path_buf(),
        source: e,
    })
}
