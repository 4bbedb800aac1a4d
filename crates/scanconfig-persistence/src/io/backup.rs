//! Timestamped backups of the previous configuration file.
//!
//! A backup sits next to the original as `<name>.backup.<YYYY-MM-DD-HHMMSS>`.
//! Two saves within the same second share a backup name; the second copy
//! replaces the first. Backups are never pruned.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::{PersistenceError, Result};

/// `chrono` format of the backup suffix.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H%M%S";

const BACKUP_MARKER: &str = ".backup.";

/// Backup location for `path` taken at `now`.
pub fn backup_path_for(path: &Path, now: NaiveDateTime) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(BACKUP_MARKER);
    name.push(now.format(BACKUP_TIMESTAMP_FORMAT).to_string());
    PathBuf::from(name)
}

/// Existing backups of `path`, oldest first.
pub fn list_backups(path: &Path) -> Result<Vec<PathBuf>> {
    let Some(file_name) = path.file_name() else {
        return Ok(Vec::new());
    };
    let mut prefix = OsString::from(file_name);
    prefix.push(BACKUP_MARKER);
    let prefix = prefix.to_string_lossy().into_owned();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let entries = fs::read_dir(dir).map_err(|e| PersistenceError::Io {
        operation: "read",
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut backups: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(&prefix))
        })
        .map(|entry| entry.path())
        .collect();
    // The timestamp format sorts lexically in chronological order.
    backups.sort();
    Ok(backups)
}

/// Copy the current file to its backup location.
pub(crate) fn create_backup(path: &Path, now: NaiveDateTime) -> Result<PathBuf> {
    let backup_path = backup_path_for(path, now);
    fs::copy(path, &backup_path).map_err(|e| PersistenceError::Backup {
        path: path.to_path_buf(),
        backup_path: backup_path.clone(),
        source: e,
    })?;
    tracing::info!("Backed up {} to {}", path.display(), backup_path.display());
    Ok(backup_path)
}
