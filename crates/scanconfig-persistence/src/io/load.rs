//! Configuration loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use scanconfig_model::Configuration;

use crate::document::StoredDocument;
use crate::error::{PersistenceError, Result};

/// Load the configuration at `path` on top of `defaults`.
///
/// Returns `Ok(None)` when no file exists. Missing sections or keys keep the
/// corresponding default; malformed JSON and unreadable files are errors.
pub fn load_configuration(path: &Path, defaults: Configuration) -> Result<Option<Configuration>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No configuration at {}", path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(PersistenceError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let stored: StoredDocument =
        serde_json::from_str(&text).map_err(|e| PersistenceError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::info!("Loaded configuration from {}", path.display());
    Ok(Some(stored.apply(defaults)))
}
