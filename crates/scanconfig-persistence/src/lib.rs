//! Persistent storage for the scanner configuration.
//!
//! The configuration lives in a single JSON file (conventionally
//! `config.json`) read by the scanning server. Saving copies any existing
//! file to `config.json.backup.<YYYY-MM-DD-HHMMSS>` before the new content
//! replaces it.
//!
//! # File Format
//!
//! ```text
//! {
//!   "excel": {
//!     "filePath": string,
//!     "sheets": { "inventory": string, "other": string },
//!     "columns": {
//!       "assetIdSearch": [int|null, int|null, int|null],
//!       "assetName": int, "assetDescription": int, "status": int,
//!       "location": int, "room": int, "markedCheck": int
//!     },
//!     "counting": { "startRow": int, "endRow": int, "totalCount": int }
//!   },
//!   "server": { "ngrokUrl": string }
//! }
//! ```
//!
//! # Architecture
//!
//! - `document.rs` - on-disk document types
//! - `io/` - load, save, backup
//! - `error.rs` - error types with user-friendly messages

#![deny(unsafe_code)]

mod document;
mod error;
mod io;

use std::path::{Path, PathBuf};

use scanconfig_model::Configuration;

pub use document::{
    ColumnsSection, ConfigDocument, CountingSection, ExcelSection, ServerSection, SheetsSection,
};
pub use error::{PersistenceError, Result};
pub use io::{
    BACKUP_TIMESTAMP_FORMAT, SaveOutcome, backup_path_for, list_backups, load_configuration,
    save_configuration, save_configuration_at,
};

/// Conventional configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// The configuration file at one well-known path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationStore {
    path: PathBuf,
}

impl ConfigurationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// See [`load_configuration`].
    pub fn load(&self, defaults: Configuration) -> Result<Option<Configuration>> {
        load_configuration(&self.path, defaults)
    }

    /// See [`save_configuration`].
    pub fn save(&self, config: &Configuration) -> Result<SaveOutcome> {
        save_configuration(config, &self.path)
    }

    pub fn backups(&self) -> Result<Vec<PathBuf>> {
        list_backups(&self.path)
    }
}

impl Default for ConfigurationStore {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}
