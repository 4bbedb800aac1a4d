//! File I/O operations for configuration persistence.
//!
//! This module handles:
//! - Loading with per-key fallback to caller defaults
//! - Timestamped backups of the previous file
//! - Saving with atomic writes

mod backup;
mod load;
mod save;

pub use backup::{BACKUP_TIMESTAMP_FORMAT, backup_path_for, list_backups};
pub use load::load_configuration;
pub use save::{SaveOutcome, save_configuration, save_configuration_at};
