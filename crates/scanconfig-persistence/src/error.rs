//! Persistence error types.
//!
//! Every failure reading or writing the configuration file is caught here and
//! carries the underlying cause; callers never see raw platform errors.

use std::path::PathBuf;

use thiserror::Error;

use scanconfig_model::SheetRole;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} configuration file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Existing file is not a readable configuration document.
    #[error("Invalid configuration file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization error.
    #[error("Failed to serialize configuration")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// One or both sheet names were not chosen.
    #[error("No {} sheet selected", roles(.missing))]
    MissingSheetSelection { missing: Vec<SheetRole> },

    /// Copying the previous file to its backup failed.
    #[error("Failed to back up configuration to {backup_path}")]
    Backup {
        path: PathBuf,
        backup_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// Reading or parsing an existing file failed.
    pub fn is_read_error(&self) -> bool {
        match self {
            Self::Io { operation, .. } => *operation == "read",
            Self::Parse { .. } => true,
            _ => false,
        }
    }

    /// Writing the new file or its backup failed.
    pub fn is_write_error(&self) -> bool {
        match self {
            Self::Io { operation, .. } => *operation != "read",
            Self::Serialization { .. } | Self::Backup { .. } | Self::AtomicWriteFailed { .. } => {
                true
            }
            Self::Parse { .. } | Self::MissingSheetSelection { .. } => false,
        }
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::Parse { path, .. } => {
                format!("The file at {} is not a valid configuration", path.display())
            }
            Self::Serialization { .. } => {
                "An error occurred while preparing the configuration.".to_string()
            }
            Self::MissingSheetSelection { .. } => {
                "Please select both inventory and other sheets.".to_string()
            }
            Self::Backup { path, .. } => {
                format!(
                    "Could not back up {} before saving; nothing was changed.",
                    path.display()
                )
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that you have permission to read the file.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::Parse { .. } => {
                Some("Fix the JSON by hand or restore one of the config.json.backup.* files.".into())
            }
            Self::Serialization { .. } => None,
            Self::MissingSheetSelection { .. } => {
                Some("Pick a discovered sheet or enter a custom sheet name for each role.".into())
            }
            Self::Backup { .. } | Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
        }
    }
}

fn roles(missing: &[SheetRole]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sheet_message_lists_roles() {
        let error = PersistenceError::MissingSheetSelection {
            missing: vec![SheetRole::Inventory, SheetRole::Other],
        };
        assert_eq!(error.to_string(), "No inventory or other sheet selected");
        assert!(!error.is_read_error());
        assert!(!error.is_write_error());
    }

    #[test]
    fn io_errors_classify_by_operation() {
        let read = PersistenceError::Io {
            operation: "read",
            path: PathBuf::from("config.json"),
            source: std::io::Error::other("denied"),
        };
        assert!(read.is_read_error());
        assert!(!read.is_write_error());

        let write = PersistenceError::Io {
            operation: "write",
            path: PathBuf::from("config.json.tmp"),
            source: std::io::Error::other("disk full"),
        };
        assert!(write.is_write_error());
        assert!(write.suggestion().is_some());
    }

    #[test]
    fn parse_message_leaves_cause_to_source() {
        let source = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let cause = source.to_string();
        let error = PersistenceError::Parse {
            path: PathBuf::from("config.json"),
            source,
        };
        assert_eq!(
            error.user_message(),
            "The file at config.json is not a valid configuration"
        );
        assert!(!error.to_string().contains(&cause));
        assert_eq!(
            std::error::Error::source(&error).map(ToString::to_string),
            Some(cause)
        );
    }
}
