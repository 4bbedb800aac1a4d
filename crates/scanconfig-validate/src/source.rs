//! Existence of the source spreadsheet.

use std::path::{Path, PathBuf};

/// Whether the spreadsheet is present at the configured path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    Present,
    Missing { path: PathBuf },
}

impl SourceStatus {
    /// Check the filesystem for `path`.
    pub fn detect(path: &Path) -> Self {
        if path.exists() {
            Self::Present
        } else {
            Self::Missing {
                path: path.to_path_buf(),
            }
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }
}
