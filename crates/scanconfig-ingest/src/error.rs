//! Error types for workbook access.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a workbook.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Workbook file not found.
    #[error("workbook not found: {path}")]
    FileNotFound { path: PathBuf },

    /// File exists but could not be opened as a spreadsheet.
    #[error("failed to open workbook {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Sheet is not present in the workbook.
    #[error("sheet '{sheet}' not found in {path}")]
    SheetNotFound { path: PathBuf, sheet: String },

    /// Sheet exists but its cells could not be read.
    #[error("failed to read sheet '{sheet}' in {path}: {source}")]
    SheetRead {
        path: PathBuf,
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
