//! Workbook access for the scanner configuration.
//!
//! Only sheet names, the used column count, and a five-row preview are ever
//! read. Cell data is never written.

#![deny(unsafe_code)]

pub mod error;
pub mod preview;
pub mod reader;
pub mod summary;

pub use error::{IngestError, Result};
pub use preview::{
    PREVIEW_ROWS, PreviewReport, PreviewTable, PreviewWarning, column_header, preview_mapping,
};
pub use reader::{SpreadsheetReader, WorkbookReader, cell_to_string};
pub use summary::load_summary;
