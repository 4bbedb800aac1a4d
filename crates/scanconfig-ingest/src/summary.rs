//! Workbook discovery.

use std::path::Path;

use scanconfig_model::SpreadsheetSummary;

use crate::error::Result;
use crate::reader::SpreadsheetReader;

/// Discover sheet names and the used width of the first sheet.
///
/// A workbook without sheets reports a column count of zero.
pub fn load_summary<R>(reader: &mut R, path: &Path) -> Result<SpreadsheetSummary>
where
    R: SpreadsheetReader + ?Sized,
{
    let sheet_names = reader.sheet_names(path)?;
    let column_count = match sheet_names.first() {
        Some(first) => reader.column_count(path, first)?,
        None => 0,
    };
    tracing::debug!(
        sheets = sheet_names.len(),
        column_count,
        "Loaded workbook summary from {}",
        path.display()
    );
    Ok(SpreadsheetSummary {
        sheet_names,
        column_count,
    })
}
