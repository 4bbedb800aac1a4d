//! Bounded read-only sample of mapped columns.
//!
//! The preview is operator feedback only. Problems are reported as warnings
//! and never abort the preview.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::warn;

use scanconfig_model::{FieldMapping, FieldSlot, SpreadsheetSummary};

use crate::reader::SpreadsheetReader;

/// Rows sampled by a preview, counted from row 1.
pub const PREVIEW_ROWS: u32 = 5;

/// Sampled cells for the mapped columns of one sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewTable {
    pub sheet: String,
    /// Column headers such as `Asset ID (C)` or `Name (F)`.
    pub headers: Vec<String>,
    /// Cell text per row; blank cells are empty strings.
    pub rows: Vec<Vec<String>>,
}

/// Non-fatal problem encountered while previewing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PreviewWarning {
    /// The workbook itself could not be opened or listed.
    WorkbookUnreadable { message: String },
    SheetNotFound { sheet: String },
    ReadFailed { sheet: String, message: String },
}

impl fmt::Display for PreviewWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkbookUnreadable { message } => {
                write!(f, "Could not read workbook: {message}")
            }
            Self::SheetNotFound { sheet } => write!(
                f,
                "Sheet '{sheet}' not found in Excel file. It will be created when needed."
            ),
            Self::ReadFailed { sheet, message } => {
                write!(f, "Could not read sheet '{sheet}': {message}")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreviewReport {
    pub table: Option<PreviewTable>,
    pub warnings: Vec<PreviewWarning>,
}

/// Header for one mapped column, e.g. `Status (P)`.
pub fn column_header(slot: FieldSlot, label: &str) -> String {
    format!("{} ({label})", slot.header())
}

/// Read the first [`PREVIEW_ROWS`] rows of every mapped column of `sheet`.
///
/// A sheet missing from `summary` yields a warning and no table. The first
/// read failure stops the preview with a single warning.
pub fn preview_mapping<R>(
    reader: &mut R,
    path: &Path,
    summary: &SpreadsheetSummary,
    sheet: &str,
    mapping: &FieldMapping,
) -> PreviewReport
where
    R: SpreadsheetReader + ?Sized,
{
    let mut report = PreviewReport::default();
    if !summary.contains(sheet) {
        warn!(sheet, "preview sheet not present in workbook");
        report.warnings.push(PreviewWarning::SheetNotFound {
            sheet: sheet.to_string(),
        });
        return report;
    }

    let columns = mapping.columns();
    let headers = columns
        .iter()
        .map(|(slot, index)| column_header(*slot, index.label().as_str()))
        .collect();

    let mut rows = Vec::with_capacity(PREVIEW_ROWS as usize);
    for row in 1..=PREVIEW_ROWS {
        let mut cells = Vec::with_capacity(columns.len());
        for (_, index) in &columns {
            match reader.read_cell(path, sheet, row, *index) {
                Ok(value) => cells.push(value.unwrap_or_default()),
                Err(error) => {
                    warn!(sheet, row, %error, "preview read failed");
                    report.warnings.push(PreviewWarning::ReadFailed {
                        sheet: sheet.to_string(),
                        message: error.to_string(),
                    });
                    return report;
                }
            }
        }
        rows.push(cells);
    }

    report.table = Some(PreviewTable {
        sheet: sheet.to_string(),
        headers,
        rows,
    });
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanconfig_model::RequiredField;

    #[test]
    fn headers_use_short_names() {
        assert_eq!(column_header(FieldSlot::AssetId(2), "D"), "Asset ID (D)");
        assert_eq!(
            column_header(FieldSlot::Required(RequiredField::AssetDescription), "G"),
            "Desc (G)"
        );
    }

    #[test]
    fn sheet_warning_text() {
        let warning = PreviewWarning::SheetNotFound {
            sheet: "Audit".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Sheet 'Audit' not found in Excel file. It will be created when needed."
        );
    }

    #[test]
    fn workbook_warning_names_no_sheet() {
        let warning = PreviewWarning::WorkbookUnreadable {
            message: "failed to open workbook stock.xlsx".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Could not read workbook: failed to open workbook stock.xlsx"
        );
    }
}
