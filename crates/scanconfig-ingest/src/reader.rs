//! Spreadsheet reader collaborator.
//!
//! The engine only needs sheet names, a used column count, and single cell
//! values. `WorkbookReader` provides them for any format calamine opens
//! (xlsx, xlsm, xlsb, xls, ods).

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};

use scanconfig_model::ColumnIndex;

use crate::error::{IngestError, Result};

/// Read-only access to workbook structure and cells.
pub trait SpreadsheetReader {
    /// Sheet names in workbook order.
    fn sheet_names(&mut self, path: &Path) -> Result<Vec<String>>;

    /// Used column count of `sheet`, counted from column A.
    fn column_count(&mut self, path: &Path, sheet: &str) -> Result<usize>;

    /// Display value of one cell; `row` is 1-based. `None` for blank cells.
    fn read_cell(
        &mut self,
        path: &Path,
        sheet: &str,
        row: u32,
        column: ColumnIndex,
    ) -> Result<Option<String>>;
}

/// calamine-backed reader that keeps opened workbooks and sheet ranges.
#[derive(Default)]
pub struct WorkbookReader {
    workbooks: HashMap<PathBuf, Sheets<BufReader<File>>>,
    ranges: HashMap<(PathBuf, String), Range<Data>>,
}

impl WorkbookReader {
    pub fn new() -> Self {
        Self::default()
    }

    fn workbook(&mut self, path: &Path) -> Result<&mut Sheets<BufReader<File>>> {
        if !self.workbooks.contains_key(path) {
            if !path.exists() {
                return Err(IngestError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            let workbook = open_workbook_auto(path).map_err(|e| IngestError::Open {
                path: path.to_path_buf(),
                source: e,
            })?;
            tracing::debug!("Opened workbook {}", path.display());
            self.workbooks.insert(path.to_path_buf(), workbook);
        }
        self.workbooks
            .get_mut(path)
            .ok_or_else(|| IngestError::FileNotFound {
                path: path.to_path_buf(),
            })
    }

    fn range(&mut self, path: &Path, sheet: &str) -> Result<&Range<Data>> {
        let key = (path.to_path_buf(), sheet.to_string());
        if !self.ranges.contains_key(&key) {
            let workbook = self.workbook(path)?;
            if !workbook.sheet_names().iter().any(|name| name == sheet) {
                return Err(IngestError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: sheet.to_string(),
                });
            }
            let range = workbook
                .worksheet_range(sheet)
                .map_err(|e| IngestError::SheetRead {
                    path: path.to_path_buf(),
                    sheet: sheet.to_string(),
                    source: e,
                })?;
            self.ranges.insert(key.clone(), range);
        }
        self.ranges
            .get(&key)
            .ok_or_else(|| IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: sheet.to_string(),
            })
    }
}

impl SpreadsheetReader for WorkbookReader {
    fn sheet_names(&mut self, path: &Path) -> Result<Vec<String>> {
        Ok(self.workbook(path)?.sheet_names())
    }

    fn column_count(&mut self, path: &Path, sheet: &str) -> Result<usize> {
        let range = self.range(path, sheet)?;
        Ok(range
            .end()
            .map_or(0, |(_, last_column)| last_column as usize + 1))
    }

    fn read_cell(
        &mut self,
        path: &Path,
        sheet: &str,
        row: u32,
        column: ColumnIndex,
    ) -> Result<Option<String>> {
        let range = self.range(path, sheet)?;
        let Ok(column) = u32::try_from(column.get()) else {
            return Ok(None);
        };
        let position = (row.saturating_sub(1), column);
        Ok(range.get_value(position).and_then(cell_to_string))
    }
}

/// Render a cell for display; blank cells become `None`.
pub fn cell_to_string(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            // Use integer representation when the value is whole.
            if *f == f.floor() && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_render_as_integers() {
        assert_eq!(cell_to_string(&Data::Float(42.0)), Some("42".to_string()));
        assert_eq!(cell_to_string(&Data::Float(2.5)), Some("2.5".to_string()));
    }

    #[test]
    fn empty_cells_are_absent() {
        assert_eq!(cell_to_string(&Data::Empty), None);
        assert_eq!(
            cell_to_string(&Data::String("Room 101".to_string())),
            Some("Room 101".to_string())
        );
    }

    #[test]
    fn missing_workbook_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.xlsx");
        let mut reader = WorkbookReader::new();
        assert!(matches!(
            reader.sheet_names(&path),
            Err(IngestError::FileNotFound { .. })
        ));
    }

    #[test]
    fn non_workbook_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.xlsx");
        std::fs::write(&path, b"plain text, not a zip archive").unwrap();
        let mut reader = WorkbookReader::new();
        assert!(matches!(
            reader.sheet_names(&path),
            Err(IngestError::Open { .. })
        ));
    }
}
