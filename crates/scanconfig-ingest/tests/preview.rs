//! Tests for workbook discovery and preview with an in-memory reader.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use scanconfig_ingest::{
    IngestError, PreviewWarning, Result, SpreadsheetReader, load_summary, preview_mapping,
};
use scanconfig_model::{ColumnIndex, FieldMapping, SpreadsheetSummary};

#[derive(Default)]
struct MemoryReader {
    sheets: Vec<(String, usize)>,
    cells: HashMap<(String, u32, usize), String>,
    fail_reads: bool,
    reads: usize,
}

impl MemoryReader {
    fn with_sheets(sheets: &[(&str, usize)]) -> Self {
        Self {
            sheets: sheets
                .iter()
                .map(|(name, width)| (name.to_string(), *width))
                .collect(),
            ..Self::default()
        }
    }

    fn set(&mut self, sheet: &str, row: u32, column: usize, value: &str) {
        self.cells
            .insert((sheet.to_string(), row, column), value.to_string());
    }
}

impl SpreadsheetReader for MemoryReader {
    fn sheet_names(&mut self, _path: &Path) -> Result<Vec<String>> {
        Ok(self.sheets.iter().map(|(name, _)| name.clone()).collect())
    }

    fn column_count(&mut self, path: &Path, sheet: &str) -> Result<usize> {
        self.sheets
            .iter()
            .find(|(name, _)| name == sheet)
            .map(|(_, width)| *width)
            .ok_or_else(|| IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: sheet.to_string(),
            })
    }

    fn read_cell(
        &mut self,
        path: &Path,
        sheet: &str,
        row: u32,
        column: ColumnIndex,
    ) -> Result<Option<String>> {
        self.reads += 1;
        if self.fail_reads {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(self
            .cells
            .get(&(sheet.to_string(), row, column.get()))
            .cloned())
    }
}

fn col(index: usize) -> ColumnIndex {
    ColumnIndex::new(index).unwrap()
}

fn mapping() -> FieldMapping {
    FieldMapping {
        asset_id_search: [Some(col(2)), None, Some(col(4))],
        asset_name: col(5),
        asset_description: col(6),
        status: col(15),
        location: col(16),
        room: col(17),
        marked_check: col(18),
    }
}

fn path() -> PathBuf {
    PathBuf::from("inventory.xlsx")
}

fn summary(reader: &mut MemoryReader) -> SpreadsheetSummary {
    load_summary(reader, &path()).unwrap()
}

#[test]
fn summary_uses_first_sheet_width() {
    let mut reader = MemoryReader::with_sheets(&[("Sheet1", 19), ("Other", 4)]);
    let summary = summary(&mut reader);

    assert_eq!(summary.sheet_names, vec!["Sheet1", "Other"]);
    assert_eq!(summary.column_count, 19);
}

#[test]
fn summary_of_empty_workbook() {
    let mut reader = MemoryReader::default();
    let summary = summary(&mut reader);

    assert!(summary.sheet_names.is_empty());
    assert_eq!(summary.column_count, 0);
}

#[test]
fn preview_reads_five_rows_in_field_order() {
    let mut reader = MemoryReader::with_sheets(&[("Sheet1", 19)]);
    reader.set("Sheet1", 1, 2, "ID");
    reader.set("Sheet1", 1, 5, "Name");
    reader.set("Sheet1", 2, 2, "A-100");
    reader.set("Sheet1", 2, 18, "x");
    reader.set("Sheet1", 6, 2, "beyond preview");
    let summary = summary(&mut reader);

    let report = preview_mapping(&mut reader, &path(), &summary, "Sheet1", &mapping());

    assert!(report.warnings.is_empty());
    let table = report.table.expect("preview table");
    assert_eq!(
        table.headers,
        vec![
            "Asset ID (C)",
            "Asset ID (E)",
            "Name (F)",
            "Desc (G)",
            "Status (P)",
            "Location (Q)",
            "Room (R)",
            "Marked (S)",
        ]
    );
    assert_eq!(table.rows.len(), 5);
    assert_eq!(table.rows[0][0], "ID");
    assert_eq!(table.rows[0][2], "Name");
    assert_eq!(table.rows[1][0], "A-100");
    assert_eq!(table.rows[1][7], "x");
    // Blank cells render as empty text.
    assert_eq!(table.rows[4], vec![String::new(); 8]);
    assert_eq!(reader.reads, 5 * 8);
}

#[test]
fn missing_sheet_is_a_warning() {
    let mut reader = MemoryReader::with_sheets(&[("Sheet1", 19)]);
    let summary = summary(&mut reader);

    let report = preview_mapping(&mut reader, &path(), &summary, "Other", &mapping());

    assert!(report.table.is_none());
    assert_eq!(
        report.warnings,
        vec![PreviewWarning::SheetNotFound {
            sheet: "Other".to_string()
        }]
    );
    assert_eq!(reader.reads, 0);
}

#[test]
fn read_failure_yields_single_warning() {
    let mut reader = MemoryReader::with_sheets(&[("Sheet1", 19)]);
    let summary = summary(&mut reader);
    reader.fail_reads = true;

    let report = preview_mapping(&mut reader, &path(), &summary, "Sheet1", &mapping());

    assert!(report.table.is_none());
    assert_eq!(report.warnings.len(), 1);
    assert!(matches!(
        &report.warnings[0],
        PreviewWarning::ReadFailed { sheet, .. } if sheet == "Sheet1"
    ));
    assert_eq!(reader.reads, 1);
}
