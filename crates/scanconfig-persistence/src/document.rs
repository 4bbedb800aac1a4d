//! The `config.json` document contract.
//!
//! Writing always produces every key in a fixed order. Reading tolerates any
//! missing section or key and keeps the caller's default for it.

use serde::{Deserialize, Serialize};
use tracing::warn;

use scanconfig_model::{
    ASSET_ID_SLOTS, ColumnIndex, Configuration, RequiredField, ResolvedSheets, SheetChoice,
};

/// Document as written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub excel: ExcelSection,
    pub server: ServerSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcelSection {
    pub file_path: String,
    pub sheets: SheetsSection,
    pub columns: ColumnsSection,
    pub counting: CountingSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetsSection {
    pub inventory: String,
    pub other: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnsSection {
    pub asset_id_search: [Option<ColumnIndex>; ASSET_ID_SLOTS],
    pub asset_name: ColumnIndex,
    pub asset_description: ColumnIndex,
    pub status: ColumnIndex,
    pub location: ColumnIndex,
    pub room: ColumnIndex,
    pub marked_check: ColumnIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountingSection {
    pub start_row: u32,
    pub end_row: u32,
    pub total_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSection {
    pub ngrok_url: String,
}

impl ConfigDocument {
    /// Build the on-disk form. Sheet names must already be resolved.
    pub fn new(config: &Configuration, sheets: ResolvedSheets) -> Self {
        let columns = &config.columns;
        Self {
            excel: ExcelSection {
                file_path: config.file_path.to_string_lossy().into_owned(),
                sheets: SheetsSection {
                    inventory: sheets.inventory,
                    other: sheets.other,
                },
                columns: ColumnsSection {
                    asset_id_search: columns.asset_id_search,
                    asset_name: columns.asset_name,
                    asset_description: columns.asset_description,
                    status: columns.status,
                    location: columns.location,
                    room: columns.room,
                    marked_check: columns.marked_check,
                },
                counting: CountingSection {
                    start_row: config.rows.start_row(),
                    end_row: config.rows.end_row(),
                    total_count: config.rows.total_count(),
                },
            },
            server: ServerSection {
                ngrok_url: config.server_url.clone(),
            },
        }
    }
}

/// Lenient view of a stored document; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct StoredDocument {
    excel: Option<StoredExcel>,
    server: Option<StoredServer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StoredExcel {
    file_path: Option<String>,
    sheets: Option<StoredSheets>,
    columns: Option<StoredColumns>,
    counting: Option<StoredCounting>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredSheets {
    inventory: Option<String>,
    other: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StoredColumns {
    asset_id_search: Option<Vec<Option<i64>>>,
    asset_name: Option<i64>,
    asset_description: Option<i64>,
    status: Option<i64>,
    location: Option<i64>,
    room: Option<i64>,
    marked_check: Option<i64>,
}

impl StoredColumns {
    fn get(&self, field: RequiredField) -> Option<i64> {
        match field {
            RequiredField::AssetName => self.asset_name,
            RequiredField::AssetDescription => self.asset_description,
            RequiredField::Status => self.status,
            RequiredField::Location => self.location,
            RequiredField::Room => self.room,
            RequiredField::MarkedCheck => self.marked_check,
        }
    }
}

/// `totalCount` is derived and ignored on read.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StoredCounting {
    start_row: Option<i64>,
    end_row: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StoredServer {
    ngrok_url: Option<String>,
}

impl StoredDocument {
    /// Overlay stored values on `defaults`.
    ///
    /// A `null` identifier slot means "not mapped". Out-of-range numbers are
    /// logged and the default kept.
    pub(crate) fn apply(self, mut config: Configuration) -> Configuration {
        if let Some(excel) = self.excel {
            if let Some(file_path) = excel.file_path {
                config.file_path = file_path.into();
            }
            if let Some(sheets) = excel.sheets {
                if let Some(name) = sheets.inventory {
                    config.sheets.inventory = SheetChoice::Custom(name);
                }
                if let Some(name) = sheets.other {
                    config.sheets.other = SheetChoice::Custom(name);
                }
            }
            if let Some(columns) = excel.columns {
                apply_columns(&columns, &mut config);
            }
            if let Some(counting) = excel.counting {
                apply_counting(&counting, &mut config);
            }
        }
        if let Some(url) = self.server.and_then(|server| server.ngrok_url) {
            config.server_url = url;
        }
        config
    }
}

fn apply_columns(columns: &StoredColumns, config: &mut Configuration) {
    if let Some(asset_ids) = &columns.asset_id_search {
        for (position, stored) in asset_ids.iter().take(ASSET_ID_SLOTS).enumerate() {
            let slot = &mut config.columns.asset_id_search[position];
            match stored {
                None => *slot = None,
                Some(value) => match column_index(*value) {
                    Some(index) => *slot = Some(index),
                    None => warn!(
                        value,
                        position = position + 1,
                        "ignoring out-of-range asset ID column"
                    ),
                },
            }
        }
    }
    for field in RequiredField::ALL {
        let Some(value) = columns.get(field) else {
            continue;
        };
        match column_index(value) {
            Some(index) => config.columns.set(field, index),
            None => warn!(value, field = field.json_key(), "ignoring out-of-range column"),
        }
    }
}

fn apply_counting(counting: &StoredCounting, config: &mut Configuration) {
    if let Some(value) = counting.start_row {
        match u32::try_from(value).ok().map(|row| config.rows.with_start_row(row)) {
            Some(Ok(rows)) => config.rows = rows,
            _ => warn!(value, "ignoring out-of-range start row"),
        }
    }
    if let Some(value) = counting.end_row {
        match u32::try_from(value).ok().map(|row| config.rows.with_end_row(row)) {
            Some(Ok(rows)) => config.rows = rows,
            _ => warn!(value, "ignoring out-of-range end row"),
        }
    }
}

fn column_index(value: i64) -> Option<ColumnIndex> {
    usize::try_from(value)
        .ok()
        .and_then(|value| ColumnIndex::new(value).ok())
}
