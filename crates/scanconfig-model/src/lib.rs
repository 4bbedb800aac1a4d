//! Data model for the inventory scanner configuration.
//!
//! The types here describe what an operator maps and persists:
//!
//! - `address` - spreadsheet column labels (`A`..`ZZ`) and zero-based indices
//! - `mapping` - semantic fields and their column assignments
//! - `rows` - the inclusive row range the scanner counts
//! - `sheets` - inventory/other sheet choices and discovered workbook summary
//! - `config` - the aggregate record persisted as `config.json`

#![deny(unsafe_code)]

pub mod address;
pub mod config;
pub mod error;
pub mod mapping;
pub mod rows;
pub mod sheets;

pub use address::{
    ColumnIndex, ColumnLabel, MAX_COLUMNS, UNMAPPED_LABEL, all_labels, index_to_letter,
    letter_to_index,
};
pub use config::Configuration;
pub use error::{AddressError, ModelError, Result};
pub use mapping::{ASSET_ID_SLOTS, FieldMapping, FieldSlot, MappingInput, RequiredField};
pub use rows::{MAX_ROW, MIN_ROW, RowRange};
pub use sheets::{ResolvedSheets, SheetChoice, SheetRole, SheetSelection, SpreadsheetSummary};
