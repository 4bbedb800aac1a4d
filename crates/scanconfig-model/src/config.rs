//! The aggregate configuration record.

use std::path::PathBuf;

use crate::mapping::FieldMapping;
use crate::rows::RowRange;
use crate::sheets::SheetSelection;

/// Everything the scanner needs: where the workbook lives, which sheets and
/// columns to read, which rows to count, and where the server is.
///
/// Built fresh from operator input on every save; there is no identity
/// beyond the file it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub file_path: PathBuf,
    pub sheets: SheetSelection,
    pub columns: FieldMapping,
    pub rows: RowRange,
    /// Opaque server address; reachability is not checked.
    pub server_url: String,
}
