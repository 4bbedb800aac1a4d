//! Inclusive row range counted by the scanner.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// First selectable spreadsheet row (1-based).
pub const MIN_ROW: u32 = 1;
/// Last selectable spreadsheet row.
pub const MAX_ROW: u32 = 1_000_000;

/// `{start_row, end_row}`, both 1-based and inclusive.
///
/// An end before the start is an empty range, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowRange {
    start_row: u32,
    end_row: u32,
}

impl RowRange {
    pub fn new(start_row: u32, end_row: u32) -> Result<Self> {
        check_row(start_row)?;
        check_row(end_row)?;
        Ok(Self { start_row, end_row })
    }

    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    pub fn end_row(&self) -> u32 {
        self.end_row
    }

    /// Number of rows in the range, zero when `end_row < start_row`.
    pub fn total_count(&self) -> u32 {
        if self.end_row < self.start_row {
            0
        } else {
            self.end_row - self.start_row + 1
        }
    }

    pub fn with_start_row(self, start_row: u32) -> Result<Self> {
        Self::new(start_row, self.end_row)
    }

    pub fn with_end_row(self, end_row: u32) -> Result<Self> {
        Self::new(self.start_row, end_row)
    }
}

fn check_row(row: u32) -> Result<()> {
    if (MIN_ROW..=MAX_ROW).contains(&row) {
        Ok(())
    } else {
        Err(ModelError::RowOutOfRange {
            row,
            min: MIN_ROW,
            max: MAX_ROW,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_count_is_inclusive() {
        let range = RowRange::new(6, 357).unwrap();
        assert_eq!(range.total_count(), 352);
        assert_eq!(RowRange::new(4, 4).unwrap().total_count(), 1);
    }

    #[test]
    fn reversed_range_is_empty() {
        let range = RowRange::new(10, 5).unwrap();
        assert_eq!(range.total_count(), 0);
    }

    #[test]
    fn rows_must_be_in_bounds() {
        assert!(matches!(
            RowRange::new(0, 5),
            Err(ModelError::RowOutOfRange { row: 0, .. })
        ));
        assert!(RowRange::new(1, MAX_ROW + 1).is_err());
        assert!(RowRange::new(MIN_ROW, MAX_ROW).is_ok());
    }
}
