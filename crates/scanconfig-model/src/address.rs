//! Spreadsheet column addressing.
//!
//! Columns are addressed either by a human-facing label (`A`..`ZZ`) or by a
//! zero-based index (`0..=701`). The two are mutual inverses over that range;
//! three-letter columns are not addressable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AddressError;

/// Number of addressable columns (`A`..`ZZ`).
pub const MAX_COLUMNS: usize = 702;

/// Label shown for a column slot that is intentionally left unmapped.
pub const UNMAPPED_LABEL: &str = "None";

const ALPHABET_LEN: u16 = 26;

/// Zero-based column index in `0..=701`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct ColumnIndex(u16);

impl ColumnIndex {
    /// Last addressable column (`ZZ`).
    pub const MAX: ColumnIndex = ColumnIndex(701);

    pub fn new(index: usize) -> Result<Self, AddressError> {
        match u16::try_from(index) {
            Ok(value) if index < MAX_COLUMNS => Ok(Self(value)),
            _ => Err(AddressError::IndexOutOfRange { index }),
        }
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// Canonical label for this index.
    pub fn label(self) -> ColumnLabel {
        let index = self.0;
        let mut text = String::with_capacity(2);
        if index < ALPHABET_LEN {
            text.push(letter(index));
        } else {
            let offset = index - ALPHABET_LEN;
            text.push(letter(offset / ALPHABET_LEN));
            text.push(letter(offset % ALPHABET_LEN));
        }
        ColumnLabel(text)
    }
}

impl TryFrom<u16> for ColumnIndex {
    type Error = AddressError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(usize::from(value))
    }
}

impl From<ColumnIndex> for u16 {
    fn from(index: ColumnIndex) -> Self {
        index.0
    }
}

impl fmt::Display for ColumnIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical (uppercase, one or two letter) column label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnLabel(String);

impl ColumnLabel {
    /// Parse a user-entered label.
    ///
    /// Input is trimmed and uppercased. Blank input and the `"None"` sentinel
    /// are reported as unset; anything longer than two letters is out of range.
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }
        if trimmed.eq_ignore_ascii_case(UNMAPPED_LABEL) {
            return Err(AddressError::Unmapped);
        }
        let canonical = trimmed.to_ascii_uppercase();
        if let Some(character) = canonical.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(AddressError::InvalidCharacter {
                label: trimmed.to_string(),
                character,
            });
        }
        if canonical.len() > 2 {
            return Err(AddressError::LabelOutOfRange { label: canonical });
        }
        Ok(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Zero-based index of this label.
    pub fn index(&self) -> ColumnIndex {
        // Bijective base-26: A=1 .. Z=26, shifted to zero-based at the end.
        let value = self
            .0
            .bytes()
            .fold(0u16, |acc, b| acc * ALPHABET_LEN + u16::from(b - b'A') + 1);
        ColumnIndex(value - 1)
    }
}

impl FromStr for ColumnLabel {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ColumnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ColumnIndex> for ColumnLabel {
    fn from(index: ColumnIndex) -> Self {
        index.label()
    }
}

/// Convert a label to its zero-based index.
///
/// Returns `None` for blank input, the `"None"` sentinel, and anything that is
/// not a one or two letter column label.
pub fn letter_to_index(label: &str) -> Option<ColumnIndex> {
    ColumnLabel::parse(label).ok().map(|label| label.index())
}

/// Convert an optional index to its label, `"None"` when absent.
pub fn index_to_letter(index: Option<ColumnIndex>) -> String {
    match index {
        Some(index) => index.label().into_string(),
        None => UNMAPPED_LABEL.to_string(),
    }
}

/// Every addressable label in index order, `A` through `ZZ`.
pub fn all_labels() -> impl Iterator<Item = ColumnLabel> {
    (0..ColumnIndex::MAX.0 + 1).map(|index| ColumnIndex(index).label())
}

fn letter(position: u16) -> char {
    char::from(b'A' + position as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(letter_to_index("A").map(ColumnIndex::get), Some(0));
        assert_eq!(letter_to_index("Z").map(ColumnIndex::get), Some(25));
        assert_eq!(letter_to_index("AA").map(ColumnIndex::get), Some(26));
        assert_eq!(letter_to_index("AZ").map(ColumnIndex::get), Some(51));
        assert_eq!(letter_to_index("BA").map(ColumnIndex::get), Some(52));
        assert_eq!(letter_to_index("ZZ").map(ColumnIndex::get), Some(701));
        assert_eq!(index_to_letter(Some(ColumnIndex::MAX)), "ZZ");
        assert_eq!(index_to_letter(ColumnIndex::new(26).ok()), "AA");
    }

    #[test]
    fn input_is_trimmed_and_uppercased() {
        assert_eq!(letter_to_index("  c ").map(ColumnIndex::get), Some(2));
        assert_eq!(letter_to_index("ab").map(ColumnIndex::get), Some(27));
    }

    #[test]
    fn unset_labels_resolve_to_none() {
        assert_eq!(letter_to_index(""), None);
        assert_eq!(letter_to_index("   "), None);
        assert_eq!(letter_to_index("None"), None);
        assert_eq!(index_to_letter(None), UNMAPPED_LABEL);
        assert!(ColumnLabel::parse("None").unwrap_err().is_unset());
    }

    #[test]
    fn three_letters_are_out_of_range() {
        assert_eq!(
            ColumnLabel::parse("zzz"),
            Err(AddressError::LabelOutOfRange {
                label: "ZZZ".to_string()
            })
        );
        assert_eq!(letter_to_index("AAA"), None);
    }

    #[test]
    fn non_letters_are_rejected() {
        assert!(matches!(
            ColumnLabel::parse("A1"),
            Err(AddressError::InvalidCharacter { character: '1', .. })
        ));
        assert_eq!(letter_to_index("Ä"), None);
    }

    #[test]
    fn index_bound_is_enforced() {
        assert!(ColumnIndex::new(701).is_ok());
        assert_eq!(
            ColumnIndex::new(702),
            Err(AddressError::IndexOutOfRange { index: 702 })
        );
    }

    #[test]
    fn all_labels_cover_a_to_zz() {
        let labels: Vec<ColumnLabel> = all_labels().collect();
        assert_eq!(labels.len(), MAX_COLUMNS);
        assert_eq!(labels[0].as_str(), "A");
        assert_eq!(labels[25].as_str(), "Z");
        assert_eq!(labels[26].as_str(), "AA");
        assert_eq!(labels[MAX_COLUMNS - 1].as_str(), "ZZ");
    }

    #[test]
    fn index_serializes_as_integer() {
        let index = ColumnIndex::new(15).unwrap();
        assert_eq!(serde_json::to_string(&index).unwrap(), "15");
        let parsed: ColumnIndex = serde_json::from_str("15").unwrap();
        assert_eq!(parsed, index);
        assert!(serde_json::from_str::<ColumnIndex>("900").is_err());
    }
}
