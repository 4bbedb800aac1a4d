//! Column label and index conversion for the `columns` command.

use std::fmt;

use scanconfig_model::{AddressError, ColumnIndex, ColumnLabel, UNMAPPED_LABEL};

/// Result of converting one command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    ToIndex { label: ColumnLabel, index: ColumnIndex },
    ToLabel { index: ColumnIndex, label: ColumnLabel },
    Unmapped,
    Invalid { input: String, error: AddressError },
}

impl Conversion {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToIndex { label, index } => write!(f, "{label} -> {index}"),
            Self::ToLabel { index, label } => write!(f, "{index} -> {label}"),
            Self::Unmapped => write!(f, "{UNMAPPED_LABEL} -> not mapped"),
            Self::Invalid { input, error } => write!(f, "{input}: {error}"),
        }
    }
}

/// Digits are read as a zero-based index, anything else as a label.
pub fn convert(input: &str) -> Conversion {
    let trimmed = input.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let index = trimmed
            .parse::<usize>()
            .map_err(|_| AddressError::IndexOutOfRange { index: usize::MAX })
            .and_then(ColumnIndex::new);
        return match index {
            Ok(index) => Conversion::ToLabel {
                index,
                label: index.label(),
            },
            Err(error) => Conversion::Invalid {
                input: trimmed.to_string(),
                error,
            },
        };
    }
    match ColumnLabel::parse(trimmed) {
        Ok(label) => Conversion::ToIndex {
            index: label.index(),
            label,
        },
        Err(AddressError::Unmapped) => Conversion::Unmapped,
        Err(error) => Conversion::Invalid {
            input: input.to_string(),
            error,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_convert_to_labels() {
        assert_eq!(convert("701").to_string(), "701 -> ZZ");
        assert!(convert("702").is_invalid());
    }

    #[test]
    fn letters_convert_to_indices() {
        assert_eq!(convert(" ab ").to_string(), "AB -> 27");
        assert_eq!(convert("none"), Conversion::Unmapped);
    }
}
