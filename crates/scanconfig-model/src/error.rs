use thiserror::Error;

/// Why a column label or index could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("column label is empty")]
    Empty,
    #[error("column is not mapped")]
    Unmapped,
    #[error("invalid character '{character}' in column label '{label}'")]
    InvalidCharacter { label: String, character: char },
    #[error("column label '{label}' is outside A..ZZ")]
    LabelOutOfRange { label: String },
    #[error("column index {index} is outside 0..=701")]
    IndexOutOfRange { index: usize },
}

impl AddressError {
    /// True when the label was blank or the "None" sentinel rather than malformed.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Empty | Self::Unmapped)
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error("row {row} is outside {min}..={max}")]
    RowOutOfRange { row: u32, min: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
