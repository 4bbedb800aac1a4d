//! Semantic fields and their column assignments.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::address::{ColumnIndex, index_to_letter};

/// Number of asset identifier columns searched by the scanner.
pub const ASSET_ID_SLOTS: usize = 3;

/// Single-valued fields that must always be mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    AssetName,
    AssetDescription,
    Status,
    Location,
    Room,
    MarkedCheck,
}

impl RequiredField {
    /// All required fields in mapping order.
    pub const ALL: [RequiredField; 6] = [
        Self::AssetName,
        Self::AssetDescription,
        Self::Status,
        Self::Location,
        Self::Room,
        Self::MarkedCheck,
    ];

    /// Name shown to operators ("Asset Name", "Marked Check", ...).
    pub fn display_name(self) -> &'static str {
        match self {
            Self::AssetName => "Asset Name",
            Self::AssetDescription => "Asset Description",
            Self::Status => "Status",
            Self::Location => "Location",
            Self::Room => "Room",
            Self::MarkedCheck => "Marked Check",
        }
    }

    /// Compact header used in preview tables.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::AssetName => "Name",
            Self::AssetDescription => "Desc",
            Self::Status => "Status",
            Self::Location => "Location",
            Self::Room => "Room",
            Self::MarkedCheck => "Marked",
        }
    }

    /// Key under `excel.columns` in the persisted document.
    pub fn json_key(self) -> &'static str {
        match self {
            Self::AssetName => "assetName",
            Self::AssetDescription => "assetDescription",
            Self::Status => "status",
            Self::Location => "location",
            Self::Room => "room",
            Self::MarkedCheck => "markedCheck",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A column slot of the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "field", rename_all = "camelCase")]
pub enum FieldSlot {
    /// Asset identifier component, 1-based position.
    AssetId(u8),
    Required(RequiredField),
}

impl FieldSlot {
    pub fn header(self) -> &'static str {
        match self {
            Self::AssetId(_) => "Asset ID",
            Self::Required(field) => field.short_name(),
        }
    }
}

impl fmt::Display for FieldSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetId(position) => write!(f, "Asset ID {position}"),
            Self::Required(field) => f.write_str(field.display_name()),
        }
    }
}

/// Resolved assignment of semantic fields to column indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub asset_id_search: [Option<ColumnIndex>; ASSET_ID_SLOTS],
    pub asset_name: ColumnIndex,
    pub asset_description: ColumnIndex,
    pub status: ColumnIndex,
    pub location: ColumnIndex,
    pub room: ColumnIndex,
    pub marked_check: ColumnIndex,
}

impl FieldMapping {
    pub fn get(&self, field: RequiredField) -> ColumnIndex {
        match field {
            RequiredField::AssetName => self.asset_name,
            RequiredField::AssetDescription => self.asset_description,
            RequiredField::Status => self.status,
            RequiredField::Location => self.location,
            RequiredField::Room => self.room,
            RequiredField::MarkedCheck => self.marked_check,
        }
    }

    pub fn set(&mut self, field: RequiredField, index: ColumnIndex) {
        let slot = match field {
            RequiredField::AssetName => &mut self.asset_name,
            RequiredField::AssetDescription => &mut self.asset_description,
            RequiredField::Status => &mut self.status,
            RequiredField::Location => &mut self.location,
            RequiredField::Room => &mut self.room,
            RequiredField::MarkedCheck => &mut self.marked_check,
        };
        *slot = index;
    }

    /// Mapped columns in field order: identifiers first (absent ones
    /// skipped), then the six required fields.
    pub fn columns(&self) -> Vec<(FieldSlot, ColumnIndex)> {
        let identifiers = self
            .asset_id_search
            .iter()
            .zip(1u8..)
            .filter_map(|(index, position)| index.map(|index| (FieldSlot::AssetId(position), index)));
        let required = RequiredField::ALL
            .into_iter()
            .map(|field| (FieldSlot::Required(field), self.get(field)));
        identifiers.chain(required).collect()
    }
}

/// Raw column labels as entered by the operator, before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingInput {
    pub asset_ids: [String; ASSET_ID_SLOTS],
    pub asset_name: String,
    pub asset_description: String,
    pub status: String,
    pub location: String,
    pub room: String,
    pub marked_check: String,
}

impl MappingInput {
    /// Labels for a resolved mapping; absent identifiers become `"None"`.
    pub fn from_mapping(mapping: &FieldMapping) -> Self {
        let mut input = Self {
            asset_ids: mapping.asset_id_search.map(index_to_letter),
            ..Self::default()
        };
        for field in RequiredField::ALL {
            *input.label_mut(field) = mapping.get(field).label().into_string();
        }
        input
    }

    pub fn label(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::AssetName => &self.asset_name,
            RequiredField::AssetDescription => &self.asset_description,
            RequiredField::Status => &self.status,
            RequiredField::Location => &self.location,
            RequiredField::Room => &self.room,
            RequiredField::MarkedCheck => &self.marked_check,
        }
    }

    pub fn label_mut(&mut self, field: RequiredField) -> &mut String {
        match field {
            RequiredField::AssetName => &mut self.asset_name,
            RequiredField::AssetDescription => &mut self.asset_description,
            RequiredField::Status => &mut self.status,
            RequiredField::Location => &mut self.location,
            RequiredField::Room => &mut self.room,
            RequiredField::MarkedCheck => &mut self.marked_check,
        }
    }
}
