//! Validation issue types.
//!
//! Each variant carries only the data needed to describe it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use scanconfig_model::RequiredField;

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks save.
    Error,
    /// Shown to the operator, does not block.
    Warning,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// Coarse classification of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    SourceFileMissing,
    AddressOutOfRange,
    MissingRequiredField,
    ColumnOverlap,
}

/// Validation issue found in a proposed mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Issue {
    /// Spreadsheet does not exist at the configured path.
    SourceFileMissing { path: PathBuf },
    /// Asset identifier label does not resolve to a column.
    InvalidAssetIdColumn { position: u8, label: String },
    /// Required field was left blank or set to "None".
    MissingRequiredField { field: RequiredField, label: String },
    /// Required field label does not resolve to a column in A..ZZ.
    InvalidRequiredColumn { field: RequiredField, label: String },
    /// Required field reads the same column as an asset identifier.
    ColumnOverlap { field: RequiredField, label: String },
}

impl Issue {
    pub fn kind(&self) -> IssueKind {
        match self {
            Issue::SourceFileMissing { .. } => IssueKind::SourceFileMissing,
            Issue::InvalidAssetIdColumn { .. } => IssueKind::AddressOutOfRange,
            Issue::InvalidRequiredColumn { .. } => IssueKind::AddressOutOfRange,
            Issue::MissingRequiredField { .. } => IssueKind::MissingRequiredField,
            Issue::ColumnOverlap { .. } => IssueKind::ColumnOverlap,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Issue::ColumnOverlap { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Field the issue is about, if any.
    pub fn field(&self) -> Option<RequiredField> {
        match self {
            Issue::MissingRequiredField { field, .. }
            | Issue::InvalidRequiredColumn { field, .. }
            | Issue::ColumnOverlap { field, .. } => Some(*field),
            Issue::SourceFileMissing { .. } | Issue::InvalidAssetIdColumn { .. } => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::SourceFileMissing { .. } => "Excel file does not exist".to_string(),
            Issue::InvalidAssetIdColumn { label, .. } => {
                format!("Invalid Asset ID column: {label}")
            }
            Issue::MissingRequiredField { field, label } => {
                if label.trim().is_empty() {
                    format!("{field} column is not set")
                } else {
                    format!("{field} column is not set ({label})")
                }
            }
            Issue::InvalidRequiredColumn { field, label } => {
                format!("Invalid {field} column: {label}")
            }
            Issue::ColumnOverlap { field, label } => {
                format!("{field} column {label} overlaps with Asset ID columns")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_the_only_warning() {
        let overlap = Issue::ColumnOverlap {
            field: RequiredField::Status,
            label: "C".to_string(),
        };
        assert_eq!(overlap.severity(), Severity::Warning);
        assert_eq!(overlap.kind(), IssueKind::ColumnOverlap);

        let missing = Issue::SourceFileMissing {
            path: PathBuf::from("inventory.xlsx"),
        };
        assert_eq!(missing.severity(), Severity::Error);
        assert_eq!(missing.field(), None);
    }

    #[test]
    fn messages_name_the_field_and_label() {
        let invalid = Issue::InvalidRequiredColumn {
            field: RequiredField::Room,
            label: "ZZZ".to_string(),
        };
        assert_eq!(invalid.message(), "Invalid Room column: ZZZ");

        let unset = Issue::MissingRequiredField {
            field: RequiredField::MarkedCheck,
            label: String::new(),
        };
        assert_eq!(unset.message(), "Marked Check column is not set");
    }
}
