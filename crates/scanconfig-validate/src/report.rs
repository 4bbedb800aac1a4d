//! Validation results.

use serde::Serialize;

use scanconfig_model::{
    ASSET_ID_SLOTS, ColumnIndex, ColumnLabel, FieldMapping, FieldSlot, RequiredField, RowRange,
};

use crate::issue::{Issue, IssueKind, Severity};

/// A slot whose label parsed, with its canonical label and index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    pub slot: FieldSlot,
    pub label: String,
    pub index: ColumnIndex,
}

impl ResolvedColumn {
    pub fn new(slot: FieldSlot, label: &ColumnLabel) -> Self {
        Self {
            slot,
            label: label.as_str().to_string(),
            index: label.index(),
        }
    }
}

/// Three-way outcome of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationStatus {
    Invalid,
    ValidWithWarnings,
    Valid,
}

impl ValidationStatus {
    pub fn allows_save(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// Errors and warnings for one mapping, plus every slot that resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    /// Resolved asset identifier columns, in slot order.
    pub identifiers: Vec<ResolvedColumn>,
    /// Resolved required columns, in field order.
    pub required: Vec<ResolvedColumn>,
}

impl ValidationReport {
    pub(crate) fn from_issues(
        issues: Vec<Issue>,
        identifiers: Vec<ResolvedColumn>,
        required: Vec<ResolvedColumn>,
    ) -> Self {
        let (errors, warnings): (Vec<Issue>, Vec<Issue>) = issues
            .into_iter()
            .partition(|issue| issue.severity() == Severity::Error);
        Self {
            errors,
            warnings,
            identifiers,
            required,
        }
    }

    pub fn status(&self) -> ValidationStatus {
        if !self.errors.is_empty() {
            ValidationStatus::Invalid
        } else if !self.warnings.is_empty() {
            ValidationStatus::ValidWithWarnings
        } else {
            ValidationStatus::Valid
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn required_column(&self, field: RequiredField) -> Option<&ResolvedColumn> {
        self.required
            .iter()
            .find(|column| column.slot == FieldSlot::Required(field))
    }

    /// The resolved mapping, when every column slot parsed.
    ///
    /// A missing source file does not prevent this; address errors do.
    pub fn mapping(&self) -> Option<FieldMapping> {
        let address_errors = self.errors.iter().any(|issue| {
            matches!(
                issue.kind(),
                IssueKind::AddressOutOfRange | IssueKind::MissingRequiredField
            )
        });
        if address_errors {
            return None;
        }

        let mut asset_id_search = [None; ASSET_ID_SLOTS];
        for column in &self.identifiers {
            if let FieldSlot::AssetId(position) = column.slot
                && let Some(slot) = asset_id_search.get_mut(usize::from(position) - 1)
            {
                *slot = Some(column.index);
            }
        }
        let index = |field| self.required_column(field).map(|column| column.index);

        Some(FieldMapping {
            asset_id_search,
            asset_name: index(RequiredField::AssetName)?,
            asset_description: index(RequiredField::AssetDescription)?,
            status: index(RequiredField::Status)?,
            location: index(RequiredField::Location)?,
            room: index(RequiredField::Room)?,
            marked_check: index(RequiredField::MarkedCheck)?,
        })
    }

    /// Configuration summary shown next to the status line.
    pub fn summary_lines(&self, rows: &RowRange, server_url: &str) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.required.len() + 3);
        if self.identifiers.is_empty() {
            lines.push("Asset ID Columns: None (indices: None)".to_string());
        } else {
            let labels: Vec<&str> = self
                .identifiers
                .iter()
                .map(|column| column.label.as_str())
                .collect();
            let indices: Vec<String> = self
                .identifiers
                .iter()
                .map(|column| column.index.to_string())
                .collect();
            lines.push(format!(
                "Asset ID Columns: {} (indices: {})",
                labels.join(", "),
                indices.join(", ")
            ));
        }
        for column in &self.required {
            lines.push(format!(
                "{}: {} (index: {})",
                column.slot, column.label, column.index
            ));
        }
        lines.push(format!(
            "Row Range: {}-{} (Total: {} items)",
            rows.start_row(),
            rows.end_row(),
            rows.total_count()
        ));
        lines.push(format!("ngrok URL: {server_url}"));
        lines
    }
}
