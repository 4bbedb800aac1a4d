//! Required fields sharing a column with an asset identifier.
//!
//! Reading one physical column for two roles is allowed, so this only warns.

use scanconfig_model::FieldSlot;

use crate::issue::Issue;
use crate::report::ResolvedColumn;

pub fn check(identifiers: &[ResolvedColumn], required: &[ResolvedColumn]) -> Vec<Issue> {
    required
        .iter()
        .filter(|column| identifiers.iter().any(|id| id.index == column.index))
        .filter_map(|column| match column.slot {
            FieldSlot::Required(field) => Some(Issue::ColumnOverlap {
                field,
                label: column.label.clone(),
            }),
            FieldSlot::AssetId(_) => None,
        })
        .collect()
}
