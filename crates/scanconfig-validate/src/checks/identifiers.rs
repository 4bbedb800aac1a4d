//! Asset identifier columns.
//!
//! Slots set to the "None" sentinel are skipped. Anything else must resolve
//! to a column in A..ZZ, including blank labels.

use scanconfig_model::{ASSET_ID_SLOTS, AddressError, ColumnLabel, FieldSlot};

use crate::issue::Issue;
use crate::report::ResolvedColumn;

pub fn check(labels: &[String; ASSET_ID_SLOTS]) -> (Vec<ResolvedColumn>, Vec<Issue>) {
    let mut resolved = Vec::new();
    let mut issues = Vec::new();

    for (raw, position) in labels.iter().zip(1u8..) {
        match ColumnLabel::parse(raw) {
            Ok(label) => resolved.push(ResolvedColumn::new(FieldSlot::AssetId(position), &label)),
            Err(AddressError::Unmapped) => {}
            Err(_) => issues.push(Issue::InvalidAssetIdColumn {
                position,
                label: raw.trim().to_string(),
            }),
        }
    }

    (resolved, issues)
}
