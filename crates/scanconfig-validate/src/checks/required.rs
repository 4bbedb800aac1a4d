//! Required single-valued fields.

use scanconfig_model::{ColumnLabel, FieldSlot, MappingInput, RequiredField};

use crate::issue::Issue;
use crate::report::ResolvedColumn;

pub fn check(input: &MappingInput) -> (Vec<ResolvedColumn>, Vec<Issue>) {
    let mut resolved = Vec::new();
    let mut issues = Vec::new();

    for field in RequiredField::ALL {
        let raw = input.label(field);
        match ColumnLabel::parse(raw) {
            Ok(label) => resolved.push(ResolvedColumn::new(FieldSlot::Required(field), &label)),
            Err(error) if error.is_unset() => issues.push(Issue::MissingRequiredField {
                field,
                label: raw.trim().to_string(),
            }),
            Err(_) => issues.push(Issue::InvalidRequiredColumn {
                field,
                label: raw.trim().to_string(),
            }),
        }
    }

    (resolved, issues)
}
