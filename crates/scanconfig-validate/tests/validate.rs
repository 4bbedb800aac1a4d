//! Tests for mapping validation.

use std::path::PathBuf;

use scanconfig_model::{ColumnIndex, MappingInput, RequiredField, RowRange};
use scanconfig_validate::{
    Issue, IssueKind, SourceStatus, ValidationStatus, validate_mapping,
};

fn input(ids: [&str; 3], required: [&str; 6]) -> MappingInput {
    let mut input = MappingInput {
        asset_ids: ids.map(String::from),
        ..MappingInput::default()
    };
    for (field, label) in RequiredField::ALL.into_iter().zip(required) {
        *input.label_mut(field) = label.to_string();
    }
    input
}

fn default_input() -> MappingInput {
    input(["C", "D", "E"], ["F", "G", "P", "Q", "R", "S"])
}

#[test]
fn clean_mapping_is_fully_valid() {
    let report = validate_mapping(&default_input(), &SourceStatus::Present);

    assert_eq!(report.status(), ValidationStatus::Valid);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
    assert_eq!(report.identifiers.len(), 3);
    assert_eq!(report.required.len(), 6);

    let mapping = report.mapping().expect("resolved mapping");
    assert_eq!(
        mapping.asset_id_search,
        [2, 3, 4].map(|i| ColumnIndex::new(i).ok())
    );
    assert_eq!(mapping.status.get(), 15);
    assert_eq!(mapping.marked_check.get(), 18);
}

#[test]
fn missing_source_is_reported_without_short_circuit() {
    let source = SourceStatus::Missing {
        path: PathBuf::from("missing.xlsx"),
    };
    let report = validate_mapping(
        &input(["C", "None", "None"], ["F", "G", "P", "Q", "", "S"]),
        &source,
    );

    assert_eq!(report.status(), ValidationStatus::Invalid);
    assert_eq!(report.errors.len(), 2);
    assert_eq!(report.errors[0].message(), "Excel file does not exist");
    assert_eq!(report.errors[1].kind(), IssueKind::MissingRequiredField);
    assert_eq!(report.errors[1].field(), Some(RequiredField::Room));
}

#[test]
fn overlap_with_identifier_is_a_warning() {
    let report = validate_mapping(
        &input(["C", "None", "None"], ["F", "G", "C", "Q", "R", "S"]),
        &SourceStatus::Present,
    );

    assert_eq!(report.status(), ValidationStatus::ValidWithWarnings);
    assert!(report.errors.is_empty());
    assert_eq!(
        report.warnings,
        vec![Issue::ColumnOverlap {
            field: RequiredField::Status,
            label: "C".to_string(),
        }]
    );
    assert!(report.warnings[0].message().contains("Status"));
    assert!(report.status().allows_save());
    assert!(report.mapping().is_some());
}

#[test]
fn out_of_range_room_blocks() {
    let report = validate_mapping(
        &input(["C", "D", "E"], ["F", "G", "P", "Q", "ZZZ", "S"]),
        &SourceStatus::Present,
    );

    assert_eq!(report.status(), ValidationStatus::Invalid);
    assert!(!report.status().allows_save());
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].kind(), IssueKind::AddressOutOfRange);
    assert!(report.errors[0].message().contains("Room"));
    assert!(report.required_column(RequiredField::Room).is_none());
    assert!(report.mapping().is_none());
}

#[test]
fn unmapped_identifiers_are_skipped_but_blank_ones_are_errors() {
    let report = validate_mapping(
        &input(["None", "", "AB"], ["F", "G", "P", "Q", "R", "S"]),
        &SourceStatus::Present,
    );

    assert_eq!(
        report.errors,
        vec![Issue::InvalidAssetIdColumn {
            position: 2,
            label: String::new(),
        }]
    );
    assert_eq!(report.identifiers.len(), 1);
    assert_eq!(report.identifiers[0].label, "AB");
    assert_eq!(report.identifiers[0].index.get(), 27);
}

#[test]
fn issues_are_collected_in_rule_order() {
    let source = SourceStatus::Missing {
        path: PathBuf::from("missing.xlsx"),
    };
    let report = validate_mapping(
        &input(["A1", "None", "F"], ["None", "G", "P", "Q", "R", "F"]),
        &source,
    );

    let kinds: Vec<IssueKind> = report.errors.iter().map(Issue::kind).collect();
    assert_eq!(
        kinds,
        vec![
            IssueKind::SourceFileMissing,
            IssueKind::AddressOutOfRange,
            IssueKind::MissingRequiredField,
        ]
    );
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].field(), Some(RequiredField::MarkedCheck));
}

#[test]
fn validation_is_idempotent() {
    let mapping = input(["C", "zz", "None"], ["F", "G", "C", "Q", "ZZZ", "S"]);
    let source = SourceStatus::Missing {
        path: PathBuf::from("missing.xlsx"),
    };

    let first = validate_mapping(&mapping, &source);
    let second = validate_mapping(&mapping, &source);

    assert_eq!(first.errors, second.errors);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn detects_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.xlsx");
    assert!(!SourceStatus::detect(&path).is_present());

    std::fs::write(&path, b"placeholder").unwrap();
    assert_eq!(SourceStatus::detect(&path), SourceStatus::Present);
}

#[test]
fn summary_lines_describe_mapping() {
    let report = validate_mapping(
        &input(["C", "None", "E"], ["F", "G", "P", "Q", "R", "S"]),
        &SourceStatus::Present,
    );
    let rows = RowRange::new(6, 357).unwrap();

    let lines = report.summary_lines(&rows, "https://example.test/api");

    assert_eq!(lines[0], "Asset ID Columns: C, E (indices: 2, 4)");
    assert_eq!(lines[1], "Asset Name: F (index: 5)");
    assert_eq!(lines[6], "Marked Check: S (index: 18)");
    assert_eq!(lines[7], "Row Range: 6-357 (Total: 352 items)");
    assert_eq!(lines[8], "ngrok URL: https://example.test/api");
}

#[test]
fn report_serializes_for_machine_output() {
    let report = validate_mapping(
        &input(["C", "None", "None"], ["F", "G", "C", "Q", "R", "S"]),
        &SourceStatus::Present,
    );
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["warnings"][0]["kind"], "columnOverlap");
    assert_eq!(json["warnings"][0]["field"], "status");
    assert_eq!(json["required"][2]["index"], 2);
}
