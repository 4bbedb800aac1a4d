//! Tests for the save and preview flows against a real config directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use scanconfig_cli::settings::{Overrides, Session};
use scanconfig_cli::workflow;
use scanconfig_ingest::{PreviewWarning, WorkbookReader};
use scanconfig_persistence::ConfigurationStore;
use scanconfig_validate::{IssueKind, ValidationStatus};

/// A file that exists but is not a workbook, so sheet discovery fails.
fn placeholder_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("inventory.xlsx");
    fs::write(&path, b"placeholder").unwrap();
    path
}

fn session_with(store: &ConfigurationStore, overrides: Overrides) -> Session {
    let mut session = Session::open(store).unwrap();
    session.apply(&overrides).unwrap();
    session
}

#[test]
fn invalid_mapping_leaves_stored_file_untouched() {
    let dir = tempdir().unwrap();
    let workbook = placeholder_workbook(dir.path());
    let path = dir.path().join("config.json");
    let stored = r#"{"excel": {"sheets": {"inventory": "Stock", "other": "Misc"}}}"#;
    fs::write(&path, stored).unwrap();
    let store = ConfigurationStore::new(&path);
    let session = session_with(
        &store,
        Overrides {
            file: Some(workbook),
            room: Some("ZZZ".to_string()),
            ..Overrides::default()
        },
    );

    let result = workflow::save(&store, session, &mut WorkbookReader::new()).unwrap();

    assert!(result.outcome.is_none());
    assert_eq!(result.check.report.status(), ValidationStatus::Invalid);
    assert!(
        result
            .check
            .report
            .errors
            .iter()
            .any(|issue| issue.kind() == IssueKind::AddressOutOfRange)
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), stored);
    assert!(store.backups().unwrap().is_empty());
}

#[test]
fn save_replaces_malformed_file_with_backup() {
    let dir = tempdir().unwrap();
    let workbook = placeholder_workbook(dir.path());
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();
    let store = ConfigurationStore::new(&path);
    let session = session_with(
        &store,
        Overrides {
            file: Some(workbook),
            custom_inventory_sheet: Some("Stock".to_string()),
            custom_other_sheet: Some("Misc".to_string()),
            ..Overrides::default()
        },
    );
    assert!(session.load_error.is_some());

    let result = workflow::save(&store, session, &mut WorkbookReader::new()).unwrap();

    let outcome = result.outcome.expect("configuration saved");
    let backup = outcome.backup.expect("previous file backed up");
    assert_eq!(fs::read_to_string(&backup).unwrap(), "{ not json");
    assert_eq!(store.backups().unwrap(), vec![backup]);

    let reopened = Session::open(&store).unwrap();
    assert!(reopened.load_error.is_none());
    assert_eq!(reopened.loaded_from.as_deref(), Some(path.as_path()));
    assert_eq!(reopened.config.sheets.inventory.name(), Some("Stock"));
}

#[test]
fn unreadable_workbook_preview_warns_once() {
    let dir = tempdir().unwrap();
    let workbook = placeholder_workbook(dir.path());
    let store = ConfigurationStore::new(dir.path().join("config.json"));
    let session = session_with(
        &store,
        Overrides {
            file: Some(workbook),
            ..Overrides::default()
        },
    );

    let result = workflow::preview(session, &mut WorkbookReader::new(), None).unwrap();

    assert!(result.preview.table.is_none());
    assert!(matches!(
        result.preview.warnings.as_slice(),
        [PreviewWarning::WorkbookUnreadable { .. }]
    ));
    assert!(
        result.preview.warnings[0]
            .to_string()
            .starts_with("Could not read workbook: ")
    );
}
