use anyhow::{Context, Result};
use tracing::info_span;

use scanconfig_cli::columns::{Conversion, convert};
use scanconfig_cli::settings::{Overrides, Session};
use scanconfig_cli::types::{CheckResult, PreviewResult, SaveResult};
use scanconfig_cli::workflow;
use scanconfig_ingest::{WorkbookReader, load_summary};
use scanconfig_model::{SpreadsheetSummary, all_labels};
use scanconfig_persistence::ConfigurationStore;

use crate::cli::{CheckArgs, ColumnsArgs, MappingArgs, PreviewArgs, SaveArgs, SheetsArgs};

/// `None` means list every column instead of converting.
pub fn run_columns(args: &ColumnsArgs) -> Option<Vec<Conversion>> {
    if args.columns.is_empty() {
        return None;
    }
    Some(args.columns.iter().map(String::as_str).map(convert).collect())
}

pub fn column_listing() -> Vec<(usize, String)> {
    all_labels()
        .map(|label| (label.index().get(), label.into_string()))
        .collect()
}

pub fn run_sheets(store: &ConfigurationStore, args: &SheetsArgs) -> Result<SpreadsheetSummary> {
    let path = match &args.file {
        Some(path) => path.clone(),
        None => Session::open(store)?.config.file_path,
    };
    let mut reader = WorkbookReader::new();
    load_summary(&mut reader, &path).with_context(|| format!("read {}", path.display()))
}

pub fn run_check(store: &ConfigurationStore, args: &CheckArgs) -> Result<CheckResult> {
    let session = open_session(store, &mapping_overrides(&args.mapping))?;
    Ok(workflow::check(&session))
}

pub fn run_save(store: &ConfigurationStore, args: &SaveArgs) -> Result<SaveResult> {
    let span = info_span!("save", path = %store.path().display());
    let _guard = span.enter();

    let mut overrides = mapping_overrides(&args.mapping);
    overrides.inventory_sheet.clone_from(&args.inventory_sheet);
    overrides
        .custom_inventory_sheet
        .clone_from(&args.custom_inventory_sheet);
    overrides.other_sheet.clone_from(&args.other_sheet);
    overrides.custom_other_sheet.clone_from(&args.custom_other_sheet);
    overrides.start_row = args.start_row;
    overrides.end_row = args.end_row;
    overrides.server_url.clone_from(&args.ngrok_url);

    let session = open_session(store, &overrides)?;
    workflow::save(store, session, &mut WorkbookReader::new())
}

/// `Ok(None)` when no configuration has been stored yet.
pub fn run_show(store: &ConfigurationStore) -> Result<Option<CheckResult>> {
    let session = Session::open(store)?;
    if session.loaded_from.is_none() && session.load_error.is_none() {
        return Ok(None);
    }
    Ok(Some(workflow::check(&session)))
}

pub fn run_preview(store: &ConfigurationStore, args: &PreviewArgs) -> Result<PreviewResult> {
    let session = open_session(store, &mapping_overrides(&args.mapping))?;
    workflow::preview(session, &mut WorkbookReader::new(), args.sheet.as_deref())
}

fn open_session(store: &ConfigurationStore, overrides: &Overrides) -> Result<Session> {
    let mut session = Session::open(store)?;
    session.apply(overrides)?;
    Ok(session)
}

fn mapping_overrides(args: &MappingArgs) -> Overrides {
    Overrides {
        file: args.file.clone(),
        asset_ids: [
            args.asset_id1.clone(),
            args.asset_id2.clone(),
            args.asset_id3.clone(),
        ],
        asset_name: args.asset_name.clone(),
        asset_description: args.asset_description.clone(),
        status: args.status.clone(),
        location: args.location.clone(),
        room: args.room.clone(),
        marked_check: args.marked_check.clone(),
        ..Overrides::default()
    }
}
