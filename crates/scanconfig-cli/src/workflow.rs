//! Check, save and preview flows over a [`Session`].

use anyhow::{Result, anyhow};
use tracing::{debug, info, warn};

use scanconfig_ingest::{
    PreviewReport, PreviewWarning, SpreadsheetReader, load_summary, preview_mapping,
};
use scanconfig_model::SpreadsheetSummary;
use scanconfig_persistence::{ConfigurationStore, PersistenceError};

use crate::settings::Session;
use crate::types::{CheckResult, PreviewResult, SaveResult};

pub fn check(session: &Session) -> CheckResult {
    CheckResult {
        config: session.config.clone(),
        report: session.validate(),
        loaded_from: session.loaded_from.clone(),
        load_error: session.load_error.clone(),
    }
}

/// Read the workbook summary and match sheet choices against it.
pub fn discover_sheets<R>(
    session: &mut Session,
    reader: &mut R,
) -> scanconfig_ingest::Result<SpreadsheetSummary>
where
    R: SpreadsheetReader + ?Sized,
{
    let summary = load_summary(reader, &session.config.file_path)?;
    session.discover(&summary);
    Ok(summary)
}

/// Validate and, unless the mapping is invalid, save with a backup.
///
/// A blocked save leaves the stored file and its backups untouched.
pub fn save<R>(
    store: &ConfigurationStore,
    mut session: Session,
    reader: &mut R,
) -> Result<SaveResult>
where
    R: SpreadsheetReader + ?Sized,
{
    if session.source_status().is_present()
        && let Err(error) = discover_sheets(&mut session, reader)
    {
        warn!(%error, "Could not read workbook sheets");
    }

    let check = check(&session);
    if !check.report.status().allows_save() {
        warn!(errors = check.report.errors.len(), "Save blocked by validation errors");
        return Ok(SaveResult {
            check,
            outcome: None,
            backups: Vec::new(),
        });
    }
    let config = session
        .resolved(&check.report)
        .ok_or_else(|| anyhow!("column mapping did not resolve"))?;
    let outcome = store.save(&config).map_err(persistence_error)?;
    let backups = store.backups().map_err(persistence_error)?;
    info!(backups = backups.len(), "Configuration saved");
    Ok(SaveResult {
        check: CheckResult { config, ..check },
        outcome: Some(outcome),
        backups,
    })
}

/// Sample the mapped columns of `sheet`, or of the inventory sheet.
///
/// Unresolved columns yield an empty preview; workbook problems are
/// warnings.
pub fn preview<R>(
    mut session: Session,
    reader: &mut R,
    sheet: Option<&str>,
) -> Result<PreviewResult>
where
    R: SpreadsheetReader + ?Sized,
{
    let check = check(&session);
    let Some(mapping) = check.report.mapping() else {
        return Ok(PreviewResult {
            check,
            preview: PreviewReport::default(),
        });
    };
    if !session.source_status().is_present() {
        return Err(anyhow!(
            "Excel file does not exist: {}",
            session.config.file_path.display()
        ));
    }

    let summary = match discover_sheets(&mut session, reader) {
        Ok(summary) => summary,
        Err(error) => {
            warn!(%error, "Could not read workbook sheets");
            return Ok(PreviewResult {
                check,
                preview: PreviewReport {
                    table: None,
                    warnings: vec![PreviewWarning::WorkbookUnreadable {
                        message: error.to_string(),
                    }],
                },
            });
        }
    };
    let sheet = sheet
        .map(str::to_string)
        .or_else(|| session.config.sheets.inventory.name().map(str::to_string))
        .ok_or_else(|| anyhow!("No inventory sheet selected"))?;
    debug!(sheet = %sheet, "Previewing mapped columns");
    let preview = preview_mapping(
        reader,
        &session.config.file_path,
        &summary,
        &sheet,
        &mapping,
    );
    Ok(PreviewResult { check, preview })
}

/// Wrap a persistence failure with its user message and hint.
fn persistence_error(error: PersistenceError) -> anyhow::Error {
    let mut message = error.user_message();
    if let Some(suggestion) = error.suggestion() {
        message.push_str("\n  hint: ");
        message.push_str(&suggestion);
    }
    anyhow::Error::new(error).context(message)
}
