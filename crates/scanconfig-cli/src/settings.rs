//! Shell defaults and how flags and the stored file override them.
//!
//! Every value resolves as: explicit flag, then the stored configuration,
//! then the defaults below.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use scanconfig_model::{
    ASSET_ID_SLOTS, ColumnLabel, Configuration, FieldMapping, MappingInput, RequiredField,
    RowRange, SheetChoice, SheetRole, SheetSelection, SpreadsheetSummary,
};
use scanconfig_persistence::{ConfigurationStore, PersistenceError};
use scanconfig_validate::{SourceStatus, ValidationReport, validate_mapping};

/// Placeholder path shown until a workbook is chosen.
pub const DEFAULT_WORKBOOK_PATH: &str = "EXCEL SHEET";
pub const DEFAULT_ASSET_ID_COLUMNS: [&str; ASSET_ID_SLOTS] = ["C", "D", "E"];
/// Required field columns in `RequiredField::ALL` order.
pub const DEFAULT_REQUIRED_COLUMNS: [&str; 6] = ["F", "G", "P", "Q", "R", "S"];
pub const DEFAULT_START_ROW: u32 = 6;
pub const DEFAULT_END_ROW: u32 = 357;
pub const DEFAULT_SERVER_URL: &str = "<PASTE_NGROK_ADDRESS_HERE>/api";
pub const PREFERRED_INVENTORY_SHEET: &str = "Sheet1";
pub const PREFERRED_OTHER_SHEET: &str = "Other";

/// Configuration used when nothing has been stored yet.
pub fn default_configuration() -> Result<Configuration> {
    let column = |label: &str| -> Result<_> {
        Ok(ColumnLabel::parse(label)
            .with_context(|| format!("default column {label}"))?
            .index())
    };
    let mut asset_id_search = [None; ASSET_ID_SLOTS];
    for (slot, label) in asset_id_search.iter_mut().zip(DEFAULT_ASSET_ID_COLUMNS) {
        *slot = Some(column(label)?);
    }
    let [asset_name, asset_description, status, location, room, marked_check] =
        DEFAULT_REQUIRED_COLUMNS;
    Ok(Configuration {
        file_path: PathBuf::from(DEFAULT_WORKBOOK_PATH),
        sheets: SheetSelection::default(),
        columns: FieldMapping {
            asset_id_search,
            asset_name: column(asset_name)?,
            asset_description: column(asset_description)?,
            status: column(status)?,
            location: column(location)?,
            room: column(room)?,
            marked_check: column(marked_check)?,
        },
        rows: RowRange::new(DEFAULT_START_ROW, DEFAULT_END_ROW)?,
        server_url: DEFAULT_SERVER_URL.to_string(),
    })
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub file: Option<PathBuf>,
    pub asset_ids: [Option<String>; ASSET_ID_SLOTS],
    pub asset_name: Option<String>,
    pub asset_description: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub room: Option<String>,
    pub marked_check: Option<String>,
    pub inventory_sheet: Option<String>,
    pub custom_inventory_sheet: Option<String>,
    pub other_sheet: Option<String>,
    pub custom_other_sheet: Option<String>,
    pub start_row: Option<u32>,
    pub end_row: Option<u32>,
    pub server_url: Option<String>,
}

impl Overrides {
    pub fn required(&self, field: RequiredField) -> Option<&str> {
        let value = match field {
            RequiredField::AssetName => &self.asset_name,
            RequiredField::AssetDescription => &self.asset_description,
            RequiredField::Status => &self.status,
            RequiredField::Location => &self.location,
            RequiredField::Room => &self.room,
            RequiredField::MarkedCheck => &self.marked_check,
        };
        value.as_deref()
    }

    fn sheet(&self, role: SheetRole) -> Option<SheetChoice> {
        let (discovered, custom) = match role {
            SheetRole::Inventory => (&self.inventory_sheet, &self.custom_inventory_sheet),
            SheetRole::Other => (&self.other_sheet, &self.custom_other_sheet),
        };
        if discovered.is_none() && custom.is_none() {
            return None;
        }
        Some(SheetChoice::from_inputs(
            discovered.as_deref(),
            custom.as_deref().unwrap_or_default(),
        ))
    }
}

/// Working state of one command: the resolved configuration plus the raw
/// column labels still awaiting validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub config: Configuration,
    pub input: MappingInput,
    /// Set when the stored configuration file was found.
    pub loaded_from: Option<PathBuf>,
    /// Why an existing configuration file was ignored.
    pub load_error: Option<String>,
}

impl Session {
    /// Start from the stored configuration, or defaults when there is none.
    ///
    /// An unreadable or malformed file is not fatal: it is recorded in
    /// `load_error` and the defaults are used, so a later save can replace it.
    pub fn open(store: &ConfigurationStore) -> Result<Self> {
        let defaults = default_configuration()?;
        match store.load(defaults.clone()) {
            Ok(Some(config)) => Ok(Self::new(config, Some(store.path().to_path_buf()))),
            Ok(None) => Ok(Self::new(defaults, None)),
            Err(error) if error.is_read_error() => {
                let message = describe_load_error(&error);
                warn!(%message, "Continuing with default configuration");
                Ok(Self {
                    load_error: Some(message),
                    ..Self::new(defaults, None)
                })
            }
            Err(error) => Err(anyhow::Error::new(error)
                .context(format!("load configuration from {}", store.path().display()))),
        }
    }

    pub fn new(config: Configuration, loaded_from: Option<PathBuf>) -> Self {
        let input = MappingInput::from_mapping(&config.columns);
        Self {
            config,
            input,
            loaded_from,
            load_error: None,
        }
    }

    /// Apply command-line values on top of the current state.
    pub fn apply(&mut self, overrides: &Overrides) -> Result<()> {
        if let Some(file) = &overrides.file {
            self.config.file_path.clone_from(file);
        }
        for (label, value) in self.input.asset_ids.iter_mut().zip(&overrides.asset_ids) {
            if let Some(value) = value {
                label.clone_from(value);
            }
        }
        for field in RequiredField::ALL {
            if let Some(value) = overrides.required(field) {
                *self.input.label_mut(field) = value.to_string();
            }
        }
        if let Some(choice) = overrides.sheet(SheetRole::Inventory) {
            self.config.sheets.inventory = choice;
        }
        if let Some(choice) = overrides.sheet(SheetRole::Other) {
            self.config.sheets.other = choice;
        }
        if let Some(row) = overrides.start_row {
            self.config.rows = self.config.rows.with_start_row(row).context("start row")?;
        }
        if let Some(row) = overrides.end_row {
            self.config.rows = self.config.rows.with_end_row(row).context("end row")?;
        }
        if let Some(url) = &overrides.server_url {
            self.config.server_url.clone_from(url);
        }
        Ok(())
    }

    /// Match the sheet choices against the workbook.
    ///
    /// Typed names found in the workbook become discovered sheets; roles
    /// still unselected get the preferred sheet when it exists.
    pub fn discover(&mut self, summary: &SpreadsheetSummary) {
        let sheets = &mut self.config.sheets;
        for (choice, preferred) in [
            (&mut sheets.inventory, PREFERRED_INVENTORY_SHEET),
            (&mut sheets.other, PREFERRED_OTHER_SHEET),
        ] {
            *choice = match std::mem::take(choice) {
                SheetChoice::Custom(name) if summary.contains(&name) => {
                    SheetChoice::Discovered(name)
                }
                other if !other.is_selected() => SheetChoice::preferred(summary, preferred),
                other => other,
            };
        }
    }

    pub fn source_status(&self) -> SourceStatus {
        SourceStatus::detect(&self.config.file_path)
    }

    pub fn validate(&self) -> ValidationReport {
        validate_mapping(&self.input, &self.source_status())
    }

    /// The configuration to persist, when the report resolved every column.
    pub fn resolved(&self, report: &ValidationReport) -> Option<Configuration> {
        report.mapping().map(|columns| Configuration {
            columns,
            ..self.config.clone()
        })
    }
}

fn describe_load_error(error: &PersistenceError) -> String {
    match std::error::Error::source(error) {
        Some(cause) => format!("{}: {cause}", error.user_message()),
        None => error.user_message(),
    }
}
