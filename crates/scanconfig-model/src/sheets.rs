//! Sheet choices and the discovered workbook summary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sheets and used width discovered in a workbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadsheetSummary {
    pub sheet_names: Vec<String>,
    /// Used column count of the first sheet.
    pub column_count: usize,
}

impl SpreadsheetSummary {
    pub fn contains(&self, sheet: &str) -> bool {
        self.sheet_names.iter().any(|name| name == sheet)
    }

    pub fn first_sheet(&self) -> Option<&str> {
        self.sheet_names.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetRole {
    Inventory,
    Other,
}

impl fmt::Display for SheetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inventory => f.write_str("inventory"),
            Self::Other => f.write_str("other"),
        }
    }
}

/// How a sheet was chosen for one role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SheetChoice {
    /// One of the sheets found in the workbook.
    Discovered(String),
    /// Free-text name, possibly for a sheet that does not exist yet.
    Custom(String),
    #[default]
    Unselected,
}

impl SheetChoice {
    /// A picked discovered sheet wins; otherwise non-blank custom text.
    pub fn from_inputs(discovered: Option<&str>, custom: &str) -> Self {
        match discovered.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => Self::Discovered(name.to_string()),
            None if !custom.trim().is_empty() => Self::Custom(custom.trim().to_string()),
            None => Self::Unselected,
        }
    }

    /// Pre-select `name` when the workbook has a sheet called that.
    pub fn preferred(summary: &SpreadsheetSummary, name: &str) -> Self {
        if summary.contains(name) {
            Self::Discovered(name.to_string())
        } else {
            Self::Unselected
        }
    }

    /// Resolved sheet name, `None` when nothing usable was chosen.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Discovered(name) | Self::Custom(name) => {
                Some(name.trim()).filter(|name| !name.is_empty())
            }
            Self::Unselected => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.name().is_some()
    }
}

/// Inventory and other sheet choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSelection {
    pub inventory: SheetChoice,
    pub other: SheetChoice,
}

/// Both sheet names, resolved and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSheets {
    pub inventory: String,
    pub other: String,
}

impl SheetSelection {
    pub fn new(inventory: SheetChoice, other: SheetChoice) -> Self {
        Self { inventory, other }
    }

    pub fn get(&self, role: SheetRole) -> &SheetChoice {
        match role {
            SheetRole::Inventory => &self.inventory,
            SheetRole::Other => &self.other,
        }
    }

    /// Resolve both names or report which roles are still unselected.
    pub fn resolve(&self) -> Result<ResolvedSheets, Vec<SheetRole>> {
        match (self.inventory.name(), self.other.name()) {
            (Some(inventory), Some(other)) => Ok(ResolvedSheets {
                inventory: inventory.to_string(),
                other: other.to_string(),
            }),
            _ => Err([SheetRole::Inventory, SheetRole::Other]
                .into_iter()
                .filter(|role| !self.get(*role).is_selected())
                .collect()),
        }
    }
}
