use std::path::PathBuf;

use scanconfig_ingest::PreviewReport;
use scanconfig_model::Configuration;
use scanconfig_persistence::SaveOutcome;
use scanconfig_validate::ValidationReport;

/// Outcome of validating the current settings.
#[derive(Debug)]
pub struct CheckResult {
    pub config: Configuration,
    pub report: ValidationReport,
    pub loaded_from: Option<PathBuf>,
    /// Stored file that was ignored, and why.
    pub load_error: Option<String>,
}

impl CheckResult {
    pub fn summary_lines(&self) -> Vec<String> {
        self.report
            .summary_lines(&self.config.rows, &self.config.server_url)
    }
}

#[derive(Debug)]
pub struct SaveResult {
    pub check: CheckResult,
    /// `None` when validation blocked the save.
    pub outcome: Option<SaveOutcome>,
    pub backups: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub check: CheckResult,
    pub preview: PreviewReport,
}
