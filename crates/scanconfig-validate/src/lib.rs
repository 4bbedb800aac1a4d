//! Structural validation of scanner column mappings.
//!
//! `validate_mapping` runs every check in one pass and never stops at the
//! first problem:
//!
//! 1. the source spreadsheet exists
//! 2. each asset identifier not set to "None" resolves to a column
//! 3. each required field resolves to a column
//! 4. required fields sharing a column with an identifier (warning only)

#![deny(unsafe_code)]

mod checks;
pub mod issue;
pub mod report;
pub mod source;

use tracing::debug;

use scanconfig_model::MappingInput;

pub use issue::{Issue, IssueKind, Severity};
pub use report::{ResolvedColumn, ValidationReport, ValidationStatus};
pub use source::SourceStatus;

/// Validate raw column labels against the source spreadsheet status.
///
/// The result depends only on the inputs, so repeated calls agree.
pub fn validate_mapping(input: &MappingInput, source: &SourceStatus) -> ValidationReport {
    let mut issues = checks::source::check(source);

    let (identifiers, identifier_issues) = checks::identifiers::check(&input.asset_ids);
    issues.extend(identifier_issues);

    let (required, required_issues) = checks::required::check(input);
    issues.extend(required_issues);

    issues.extend(checks::overlap::check(&identifiers, &required));

    let report = ValidationReport::from_issues(issues, identifiers, required);
    debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        status = ?report.status(),
        "validated column mapping"
    );
    report
}
