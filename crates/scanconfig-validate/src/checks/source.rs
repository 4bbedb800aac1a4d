//! Source spreadsheet presence.

use crate::issue::Issue;
use crate::source::SourceStatus;

pub fn check(source: &SourceStatus) -> Vec<Issue> {
    match source {
        SourceStatus::Present => Vec::new(),
        SourceStatus::Missing { path } => vec![Issue::SourceFileMissing { path: path.clone() }],
    }
}
