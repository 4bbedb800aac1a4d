//! CLI library components for the scanner configuration tool.

pub mod columns;
pub mod logging;
pub mod settings;
pub mod types;
pub mod workflow;
