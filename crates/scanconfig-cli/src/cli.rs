//! CLI argument definitions for the scanner configuration tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use scanconfig_persistence::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(
    name = "scanconfig",
    version,
    about = "Map inventory spreadsheet columns for the scanning server",
    long_about = "Map inventory spreadsheet columns to asset fields and save them to config.json.\n\n\
                  Values resolve as: command-line flag, then the existing config.json,\n\
                  then built-in defaults."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file to read and write.
    #[arg(
        long = "config",
        value_name = "PATH",
        default_value = DEFAULT_CONFIG_FILE,
        global = true
    )]
    pub config: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert column labels and indices, or list every column A..ZZ.
    Columns(ColumnsArgs),

    /// List the sheets of a workbook and its used column count.
    Sheets(SheetsArgs),

    /// Validate the column mapping without saving.
    Check(CheckArgs),

    /// Validate and save the configuration, backing up the previous file.
    Save(SaveArgs),

    /// Show the stored configuration.
    Show,

    /// Show the first rows of the mapped columns.
    Preview(PreviewArgs),
}

#[derive(Args)]
pub struct ColumnsArgs {
    /// Labels (e.g. AB) or zero-based indices (e.g. 27) to convert.
    #[arg(value_name = "COLUMN")]
    pub columns: Vec<String>,
}

#[derive(Args)]
pub struct SheetsArgs {
    /// Workbook to inspect (default: the configured file).
    #[arg(long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Column mapping flags shared by check, save and preview.
#[derive(Args, Default)]
pub struct MappingArgs {
    /// Workbook holding the inventory.
    #[arg(long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// First asset ID column, or "None".
    #[arg(long = "asset-id1", value_name = "COL")]
    pub asset_id1: Option<String>,

    /// Second asset ID column, or "None".
    #[arg(long = "asset-id2", value_name = "COL")]
    pub asset_id2: Option<String>,

    /// Third asset ID column, or "None".
    #[arg(long = "asset-id3", value_name = "COL")]
    pub asset_id3: Option<String>,

    #[arg(long = "asset-name", value_name = "COL")]
    pub asset_name: Option<String>,

    #[arg(long = "asset-description", value_name = "COL")]
    pub asset_description: Option<String>,

    #[arg(long = "status", value_name = "COL")]
    pub status: Option<String>,

    #[arg(long = "location", value_name = "COL")]
    pub location: Option<String>,

    #[arg(long = "room", value_name = "COL")]
    pub room: Option<String>,

    #[arg(long = "marked-check", value_name = "COL")]
    pub marked_check: Option<String>,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub mapping: MappingArgs,

    /// Print the validation report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct SaveArgs {
    #[command(flatten)]
    pub mapping: MappingArgs,

    /// Inventory sheet found in the workbook.
    #[arg(long = "inventory-sheet", value_name = "NAME")]
    pub inventory_sheet: Option<String>,

    /// Inventory sheet name typed by hand; used when no discovered sheet is given.
    #[arg(long = "custom-inventory-sheet", value_name = "NAME")]
    pub custom_inventory_sheet: Option<String>,

    /// Other sheet found in the workbook.
    #[arg(long = "other-sheet", value_name = "NAME")]
    pub other_sheet: Option<String>,

    /// Other sheet name typed by hand; used when no discovered sheet is given.
    #[arg(long = "custom-other-sheet", value_name = "NAME")]
    pub custom_other_sheet: Option<String>,

    /// First counted row (1-based).
    #[arg(long = "start-row", value_name = "ROW")]
    pub start_row: Option<u32>,

    /// Last counted row (inclusive).
    #[arg(long = "end-row", value_name = "ROW")]
    pub end_row: Option<u32>,

    /// ngrok address of the scanning server (stored as `server.ngrokUrl`).
    #[arg(long = "ngrok-url", value_name = "URL")]
    pub ngrok_url: Option<String>,
}

#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub mapping: MappingArgs,

    /// Sheet to sample (default: the configured inventory sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
