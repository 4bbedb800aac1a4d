//! Scanner configuration CLI.

use clap::{ColorChoice, Parser};
use scanconfig_cli::logging::{LogConfig, LogFormat, init_logging};
use scanconfig_persistence::ConfigurationStore;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    column_listing, run_check, run_columns, run_preview, run_save, run_sheets, run_show,
};
use crate::summary::{
    print_check, print_column_listing, print_conversions, print_preview, print_save,
    print_sheets, print_show,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let store = ConfigurationStore::new(cli.config.clone());
    let exit_code = match cli.command {
        Command::Columns(args) => match run_columns(&args) {
            Some(conversions) => {
                print_conversions(&conversions);
                if conversions.iter().any(|c| c.is_invalid()) { 1 } else { 0 }
            }
            None => {
                print_column_listing(&column_listing());
                0
            }
        },
        Command::Sheets(args) => match run_sheets(&store, &args) {
            Ok(summary) => {
                print_sheets(&summary);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Check(args) => match run_check(&store, &args) {
            Ok(result) if args.json => match serde_json::to_string_pretty(&result.report) {
                Ok(json) => {
                    println!("{json}");
                    if result.report.is_valid() { 0 } else { 1 }
                }
                Err(error) => report_error(&error.into()),
            },
            Ok(result) => {
                print_check(&result);
                if result.report.is_valid() { 0 } else { 1 }
            }
            Err(error) => report_error(&error),
        },
        Command::Save(args) => match run_save(&store, &args) {
            Ok(result) => {
                print_save(&result);
                if result.outcome.is_some() { 0 } else { 1 }
            }
            Err(error) => report_error(&error),
        },
        Command::Show => match run_show(&store) {
            Ok(Some(result)) => {
                print_show(&result);
                0
            }
            Ok(None) => {
                println!("No configuration at {}", store.path().display());
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Preview(args) => match run_preview(&store, &args) {
            Ok(result) => {
                print_preview(&result);
                if result.check.report.is_valid() { 0 } else { 1 }
            }
            Err(error) => report_error(&error),
        },
    };
    std::process::exit(exit_code);
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
