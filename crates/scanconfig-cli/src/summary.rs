use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use scanconfig_cli::columns::Conversion;
use scanconfig_cli::types::{CheckResult, PreviewResult, SaveResult};
use scanconfig_ingest::PreviewTable;
use scanconfig_model::{SheetChoice, SpreadsheetSummary};
use scanconfig_validate::{Issue, Severity, ValidationStatus};

pub fn print_conversions(conversions: &[Conversion]) {
    for conversion in conversions {
        if conversion.is_invalid() {
            eprintln!("error: {conversion}");
        } else {
            println!("{conversion}");
        }
    }
}

pub fn print_column_listing(columns: &[(usize, String)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Index"), header_cell("Column")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, label) in columns {
        table.add_row(vec![Cell::new(index), Cell::new(label)]);
    }
    println!("{table}");
}

pub fn print_sheets(summary: &SpreadsheetSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Sheet")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (position, name) in summary.sheet_names.iter().enumerate() {
        table.add_row(vec![dim_cell(position + 1), Cell::new(name)]);
    }
    println!("{table}");
    println!("Columns in first sheet: {}", summary.column_count);
}

pub fn print_check(result: &CheckResult) {
    if let Some(message) = &result.load_error {
        eprintln!("warning: {message}");
        eprintln!("  using default settings; saving will replace the file");
    }
    if let Some(path) = &result.loaded_from {
        println!("Loaded: {}", path.display());
    }
    println!("Workbook: {}", result.config.file_path.display());
    print_status(result);
    print_issue_table(result);
    println!();
    for line in result.summary_lines() {
        println!("{line}");
    }
}

pub fn print_show(result: &CheckResult) {
    print_check(result);
    println!(
        "Sheets: inventory = {}, other = {}",
        sheet_text(&result.config.sheets.inventory),
        sheet_text(&result.config.sheets.other)
    );
}

pub fn print_save(result: &SaveResult) {
    print_check(&result.check);
    let Some(outcome) = &result.outcome else {
        eprintln!("Configuration not saved: fix the errors above first.");
        return;
    };
    println!();
    println!("Saved: {}", outcome.path.display());
    if let Some(backup) = &outcome.backup {
        println!("Backup: {}", backup.display());
    }
    if result.backups.len() > 1 {
        println!("Backups kept: {}", result.backups.len());
    }
}

pub fn print_preview(result: &PreviewResult) {
    if let Some(message) = &result.check.load_error {
        eprintln!("warning: {message}");
    }
    if !result.check.report.is_valid() {
        print_status(&result.check);
        print_issue_table(&result.check);
    }
    for warning in &result.preview.warnings {
        eprintln!("warning: {warning}");
    }
    if let Some(table) = &result.preview.table {
        print_preview_table(table);
    }
}

fn print_preview_table(preview: &PreviewTable) {
    println!("Sheet: {} (first {} rows)", preview.sheet, preview.rows.len());
    let mut table = Table::new();
    table.set_header(
        preview
            .headers
            .iter()
            .map(|header| header_cell(header))
            .collect::<Vec<_>>(),
    );
    apply_preview_table_style(&mut table);
    for row in &preview.rows {
        table.add_row(row.iter().map(|value| {
            if value.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(value)
            }
        }));
    }
    println!("{table}");
}

fn print_status(result: &CheckResult) {
    let report = &result.report;
    let (text, color) = match report.status() {
        ValidationStatus::Valid => ("✓ Configuration valid".to_string(), Color::Green),
        ValidationStatus::ValidWithWarnings => (
            format!("! {}", join_messages(&report.warnings)),
            Color::Yellow,
        ),
        ValidationStatus::Invalid => (format!("✗ {}", join_messages(&report.errors)), Color::Red),
    };
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new(text).fg(color).add_attribute(Attribute::Bold)]);
    println!("{table}");
}

fn print_issue_table(result: &CheckResult) {
    let report = &result.report;
    if report.errors.is_empty() && report.warnings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for issue in report.errors.iter().chain(&report.warnings) {
        let field = issue
            .field()
            .map_or_else(|| dim_cell("-"), Cell::new);
        table.add_row(vec![
            severity_cell(issue.severity()),
            field,
            Cell::new(issue.message()),
        ]);
    }
    println!("{table}");
}

fn join_messages(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(Issue::message)
        .collect::<Vec<_>>()
        .join("; ")
}

fn sheet_text(choice: &SheetChoice) -> String {
    match choice {
        SheetChoice::Discovered(name) => name.clone(),
        SheetChoice::Custom(name) => format!("{name} (custom)"),
        SheetChoice::Unselected => "-".to_string(),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn apply_preview_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
