//! Output formatting module
//!
//! Console messages plus the end-of-run summary table.

use deskpull_core::ExportReport;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Summary row for one written export
#[derive(Debug, Serialize, Tabled)]
pub struct ExportRow {
    #[tabled(rename = "Source")]
    pub source: String,
    #[tabled(rename = "Records")]
    pub records: usize,
    #[tabled(rename = "Fields")]
    pub fields: usize,
    #[tabled(rename = "Destination")]
    pub destination: String,
}

impl ExportRow {
    pub fn new(source: &str, report: &ExportReport) -> Self {
        Self {
            source: source.to_string(),
            records: report.record_count,
            fields: report.fields.len(),
            destination: report.destination.display().to_string(),
        }
    }
}

/// Print the end-of-run summary table
pub fn print_summary(rows: &[ExportRow]) {
    if rows.is_empty() {
        return;
    }
    let table = Table::new(rows).to_string();
    println!("{}", table);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}", colored::Colorize::green(message));
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}", colored::Colorize::red(message));
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{}", message);
}
