//! Spreadsheet import/export module
//!
//! This module provides the spreadsheet → CSV conversion:
//! - Import: ODS/XLSX (.ods, .xlsx, .xls) → Workbook
//! - Export: Workbook → one CSV file per sheet

mod exporter;
mod importer;

pub use exporter::{output_path, CsvExporter};
pub use importer::SheetImporter;
