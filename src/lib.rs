//! Sheetsplit - spreadsheet to per-sheet CSV splitter
//!
//! This library reads a spreadsheet document (ODS/XLSX/XLS) and writes one
//! CSV file per sheet into an output directory, the way the `Resources/`
//! asset pipeline expects:
//!
//! - one `<sheet>.csv` per named sheet, in workbook order
//! - the `default` palette sheet routed to `palettes/default.csv`
//! - embedded newlines escaped as the literal two-character sequence `\n`
//! - short rows padded with empty fields to the sheet's widest row
//! - a bare `\n` record terminator, minimal quoting
//!
//! # Example
//!
//! ```no_run
//! use sheetsplit::sheet::{CsvExporter, SheetImporter};
//! use std::path::Path;
//!
//! let workbook = SheetImporter::new("resources.ods").import()?;
//! println!("Sheets: {}", workbook.sheets.len());
//!
//! let exporter = CsvExporter::new(workbook);
//! let written = exporter.export(Path::new("Resources"))?;
//! println!("Wrote {} files", written.len());
//! # Ok::<(), sheetsplit::error::SplitError>(())
//! ```

pub mod cli;
pub mod error;
pub mod sheet;
pub mod types;

// Re-export commonly used types
pub use error::{SplitError, SplitResult};
pub use types::{Sheet, Workbook};
