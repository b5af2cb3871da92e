//! Spreadsheet importer implementation - ODS/XLSX → Workbook

use crate::error::{SplitError, SplitResult};
use crate::types::{Sheet, Workbook};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Spreadsheet importer for converting ODS/XLSX files to the workbook model
pub struct SheetImporter {
    path: std::path::PathBuf,
}

impl SheetImporter {
    /// Create a new spreadsheet importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Import the spreadsheet to a Workbook
    pub fn import(&self) -> SplitResult<Workbook> {
        // Format is detected from the file, so .ods, .xlsx and .xls all work
        let mut source = open_workbook_auto(&self.path)
            .map_err(|e| SplitError::Import(format!("Failed to open spreadsheet: {e}")))?;

        let mut workbook = Workbook::new();

        // Get all sheet names (workbook order is preserved)
        let sheet_names = source.sheet_names().to_vec();

        for sheet_name in sheet_names {
            let range = source.worksheet_range(&sheet_name).map_err(|e| {
                SplitError::Import(format!("Failed to read sheet '{sheet_name}': {e}"))
            })?;
            workbook.add_sheet(Self::convert_sheet(&sheet_name, &range));
        }

        Ok(workbook)
    }

    /// Convert a single worksheet range to a Sheet
    fn convert_sheet(sheet_name: &str, range: &Range<Data>) -> Sheet {
        let mut sheet = Sheet::new(sheet_name.to_string());

        for row in range.rows() {
            // Calamine pads every row to the range width; trim the trailing
            // empties back off so short rows stay short until the CSV
            // exporter pads them to the sheet maximum.
            let used = row
                .iter()
                .rposition(|cell| !matches!(cell, Data::Empty))
                .map_or(0, |idx| idx + 1);

            let cells: Vec<String> = row[..used].iter().map(Self::cell_to_string).collect();
            sheet.add_row(cells);
        }

        sheet
    }

    /// Stringify a cell the way the CSV output wants it
    fn cell_to_string(cell: &Data) -> String {
        match cell {
            Data::Empty => String::new(),
            Data::String(s) => s.clone(),
            // f64 Display already drops a trailing .0 (2.0 → "2")
            Data::Float(f) => f.to_string(),
            Data::Int(i) => i.to_string(),
            Data::Bool(b) => b.to_string(),
            other => other.to_string(),
        }
    }
}
