//! CSV exporter implementation - Workbook → one CSV file per sheet

use crate::error::{SplitError, SplitResult};
use crate::types::{Sheet, Workbook};
use csv::{Terminator, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// The palette sheet is routed into a palettes/ subdirectory
const PALETTE_SHEET: &str = "default";

/// CSV exporter for writing each sheet of a workbook to its own file
pub struct CsvExporter {
    workbook: Workbook,
}

impl CsvExporter {
    /// Create a new CSV exporter
    pub fn new(workbook: Workbook) -> Self {
        Self { workbook }
    }

    /// Write one CSV file per sheet under `out_dir`
    ///
    /// Missing directories (including `palettes/`) are created. Returns the
    /// written paths in sheet order.
    pub fn export(&self, out_dir: &Path) -> SplitResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.workbook.sheets.len());

        for sheet in &self.workbook.sheets {
            let path = output_path(out_dir, &sheet.name)?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            Self::write_sheet(sheet, &path)?;
            written.push(path);
        }

        Ok(written)
    }

    /// Write a single sheet as CSV
    ///
    /// Every row is padded with empty fields to the sheet's maximum width,
    /// records end with a bare `\n`, and fields are quoted only when they
    /// contain a delimiter or quote. An empty sheet still produces its
    /// (empty) file.
    fn write_sheet(sheet: &Sheet, path: &Path) -> SplitResult<()> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_path(path)?;

        let width = sheet.max_width();
        for row in &sheet.rows {
            writer.write_record(padded_record(row, width))?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Derive the output path for a sheet
///
/// `<out_dir>/<sheet>.csv`, except the palette sheet which goes to
/// `<out_dir>/palettes/<sheet>.csv`. The match is exact and case-sensitive.
pub fn output_path(out_dir: &Path, sheet_name: &str) -> SplitResult<PathBuf> {
    if sheet_name.is_empty() {
        return Err(SplitError::SheetName(
            "sheet name is empty".to_string(),
        ));
    }
    // Sheet names become file names; never let one climb out of out_dir
    if sheet_name.contains(['/', '\\']) || sheet_name == "." || sheet_name == ".." {
        return Err(SplitError::SheetName(format!(
            "'{sheet_name}' cannot be used as a file name"
        )));
    }

    let file_name = format!("{sheet_name}.csv");
    if sheet_name == PALETTE_SHEET {
        Ok(out_dir.join("palettes").join(file_name))
    } else {
        Ok(out_dir.join(file_name))
    }
}

/// Escape embedded newlines as the two-character sequence `\n`
///
/// CRLF is normalized to LF first so it does not leak a stray CR into the
/// escaped output.
fn escape_newlines(cell: &str) -> String {
    cell.replace("\r\n", "\n").replace('\n', "\\n")
}

/// Escape a row's cells and pad it with empty fields to `width`
fn padded_record(row: &[String], width: usize) -> Vec<String> {
    let mut record: Vec<String> = row.iter().map(|cell| escape_newlines(cell)).collect();
    record.resize(width, String::new());
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Sheet, Workbook};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sheet_with_rows(name: &str, rows: &[&[&str]]) -> Sheet {
        let mut sheet = Sheet::new(name.to_string());
        for row in rows {
            sheet.add_row(row.iter().map(|c| c.to_string()).collect());
        }
        sheet
    }

    #[test]
    fn test_output_path_regular_sheet() {
        let path = output_path(Path::new("Resources"), "tiles").unwrap();
        assert_eq!(path, PathBuf::from("Resources/tiles.csv"));
    }

    #[test]
    fn test_output_path_palette_sheet() {
        let path = output_path(Path::new("Resources"), "default").unwrap();
        assert_eq!(path, PathBuf::from("Resources/palettes/default.csv"));
    }

    #[test]
    fn test_output_path_palette_match_is_case_sensitive() {
        let path = output_path(Path::new("Resources"), "Default").unwrap();
        assert_eq!(path, PathBuf::from("Resources/Default.csv"));
    }

    #[test]
    fn test_output_path_rejects_separators() {
        assert!(output_path(Path::new("out"), "../escape").is_err());
        assert!(output_path(Path::new("out"), "a/b").is_err());
        assert!(output_path(Path::new("out"), "a\\b").is_err());
        assert!(output_path(Path::new("out"), "").is_err());
        assert!(output_path(Path::new("out"), "..").is_err());
    }

    #[test]
    fn test_escape_newlines() {
        assert_eq!(escape_newlines("no newline"), "no newline");
        assert_eq!(escape_newlines("two\nlines"), "two\\nlines");
        assert_eq!(escape_newlines("crlf\r\nline"), "crlf\\nline");
        assert_eq!(escape_newlines("a\nb\nc"), "a\\nb\\nc");
    }

    #[test]
    fn test_padded_record_pads_to_width() {
        let row = vec!["a".to_string(), "b".to_string()];
        assert_eq!(padded_record(&row, 4), vec!["a", "b", "", ""]);
    }

    #[test]
    fn test_padded_record_full_width_unchanged() {
        let row = vec!["a".to_string(), "b".to_string()];
        assert_eq!(padded_record(&row, 2), vec!["a", "b"]);
    }

    #[test]
    fn test_write_sheet_exact_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tiles.csv");

        let sheet = sheet_with_rows("tiles", &[&["a", "b,c"], &["x"]]);
        CsvExporter::write_sheet(&sheet, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        // Comma-bearing field quoted, short row padded, bare \n terminator
        assert_eq!(contents, "a,\"b,c\"\nx,\n");
    }

    #[test]
    fn test_write_sheet_escaped_newline_not_quoted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("text.csv");

        let sheet = sheet_with_rows("text", &[&["line one\nline two"]]);
        CsvExporter::write_sheet(&sheet, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        // The newline is escaped before the CSV writer sees it, so the
        // field needs no quoting
        assert_eq!(contents, "line one\\nline two\n");
    }

    #[test]
    fn test_write_sheet_empty_sheet_creates_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.csv");

        let sheet = Sheet::new("empty".to_string());
        CsvExporter::write_sheet(&sheet, &path).unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_export_routes_palette_and_creates_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("Resources");

        let mut workbook = Workbook::new();
        workbook.add_sheet(sheet_with_rows("tiles", &[&["wall", "1"]]));
        workbook.add_sheet(sheet_with_rows("default", &[&["black", "0", "0", "0"]]));

        let exporter = CsvExporter::new(workbook);
        let written = exporter.export(&out_dir).unwrap();

        assert_eq!(
            written,
            vec![
                out_dir.join("tiles.csv"),
                out_dir.join("palettes/default.csv"),
            ]
        );
        assert_eq!(
            fs::read_to_string(out_dir.join("palettes/default.csv")).unwrap(),
            "black,0,0,0\n"
        );
    }

    #[test]
    fn test_export_pads_to_sheet_max_not_running_max() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().to_path_buf();

        // The widest row comes last; earlier rows must still be padded
        let mut workbook = Workbook::new();
        workbook.add_sheet(sheet_with_rows("items", &[&["a"], &["b", "c", "d"]]));

        let exporter = CsvExporter::new(workbook);
        exporter.export(&out_dir).unwrap();

        let contents = fs::read_to_string(out_dir.join("items.csv")).unwrap();
        assert_eq!(contents, "a,,\nb,c,d\n");
    }
}
