use crate::error::SplitResult;
use crate::sheet::{output_path, CsvExporter, SheetImporter};
use colored::Colorize;
use std::path::PathBuf;

/// Execute the convert command
pub fn convert(
    input: PathBuf,
    out_dir: PathBuf,
    dry_run: bool,
    verbose: bool,
) -> SplitResult<()> {
    println!("{}", "📄 Sheetsplit - CSV export".bold().green());
    println!("   Input:   {}", input.display());
    println!("   Out dir: {}\n", out_dir.display());

    if dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No files will be written\n".yellow()
        );
    }

    // Read spreadsheet
    if verbose {
        println!("{}", "📖 Reading spreadsheet...".cyan());
    }

    let importer = SheetImporter::new(&input);
    let workbook = importer.import()?;

    if verbose {
        println!("   Found {} sheets\n", workbook.sheets.len());
        for sheet in &workbook.sheets {
            println!(
                "   📊 Sheet: {} ({} rows, {} columns)",
                sheet.name.bright_blue().bold(),
                sheet.row_count(),
                sheet.max_width()
            );
        }
        println!();
    }

    if dry_run {
        println!("{}", "🗺️  Routing plan:".cyan());
        for sheet in &workbook.sheets {
            let path = output_path(&out_dir, &sheet.name)?;
            println!("   {} → {}", sheet.name.bright_blue(), path.display());
        }
        println!("\n{}", "📋 Dry run complete - no files written".yellow());
        return Ok(());
    }

    // Write one CSV per sheet
    if verbose {
        println!("{}", "💾 Writing CSV files...".cyan());
    }

    let exporter = CsvExporter::new(workbook);
    let written = exporter.export(&out_dir)?;

    println!("{}", "✅ Export Complete!".bold().green());
    for path in &written {
        println!("   {}", path.display());
    }
    println!();

    Ok(())
}

/// Execute the list command
pub fn list(input: PathBuf, verbose: bool) -> SplitResult<()> {
    println!("{}", "📄 Sheetsplit - Sheet listing".bold().green());
    println!("   Input: {}\n", input.display());

    let importer = SheetImporter::new(&input);
    let workbook = importer.import()?;

    if workbook.is_empty() {
        println!("{}", "⚠️  No sheets found".yellow());
        return Ok(());
    }

    println!("   Found {} sheets:", workbook.sheets.len());
    for sheet in &workbook.sheets {
        if verbose {
            println!(
                "   📊 {} ({} rows, {} columns)",
                sheet.name.bright_blue().bold(),
                sheet.row_count(),
                sheet.max_width()
            );
        } else {
            println!("   📊 {}", sheet.name.bright_blue().bold());
        }
    }
    println!();

    Ok(())
}
