use clap::{Parser, Subcommand};
use sheetsplit::cli;
use sheetsplit::error::SplitResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetsplit")]
#[command(about = "Split a spreadsheet into one CSV file per sheet")]
#[command(long_about = "Sheetsplit - spreadsheet to per-sheet CSV splitter

Reads an ODS/XLSX/XLS document and writes one CSV file per named sheet
into an output directory, ready for the Resources/ asset pipeline.

COMMANDS:
  convert - Write one CSV per sheet into the output directory
  list    - Show the sheets a spreadsheet contains

ROUTING:
  <out-dir>/<sheet>.csv            for every sheet
  <out-dir>/palettes/default.csv   for the sheet named 'default'

EXAMPLES:
  sheetsplit convert resources.ods                # Write into Resources/
  sheetsplit convert resources.ods -o build/data  # Custom output directory
  sheetsplit convert resources.ods --dry-run      # Preview routing only
  sheetsplit list resources.ods --verbose         # Inspect sheet shapes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Write one CSV file per sheet into the output directory.

Each sheet becomes <out-dir>/<sheet>.csv, except the palette sheet
'default' which becomes <out-dir>/palettes/default.csv. Missing
directories are created.

OUTPUT FORMAT:
  Records end with a bare \\n (no CRLF).
  Embedded newlines in cell text are escaped as the literal sequence \\n.
  Short rows are padded with empty fields to the sheet's widest row.
  Fields are quoted only when they contain a comma or a quote.

EXAMPLES:
  sheetsplit convert resources.ods
  sheetsplit convert resources.xlsx --out-dir build/data
  sheetsplit convert resources.ods --dry-run --verbose")]
    /// Write one CSV per sheet into the output directory
    Convert {
        /// Path to spreadsheet (.ods, .xlsx or .xls)
        input: PathBuf,

        /// Output directory for the CSV files
        #[arg(short, long, default_value = "Resources")]
        out_dir: PathBuf,

        /// Preview output paths without writing files
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Show verbose conversion steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the sheets a spreadsheet contains
    List {
        /// Path to spreadsheet (.ods, .xlsx or .xls)
        input: PathBuf,

        /// Show row and column counts per sheet
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> SplitResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            out_dir,
            dry_run,
            verbose,
        } => cli::convert(input, out_dir, dry_run, verbose),

        Commands::List { input, verbose } => cli::list(input, verbose),
    }
}
