//! CLI tool to convert fixed-width text files into XLSX spreadsheets.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use txt2xlsx_rs::{Layout, LengthPolicy, Options, convert};

/// Convert a fixed-width text file into a single-sheet spreadsheet.
///
/// Fields are sliced by character offset, cleaned of trailing whitespace,
/// and merged into delimited rows before the worksheet is written.
#[derive(Parser)]
#[command(name = "txt2xlsx", version)]
struct Cli {
    /// Source text file
    #[arg(short, long)]
    input: PathBuf,

    /// Destination spreadsheet file (.xlsx)
    #[arg(short, long)]
    output: PathBuf,

    /// Delimiter for the combined intermediate rows ("\t" for tab)
    #[arg(short, long, default_value = "\t")]
    delimiter: String,

    /// Field layout as character ranges, e.g. "0-63,63-81,81-111,111-"
    #[arg(long)]
    fields: Option<String>,

    /// 0-based input line to exclude from extraction
    #[arg(long, default_value_t = 1, conflicts_with = "no_skip")]
    skip_line: usize,

    /// Extract every input line, including the default trivia line
    #[arg(long)]
    no_skip: bool,

    /// Truncate to the shortest column instead of failing on length mismatch
    #[arg(long)]
    truncate_mismatch: bool,

    /// Mirror intermediate column files into this directory
    #[arg(long)]
    scratch_dir: Option<PathBuf>,

    /// Leave scratch files in place after a successful run
    #[arg(long, requires = "scratch_dir")]
    keep_scratch: bool,

    /// Show stage-by-stage progress on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let delimiter = match parse_delimiter(&cli.delimiter) {
        Ok(delimiter) => delimiter,
        Err(message) => {
            eprintln!("Invalid delimiter: {message}");
            process::exit(2);
        }
    };

    let mut layout = match &cli.fields {
        Some(text) => match Layout::parse(text) {
            Ok(layout) => layout,
            Err(e) => {
                eprintln!("Conversion error: {e}");
                process::exit(e.exit_code());
            }
        },
        None => Layout::default(),
    };
    layout.skip_line = if cli.no_skip {
        None
    } else {
        Some(cli.skip_line)
    };

    let options = Options {
        delimiter,
        layout,
        length_policy: if cli.truncate_mismatch {
            LengthPolicy::Truncate
        } else {
            LengthPolicy::Fail
        },
        scratch_dir: cli.scratch_dir.clone(),
        keep_scratch: cli.keep_scratch,
    };

    match convert(&cli.input, &cli.output, &options) {
        Ok(report) => {
            eprintln!(
                "Converted {} records ({}) -> {}",
                report.records_in,
                report.encoding,
                cli.output.display()
            );
        }
        Err(e) => {
            eprintln!("Conversion error: {e}");
            process::exit(e.exit_code());
        }
    }
}

/// Delimiters must be a single byte; the literal two characters `\t`
/// are accepted as a spelled-out tab for shell convenience.
fn parse_delimiter(text: &str) -> Result<u8, String> {
    let text = if text == "\\t" { "\t" } else { text };
    match text.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(format!("'{text}' must be a single character")),
    }
}
