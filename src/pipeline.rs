//! End-to-end conversion pipeline.
//!
//! Stages hand their output to each other in memory, in a fixed order:
//! decode, extract, clean, merge, parse, write. Each stage returns a
//! `Result` and the pipeline halts on the first failure. When a scratch
//! directory is configured, every intermediate artifact is mirrored to
//! disk (`col{N}.txt`, `col{N}clean.txt`, `combined.csv`) and the
//! directory is cleared after a successful run unless the caller asked
//! to keep it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::clean::clean_column;
use crate::encoding::read_lines;
use crate::error::ConvertError;
use crate::extract::{Column, extract_columns};
use crate::merge::{LengthPolicy, merge_columns, write_delimited};
use crate::schema::Layout;
use crate::scratch;
use crate::sheet::{parse_delimited, write_spreadsheet};

/// Knobs for one conversion run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Delimiter for the combined intermediate rows.
    pub delimiter: u8,
    /// Field layout to slice records with.
    pub layout: Layout,
    /// Behavior when extracted columns disagree on row count.
    pub length_policy: LengthPolicy,
    /// Mirror intermediate artifacts into this directory.
    pub scratch_dir: Option<PathBuf>,
    /// Leave scratch files in place after a successful run.
    pub keep_scratch: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            layout: Layout::default(),
            length_policy: LengthPolicy::Fail,
            scratch_dir: None,
            keep_scratch: false,
        }
    }
}

/// Counters reported after a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Name of the detected input encoding.
    pub encoding: String,
    /// Records extracted from the input (skip line excluded).
    pub records_in: usize,
    /// Body rows written to the spreadsheet (header excluded).
    pub rows_out: usize,
}

/// Convert a fixed-width text file into a single-sheet spreadsheet.
///
/// Halts on the first failing stage; on an error path nothing is written
/// beyond whatever scratch artifacts earlier stages already produced.
pub fn convert(input: &Path, output: &Path, options: &Options) -> Result<Report, ConvertError> {
    let (lines, encoding) = read_lines(input)?;
    info!(
        "read {} lines from '{}' ({})",
        lines.len(),
        input.display(),
        encoding.name()
    );

    if let Some(dir) = &options.scratch_dir {
        scratch::ensure_dir(dir)?;
    }

    let mut columns = extract_columns(&lines, &options.layout);
    let records_in = columns.first().map_or(0, Vec::len);
    spill_columns(options.scratch_dir.as_deref(), &columns, "")?;

    for column in &mut columns {
        clean_column(column);
    }
    spill_columns(options.scratch_dir.as_deref(), &columns, "clean")?;

    let rows = merge_columns(&columns, options.length_policy)?;
    let delimited = write_delimited(&rows, options.delimiter)?;
    if let Some(dir) = &options.scratch_dir {
        spill_file(&dir.join("combined.csv"), &delimited)?;
    }

    let table = parse_delimited(&delimited, options.delimiter)?;
    let rows_out = table.rows.len();
    write_spreadsheet(&table, output)?;
    info!(
        "wrote {} header fields and {} rows to '{}'",
        table.headers.len(),
        rows_out,
        output.display()
    );

    if let Some(dir) = &options.scratch_dir
        && !options.keep_scratch
    {
        scratch::clear_dir(dir);
    }

    Ok(Report {
        encoding: encoding.name().to_string(),
        records_in,
        rows_out,
    })
}

/// Write each column as `col{N}{suffix}.txt` under the scratch directory,
/// one value per line. No-op without a scratch directory.
fn spill_columns(
    scratch_dir: Option<&Path>,
    columns: &[Column],
    suffix: &str,
) -> Result<(), ConvertError> {
    let Some(dir) = scratch_dir else {
        return Ok(());
    };
    for (i, column) in columns.iter().enumerate() {
        let path = dir.join(format!("col{}{suffix}.txt", i + 1));
        let mut text = column.join("\n");
        text.push('\n');
        spill_file(&path, &text)?;
    }
    Ok(())
}

fn spill_file(path: &Path, text: &str) -> Result<(), ConvertError> {
    fs::write(path, text).map_err(|e| ConvertError::Scratch {
        path: path.to_path_buf(),
        source: e,
    })
}
