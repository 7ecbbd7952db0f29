//! # txt2xlsx-rs
//!
//! Fixed-width text file to spreadsheet converter.
//!
//! Converts text files whose records are laid out in fixed character
//! positions into single-sheet XLSX files. The pipeline runs in memory:
//!
//! - **detect**: best-effort encoding detection of the raw input bytes
//! - **extract**: slice each field out of every record by character offset
//! - **clean**: strip trailing whitespace from every extracted value
//! - **merge**: zip the columns positionally into delimited rows
//! - **write**: parse the rows into a header + body table and save it as
//!   a worksheet
//!
//! ## Example
//!
//! ```
//! use txt2xlsx_rs::{FieldSpec, Layout, LengthPolicy, extract_columns, merge_columns};
//!
//! // Record layout: two five-character fields.
//! let layout = Layout {
//!     fields: vec![FieldSpec::new(0, Some(5)), FieldSpec::new(5, Some(10))],
//!     skip_line: None,
//! };
//!
//! let lines = vec!["ABCDE12345".to_string()];
//! let columns = extract_columns(&lines, &layout);
//! let rows = merge_columns(&columns, LengthPolicy::Fail).unwrap();
//!
//! assert_eq!(rows, vec![vec!["ABCDE".to_string(), "12345".to_string()]]);
//! ```

pub mod clean;
pub mod encoding;
pub mod error;
pub mod extract;
pub mod merge;
pub mod pipeline;
pub mod schema;
pub mod scratch;
pub mod sheet;

pub use clean::clean_column;
pub use encoding::{detect, read_lines};
pub use error::ConvertError;
pub use extract::{Column, extract_columns};
pub use merge::{LengthPolicy, merge_columns, write_delimited};
pub use pipeline::{Options, Report, convert};
pub use schema::{FieldSpec, Layout};
pub use scratch::{clear_dir, ensure_dir};
pub use sheet::{Table, parse_delimited, write_spreadsheet};
