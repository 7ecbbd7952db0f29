//! Best-effort character encoding detection and decoding.
//!
//! Fixed-width exports from legacy systems arrive in whatever encoding the
//! producing host used, with no metadata. Detection is deliberately simple:
//! a BOM wins, valid UTF-8 is UTF-8, and anything else is decoded as
//! windows-1252 (the superset of latin-1 these files are seen in).

use std::fs;
use std::io;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use tracing::warn;

use crate::error::ConvertError;

/// Guess the encoding of raw file bytes.
///
/// No guarantee of correctness; empty or ambiguous input falls back to UTF-8.
pub fn detect(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    if std::str::from_utf8(bytes).is_ok() {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

/// Read a file, detect its encoding, and decode its content into lines.
///
/// Decoding is lossy: malformed sequences are replaced and logged rather
/// than failing the run. A missing file is fatal.
pub fn read_lines(path: &Path) -> Result<(Vec<String>, &'static Encoding), ConvertError> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ConvertError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConvertError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let encoding = detect(&bytes);
    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        warn!(
            "decoding '{}' as {} replaced malformed sequences",
            path.display(),
            encoding.name()
        );
    }

    let lines = text.lines().map(str::to_string).collect();
    Ok((lines, encoding))
}
