//! Scratch directory bookkeeping for intermediate artifacts.
//!
//! The pipeline runs in memory; a scratch directory is only engaged when
//! the caller asks for on-disk copies of each stage's output. Cleanup is
//! best-effort: a failure to remove one entry never aborts the pass.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::ConvertError;

/// Create the scratch directory if it does not already exist. Idempotent.
pub fn ensure_dir(path: &Path) -> Result<(), ConvertError> {
    fs::create_dir_all(path).map_err(|e| ConvertError::Scratch {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Remove everything inside `path`, files and subdirectories alike.
///
/// A nonexistent directory is logged and ignored. Per-entry removal
/// failures are logged and the remaining entries are still attempted.
pub fn clear_dir(path: &Path) {
    if !path.exists() {
        warn!("scratch directory '{}' does not exist", path.display());
        return;
    }

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("failed to list scratch directory '{}': {e}", path.display());
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("failed to read scratch entry: {e}");
                continue;
            }
        };
        let entry_path = entry.path();
        let removed = if entry_path.is_dir() {
            fs::remove_dir_all(&entry_path)
        } else {
            fs::remove_file(&entry_path)
        };
        if let Err(e) = removed {
            warn!("failed to remove '{}': {e}", entry_path.display());
        }
    }
}
