//! Trailing-whitespace cleanup for extracted columns.

use crate::extract::Column;

/// Strip trailing whitespace from every value in place.
///
/// Leading whitespace is preserved. Idempotent.
pub fn clean_column(column: &mut Column) {
    for value in column.iter_mut() {
        let trimmed_len = value.trim_end().len();
        if trimmed_len != value.len() {
            value.truncate(trimmed_len);
        }
    }
}
