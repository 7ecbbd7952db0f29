//! Column extraction from fixed-width lines.

use crate::schema::Layout;

/// One field's values across all records, one value per record.
pub type Column = Vec<String>;

/// Extract one column per layout field from the input lines.
///
/// The layout's skip line (if any) is excluded. Every returned column has
/// one value per remaining line, in input order; values are raw substrings,
/// untrimmed.
pub fn extract_columns(lines: &[String], layout: &Layout) -> Vec<Column> {
    let mut columns: Vec<Column> = vec![Vec::new(); layout.fields.len()];

    for (i, line) in lines.iter().enumerate() {
        if layout.skip_line == Some(i) {
            continue;
        }
        for (field, column) in layout.fields.iter().zip(columns.iter_mut()) {
            column.push(field.slice(line));
        }
    }

    columns
}
