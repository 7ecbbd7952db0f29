//! Positional merge of column values into delimited rows.

use tracing::warn;

use crate::error::ConvertError;
use crate::extract::Column;

/// What to do when column lengths disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    /// Error out; no data is silently dropped.
    #[default]
    Fail,
    /// Truncate all columns to the shortest one; tail rows are dropped
    /// with a warning.
    Truncate,
}

/// Zip columns into rows positionally, trimming surrounding whitespace
/// from each field.
///
/// Under [`LengthPolicy::Fail`] every column must have the same number of
/// values as the first; under [`LengthPolicy::Truncate`] the shortest
/// column bounds the row count.
pub fn merge_columns(
    columns: &[Column],
    policy: LengthPolicy,
) -> Result<Vec<Vec<String>>, ConvertError> {
    let Some(first) = columns.first() else {
        return Ok(Vec::new());
    };
    let expected = first.len();

    let row_count = match policy {
        LengthPolicy::Fail => {
            for (i, column) in columns.iter().enumerate() {
                if column.len() != expected {
                    return Err(ConvertError::LengthMismatch {
                        column: i + 1,
                        expected,
                        found: column.len(),
                    });
                }
            }
            expected
        }
        LengthPolicy::Truncate => {
            let shortest = columns.iter().map(Vec::len).min().unwrap_or(0);
            if shortest != expected {
                warn!(
                    "column lengths differ; truncating to shortest ({shortest} of {expected} rows)"
                );
            }
            shortest
        }
    };

    let rows = (0..row_count)
        .map(|i| {
            columns
                .iter()
                .map(|column| column[i].trim().to_string())
                .collect()
        })
        .collect();

    Ok(rows)
}

/// Serialize rows as delimited text, one row per line.
///
/// Fields containing the delimiter, quotes, or newlines are quoted, so the
/// output survives a re-parse even for hostile field values.
pub fn write_delimited(rows: &[Vec<String>], delimiter: u8) -> Result<String, ConvertError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| ConvertError::Delimited(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ConvertError::Delimited(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ConvertError::Delimited(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(values: &[&str]) -> Column {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_two_columns() {
        let columns = vec![column(&["a", "b"]), column(&["1", "2"])];
        let rows = merge_columns(&columns, LengthPolicy::Fail).unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["a".to_string(), "1".to_string()],
                vec!["b".to_string(), "2".to_string()],
            ]
        );
    }

    #[test]
    fn test_merge_trims_field_whitespace() {
        let columns = vec![column(&["  a  "]), column(&["\t1"])];
        let rows = merge_columns(&columns, LengthPolicy::Fail).unwrap();
        assert_eq!(rows, vec![vec!["a".to_string(), "1".to_string()]]);
    }

    #[test]
    fn test_merge_fails_on_length_mismatch() {
        let columns = vec![column(&["a", "b"]), column(&["1"])];
        let err = merge_columns(&columns, LengthPolicy::Fail).unwrap_err();
        match err {
            ConvertError::LengthMismatch {
                column,
                expected,
                found,
            } => {
                assert_eq!(column, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_merge_truncates_to_shortest() {
        let columns = vec![column(&["a", "b", "c"]), column(&["1"])];
        let rows = merge_columns(&columns, LengthPolicy::Truncate).unwrap();
        assert_eq!(rows, vec![vec!["a".to_string(), "1".to_string()]]);
    }

    #[test]
    fn test_merge_no_columns() {
        let rows = merge_columns(&[], LengthPolicy::Fail).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_write_delimited_joins_with_delimiter() {
        let rows = vec![
            vec!["a".to_string(), "1".to_string()],
            vec!["b".to_string(), "2".to_string()],
        ];
        let text = write_delimited(&rows, b'-').unwrap();
        assert_eq!(text, "a-1\nb-2\n");
    }

    #[test]
    fn test_write_delimited_quotes_embedded_delimiter() {
        let rows = vec![vec!["a,b".to_string(), "1".to_string()]];
        let text = write_delimited(&rows, b',').unwrap();
        assert_eq!(text, "\"a,b\",1\n");
    }

    #[test]
    fn test_extract_then_merge_round_trip() {
        use crate::extract::extract_columns;
        use crate::schema::{FieldSpec, Layout};

        let layout = Layout {
            fields: vec![FieldSpec::new(0, Some(5)), FieldSpec::new(5, Some(10))],
            skip_line: None,
        };
        let lines = vec!["ABCDE12345".to_string()];
        let columns = extract_columns(&lines, &layout);
        let rows = merge_columns(&columns, LengthPolicy::Fail).unwrap();
        let text = write_delimited(&rows, b',').unwrap();
        assert_eq!(text, "ABCDE,12345\n");
    }
}
