//! Field layout for fixed-width records.
//!
//! A record is one line of text whose fields occupy known, contiguous
//! character ranges. Offsets are character positions, not byte positions:
//! lines are decoded before slicing, so multi-byte input is safe.

use crate::error::ConvertError;

/// One field of a fixed-width record, as character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// First character of the field (0-based, inclusive).
    pub start: usize,
    /// One past the last character, or `None` for "to end of line".
    pub end: Option<usize>,
}

impl FieldSpec {
    pub fn new(start: usize, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// Slice this field out of a line by character position.
    ///
    /// A line shorter than `start` yields an empty string, never an error.
    pub fn slice(&self, line: &str) -> String {
        let chars = line.chars().skip(self.start);
        match self.end {
            Some(end) => chars.take(end.saturating_sub(self.start)).collect(),
            None => chars.collect(),
        }
    }
}

/// Complete record layout: field ranges plus an optional line to skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub fields: Vec<FieldSpec>,
    /// 0-based input line excluded from extraction (layout trivia such as
    /// the ruler line under a report header).
    pub skip_line: Option<usize>,
}

impl Default for Layout {
    /// The historical four-field layout this tool was built around:
    /// `[0,63) [63,81) [81,111) [111,end-of-line)`, skipping line 1.
    fn default() -> Self {
        Self {
            fields: vec![
                FieldSpec::new(0, Some(63)),
                FieldSpec::new(63, Some(81)),
                FieldSpec::new(81, Some(111)),
                FieldSpec::new(111, None),
            ],
            skip_line: Some(1),
        }
    }
}

impl Layout {
    /// Parse a layout string such as `"0-63,63-81,81-111,111-"`.
    ///
    /// Each comma-separated entry is `start-end` with an empty `end`
    /// meaning "to end of line". The default skip line is preserved;
    /// callers adjust it separately.
    pub fn parse(text: &str) -> Result<Self, ConvertError> {
        let mut fields = Vec::new();

        for entry in text.split(',') {
            let entry = entry.trim();
            let Some((start, end)) = entry.split_once('-') else {
                return Err(ConvertError::Layout(format!(
                    "'{entry}' is not a start-end range"
                )));
            };

            let start: usize = start.trim().parse().map_err(|_| {
                ConvertError::Layout(format!("'{entry}' has a non-numeric start"))
            })?;

            let end = end.trim();
            let end = if end.is_empty() {
                None
            } else {
                let end: usize = end.parse().map_err(|_| {
                    ConvertError::Layout(format!("'{entry}' has a non-numeric end"))
                })?;
                if end <= start {
                    return Err(ConvertError::Layout(format!(
                        "'{entry}' ends at or before its start"
                    )));
                }
                Some(end)
            };

            fields.push(FieldSpec::new(start, end));
        }

        if fields.is_empty() {
            return Err(ConvertError::Layout("no fields given".to_string()));
        }

        Ok(Self {
            fields,
            skip_line: Layout::default().skip_line,
        })
    }
}
