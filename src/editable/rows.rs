//! Row decomposition of a buffer relative to the current selection.

use super::selection::Selection;
use crate::util::char_len;

/// Line separator. Nothing else splits rows.
pub const LINE_BREAK: char = '\n';

/// A logical row of the buffer.
///
/// Rows are derived, never stored: compute them fresh from the text and
/// selection whenever they are needed. `start..end` are char offsets and
/// exclude the line break, so consecutive rows are `end + 1` apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub is_selected: bool,
}

impl Row {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset falls within `[start, end]` (inclusive on both sides)
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }
}

/// Split `text` into rows and mark those touched by `selection`.
///
/// A row is selected if `[row.start, row.end]` overlaps
/// `[selection.start, selection.end]`; touching endpoints count.
pub fn compute_rows(text: &str, selection: Selection) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut offset = 0;

    for (index, line) in text.split(LINE_BREAK).enumerate() {
        let start = offset;
        let end = start + char_len(line);
        rows.push(Row {
            index,
            start,
            end,
            text: line.to_string(),
            is_selected: selection.touches(start, end),
        });
        offset = end + 1;
    }

    rows
}

/// Iterate over the selected rows only
pub fn selected_rows(rows: &[Row]) -> impl Iterator<Item = &Row> {
    rows.iter().filter(|r| r.is_selected)
}
