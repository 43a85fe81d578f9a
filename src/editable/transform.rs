//! Selection-preserving row transforms.
//!
//! A transform rewrites every selected row, leaves the others untouched, and
//! remaps the selection so it keeps bracketing the same logical text even
//! though the rewrite changed row lengths.
//!
//! Remap rules, applied per selected row with `diff = new_len - old_len`,
//! always measured against the selection as it was before the pass:
//!
//! - Start inside the row: grows by `diff` unless it sits exactly on the row
//!   start, where text prepended to the row lands inside the selection
//!   rather than pushing the start along. On shrink it moves by
//!   `max(diff, row.start - start)`, never left of the row start.
//! - End inside the row: grows by `diff`; on shrink moves by
//!   `max(diff, row.start - end)`.
//! - Row strictly inside the selection: end moves by `diff`.

use super::rows::{Row, LINE_BREAK};
use super::selection::Selection;
use crate::util::char_len;

/// Result of a row transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutcome {
    /// Reassembled buffer text
    pub text: String,
    /// Remapped selection (direction preserved, clamped into the new text)
    pub selection: Selection,
    /// Number of rows whose text actually changed
    pub changed_rows: usize,
}

impl TransformOutcome {
    pub fn is_noop(&self) -> bool {
        self.changed_rows == 0
    }
}

fn shift_start(diff: isize, row_start: isize, endpoint: isize) -> isize {
    if diff >= 0 {
        if endpoint == row_start {
            0
        } else {
            diff
        }
    } else {
        diff.max(row_start - endpoint)
    }
}

fn shift_end(diff: isize, row_start: isize, endpoint: isize) -> isize {
    if diff >= 0 {
        diff
    } else {
        diff.max(row_start - endpoint)
    }
}

/// Rewrite the selected rows and remap `selection`.
///
/// `rows` must have been computed from the same text and `selection`.
pub fn transform_rows<F>(rows: &[Row], selection: Selection, mut rewrite: F) -> TransformOutcome
where
    F: FnMut(&Row) -> String,
{
    let orig_start = selection.start as isize;
    let orig_end = selection.end as isize;
    let mut new_start = orig_start;
    let mut new_end = orig_end;
    let mut changed_rows = 0;
    let mut values: Vec<String> = Vec::with_capacity(rows.len());

    for row in rows {
        if !row.is_selected {
            values.push(row.text.clone());
            continue;
        }

        let new_text = rewrite(row);
        let diff = char_len(&new_text) as isize - row.len() as isize;
        let row_start = row.start as isize;

        if row.contains(selection.start) {
            new_start += shift_start(diff, row_start, orig_start);
            new_end += shift_end(diff, row_start, orig_end);
        } else if row.contains(selection.end) {
            new_end += shift_end(diff, row_start, orig_end);
        } else {
            new_end += diff;
        }

        if new_text != row.text {
            changed_rows += 1;
        }
        values.push(new_text);
    }

    let text = values.join(&LINE_BREAK.to_string());
    let len = char_len(&text) as isize;
    let start = new_start.clamp(0, len) as usize;
    let end = new_end.clamp(0, len) as usize;

    TransformOutcome {
        text,
        selection: Selection::with_direction(start.min(end), end.max(start), selection.reversed),
        changed_rows,
    }
}
