//! Selection type for the editing engine.

use serde::Serialize;

/// A selection over character offsets.
///
/// `start <= end` always holds. `reversed` records that the anchor sits at
/// `end` and the caret at `start` (the user selected backwards), so the
/// direction can be restored after a transform rewrites the buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
    pub reversed: bool,
}

impl Selection {
    /// Create a forward selection, normalising the endpoints.
    ///
    /// If `start > end` the endpoints are swapped and the selection is
    /// marked reversed.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self {
                start,
                end,
                reversed: false,
            }
        } else {
            Self {
                start: end,
                end: start,
                reversed: true,
            }
        }
    }

    /// Create a selection with an explicit direction
    pub fn with_direction(start: usize, end: usize, reversed: bool) -> Self {
        let mut sel = Self::new(start, end);
        sel.reversed = reversed;
        sel
    }

    /// Create a collapsed selection (caret with no range)
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
            reversed: false,
        }
    }

    /// Create a selection from the fixed anchor and the moving head
    pub fn from_anchor_head(anchor: usize, head: usize) -> Self {
        Self::new(anchor, head)
    }

    /// Where the selection started (fixed point)
    pub fn anchor(&self) -> usize {
        if self.reversed {
            self.end
        } else {
            self.start
        }
    }

    /// Where the caret is (moving point)
    pub fn head(&self) -> usize {
        if self.reversed {
            self.start
        } else {
            self.end
        }
    }

    /// Check if the selection is a bare caret
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// Clamp both endpoints into `[0, len]` and order them, keeping the
    /// direction flag
    pub fn clamped(self, len: usize) -> Self {
        let (a, b) = (self.start.min(len), self.end.min(len));
        Self::with_direction(a.min(b), a.max(b), self.reversed)
    }

    /// Check if a closed interval `[from, to]` touches this selection.
    /// Touching endpoints count, so a caret on a boundary touches both sides.
    pub fn touches(&self, from: usize, to: usize) -> bool {
        !(from > self.end || to < self.start)
    }
}
