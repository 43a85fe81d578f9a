//! Snapshot history (undo/redo) for the editing engine.
//!
//! History is a linear list of full-text snapshots. `index` counts how many
//! steps back from the newest entry the current view is: `1` means nothing
//! has been undone. Recording a snapshot while `index > 1` prunes the
//! abandoned redo branch first.

use std::collections::VecDeque;

use serde::Serialize;

use super::selection::Selection;

/// Default bound on the number of snapshots kept
pub const DEFAULT_MAX_HISTORY: usize = 500;

/// A single snapshot of text and selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub text: String,
    pub selection_start: usize,
    pub selection_end: usize,
}

impl HistoryEntry {
    pub fn new(text: impl Into<String>, selection: Selection) -> Self {
        Self {
            text: text.into(),
            selection_start: selection.start,
            selection_end: selection.end,
        }
    }

    /// Selection to restore when this entry is applied (always forward)
    pub fn selection(&self) -> Selection {
        Selection::new(self.selection_start, self.selection_end)
    }

    /// Check if this entry already captures the given state
    pub fn matches(&self, text: &str, selection: Selection) -> bool {
        self.text == text
            && self.selection_start == selection.start
            && self.selection_end == selection.end
    }
}

/// Bounded snapshot history with branch pruning.
#[derive(Debug, Clone)]
pub struct EditHistory {
    entries: VecDeque<HistoryEntry>,
    index: usize,
    max_entries: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Create a new history with the default bound
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_HISTORY)
    }

    /// Create a new history with the specified bound (at least 1)
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            index: 1,
            max_entries: max_entries.max(1),
        }
    }

    /// Drop every entry newer than the current view
    fn prune(&mut self) {
        if self.index > 1 {
            let keep = self.entries.len() - (self.index - 1);
            tracing::trace!(
                dropped = self.index - 1,
                kept = keep,
                "pruning redo branch"
            );
            self.entries.truncate(keep);
            self.index = 1;
        }
    }

    /// Record a snapshot.
    ///
    /// With `prune_redo`, any entries newer than the current view are
    /// discarded first. The oldest entry is evicted once the bound is
    /// exceeded.
    pub fn snapshot(&mut self, entry: HistoryEntry, prune_redo: bool) {
        if prune_redo {
            self.prune();
        }

        self.entries.push_back(entry);

        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
        self.index = self.index.min(self.entries.len());

        tracing::trace!(
            len = self.entries.len(),
            index = self.index,
            "history snapshot"
        );
    }

    /// Step back to an older entry. `None` at the oldest boundary.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if self.index < self.entries.len() {
            self.index += 1;
            self.entries.get(self.entries.len() - self.index)
        } else {
            None
        }
    }

    /// Step forward to a newer entry. `None` at the newest boundary.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if self.index > 1 {
            self.index -= 1;
            self.entries.get(self.entries.len() - self.index)
        } else {
            None
        }
    }

    /// An entry older than the current one exists
    pub fn can_undo(&self) -> bool {
        self.index < self.entries.len()
    }

    /// An entry newer than the current one exists
    pub fn can_redo(&self) -> bool {
        self.index > 1
    }

    /// True when no undo has been applied since the last snapshot
    pub fn is_at_latest(&self) -> bool {
        self.index == 1
    }

    /// Steps back from the newest entry (1 = newest)
    pub fn index(&self) -> usize {
        self.index
    }

    /// All recorded entries, oldest first
    pub fn entries(&self) -> &VecDeque<HistoryEntry> {
        &self.entries
    }

    /// The entries as one slice, oldest first
    pub fn make_contiguous(&mut self) -> &[HistoryEntry] {
        self.entries.make_contiguous()
    }

    /// The newest entry, if any
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// The entry the current view corresponds to, if any
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries
            .len()
            .checked_sub(self.index)
            .and_then(|i| self.entries.get(i))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Drop every entry and reset the cursor
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 1;
    }
}
