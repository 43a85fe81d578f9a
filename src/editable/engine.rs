//! The editing engine: owns the surface, history and settings, and turns raw
//! events into edits.
//!
//! Snapshot timing:
//! - before a native edit, only when the view is behind the newest entry
//! - after every native edit
//! - after every committed transform or bracket insertion
//! - on navigation key release or mouse release, when at the newest entry
//!   and the state differs from it

use crate::config::{ConfigError, EngineConfig, ResolvedConfig};
use crate::keymap::{Command, Keymap};
use crate::tracing::SelectionSnapshot;

use super::events::{Disposition, EditorEvent};
use super::history::{EditHistory, HistoryEntry};
use super::hooks::{HookKind, Hooks};
use super::pairs::{close_bracket, PairMap};
use super::rewrite::RewriteRules;
use super::rows::{compute_rows, Row};
use super::selection::Selection;
use super::surface::TextSurface;
use super::transform::{transform_rows, TransformOutcome};

/// Editing engine attached to one text surface.
#[derive(Debug)]
pub struct Engine<S: TextSurface> {
    surface: S,
    history: EditHistory,
    pairs: PairMap,
    rules: RewriteRules,
    keymap: Keymap,
    hooks: Hooks,
}

impl<S: TextSurface> Engine<S> {
    /// Attach to `surface` after validating `config`.
    ///
    /// History starts empty.
    pub fn attach(surface: S, config: &EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_resolved(surface, config.resolve()?))
    }

    /// Attach with the built-in defaults
    pub fn with_defaults(surface: S) -> Self {
        Self::with_resolved(surface, ResolvedConfig::default())
    }

    /// Attach with already-validated settings
    pub fn with_resolved(surface: S, config: ResolvedConfig) -> Self {
        tracing::debug!(
            max_history = config.max_history_count,
            pairs = config.pairs.len(),
            bindings = config.keymap.bindings().len(),
            "engine attached"
        );
        Self {
            surface,
            history: EditHistory::with_max_entries(config.max_history_count),
            pairs: config.pairs,
            rules: config.rules,
            keymap: config.keymap,
            hooks: Hooks::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for the host to perform native edits
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Detach, returning the surface
    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn pairs(&self) -> &PairMap {
        &self.pairs
    }

    pub fn rules(&self) -> &RewriteRules {
        &self.rules
    }

    pub fn hooks_mut(&mut self) -> &mut Hooks {
        &mut self.hooks
    }

    /// Install a hook, replacing any previous one for this category
    pub fn set_hook<F>(&mut self, kind: HookKind, f: F)
    where
        F: FnMut(&EditorEvent, &[HistoryEntry]) + 'static,
    {
        self.hooks.set(kind, f);
    }

    /// Rows of the current text with selection flags
    pub fn rows(&self) -> Vec<Row> {
        compute_rows(&self.surface.text(), self.surface.selection())
    }

    fn selection_snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot::new(self.surface.selection(), self.surface.len_chars())
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Record the current text and selection
    pub fn snapshot(&mut self, prune_redo: bool) {
        self.record(self.surface.text(), prune_redo);
    }

    /// Record `text`, which must already be the surface's text
    fn record(&mut self, text: String, prune_redo: bool) {
        let entry = HistoryEntry::new(text, self.surface.selection());
        self.history.snapshot(entry, prune_redo);
    }

    /// Write text and selection back to the surface and focus it
    fn load(&mut self, text: &str, selection: Selection) {
        self.surface.set_text(text);
        self.surface.set_selection(selection);
        self.surface.focus();
    }

    /// Record a caret checkpoint unless it would duplicate the newest entry
    fn checkpoint(&mut self) {
        if !self.history.is_at_latest() {
            return;
        }
        let text = self.surface.text();
        let selection = self.surface.selection();
        if let Some(latest) = self.history.latest() {
            if latest.matches(&text, selection) {
                tracing::trace!("checkpoint skipped, state unchanged");
                return;
            }
        }
        self.history
            .snapshot(HistoryEntry::new(text, selection), true);
    }

    /// Load an entry into the surface without recording anything
    pub fn apply(&mut self, entry: &HistoryEntry) {
        self.load(&entry.text, entry.selection());
    }

    /// Step back one entry. Returns false at the oldest boundary.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.undo().cloned() else {
            tracing::debug!("undo: nothing older");
            return false;
        };
        tracing::debug!(index = self.history.index(), "undo");
        self.apply(&entry);
        true
    }

    /// Step forward one entry. Returns false at the newest boundary.
    pub fn redo(&mut self) -> bool {
        let Some(entry) = self.history.redo().cloned() else {
            tracing::debug!("redo: nothing newer");
            return false;
        };
        tracing::debug!(index = self.history.index(), "redo");
        self.apply(&entry);
        true
    }

    // =========================================================================
    // Transforms
    // =========================================================================

    fn commit(&mut self, op: &str, outcome: TransformOutcome) -> TransformOutcome {
        let before = self.selection_snapshot();
        self.load(&outcome.text, outcome.selection);
        self.record(outcome.text.clone(), true);

        tracing::debug!(
            op,
            changed_rows = outcome.changed_rows,
            diff = ?before.diff(&self.selection_snapshot()),
            "transform committed"
        );
        outcome
    }

    /// Comment or uncomment the selected rows
    pub fn toggle_comment(&mut self) -> TransformOutcome {
        let text = self.surface.text();
        let selection = self.surface.selection();
        let rows = compute_rows(&text, selection);
        let action = self.rules.comment_action(&rows);
        let is_caret = selection.is_caret();

        let outcome = transform_rows(&rows, selection, |row| {
            self.rules.toggle_comment(row, action, is_caret)
        });
        self.commit("toggle_comment", outcome)
    }

    /// Indent the selected rows by one unit
    pub fn indent(&mut self) -> TransformOutcome {
        let text = self.surface.text();
        let selection = self.surface.selection();
        let rows = compute_rows(&text, selection);
        let is_caret = selection.is_caret();

        let outcome = transform_rows(&rows, selection, |row| self.rules.indent(row, is_caret));
        self.commit("indent", outcome)
    }

    /// Outdent the selected rows by up to one unit
    pub fn outdent(&mut self) -> TransformOutcome {
        let text = self.surface.text();
        let selection = self.surface.selection();
        let rows = compute_rows(&text, selection);

        let outcome = transform_rows(&rows, selection, |row| self.rules.outdent(row));
        self.commit("outdent", outcome)
    }

    /// Insert a pair at the caret or wrap the selection.
    ///
    /// Returns false when `opening` is not a configured opener.
    pub fn close_bracket(&mut self, opening: char) -> bool {
        let Some(closing) = self.pairs.closing_for(opening) else {
            return false;
        };

        let text = self.surface.text();
        let selection = self.surface.selection();
        let outcome = close_bracket(&text, selection, opening, closing);
        if !self.history.is_at_latest() {
            self.record(text, true);
        }

        let before = self.selection_snapshot();
        self.load(&outcome.text, outcome.selection);
        self.record(outcome.text, true);

        tracing::debug!(
            %opening,
            %closing,
            diff = ?before.diff(&self.selection_snapshot()),
            "pair inserted"
        );
        true
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    fn fire(&mut self, kind: HookKind, event: &EditorEvent) {
        if self.hooks.is_set(kind) {
            self.hooks.fire(kind, event, self.history.make_contiguous());
        }
    }

    /// Handle one raw event from the surface.
    ///
    /// `Handled` means the engine already mutated the surface and the host
    /// must suppress its own default handling.
    pub fn handle_event(&mut self, event: &EditorEvent) -> Disposition {
        match event {
            EditorEvent::KeyDown(keystroke) => {
                let command = self.keymap.classify(keystroke, &self.pairs);
                tracing::trace!(%keystroke, %command, "keydown classified");

                match command {
                    Command::Redo => {
                        self.redo();
                        self.fire(HookKind::Redo, event);
                        Disposition::Handled
                    }
                    Command::Undo => {
                        self.undo();
                        self.fire(HookKind::Undo, event);
                        Disposition::Handled
                    }
                    Command::ToggleComment => {
                        self.toggle_comment();
                        self.fire(HookKind::KeyDown, event);
                        Disposition::Handled
                    }
                    Command::Indent => {
                        self.indent();
                        self.fire(HookKind::KeyDown, event);
                        Disposition::Handled
                    }
                    Command::Outdent => {
                        self.outdent();
                        self.fire(HookKind::KeyDown, event);
                        Disposition::Handled
                    }
                    Command::InsertPair(opening) => {
                        let handled = self.close_bracket(opening);
                        self.fire(HookKind::KeyDown, event);
                        if handled {
                            Disposition::Handled
                        } else {
                            Disposition::PassThrough
                        }
                    }
                    Command::Navigate | Command::Edit | Command::Unbound => {
                        self.fire(HookKind::KeyDown, event);
                        Disposition::PassThrough
                    }
                }
            }
            EditorEvent::KeyUp(keystroke) => {
                if keystroke.key.is_navigation() {
                    self.checkpoint();
                }
                self.fire(HookKind::KeyUp, event);
                Disposition::PassThrough
            }
            EditorEvent::MouseUp => {
                self.checkpoint();
                self.fire(HookKind::MouseUp, event);
                Disposition::PassThrough
            }
            EditorEvent::BeforeInput => {
                if !self.history.is_at_latest() {
                    self.snapshot(true);
                }
                self.fire(HookKind::BeforeEdit, event);
                Disposition::PassThrough
            }
            EditorEvent::Input => {
                self.snapshot(true);
                self.fire(HookKind::AfterEdit, event);
                Disposition::PassThrough
            }
        }
    }

    /// Current selection of the surface
    pub fn selection(&self) -> Selection {
        self.surface.selection()
    }

    /// Current text of the surface
    pub fn text(&self) -> String {
        self.surface.text()
    }
}
