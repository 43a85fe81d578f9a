//! Caller-supplied callbacks fired after the engine handles an event.
//!
//! There is at most one subscriber per category. A callback receives the
//! originating event and the history entries as they stand after handling.

use std::fmt;

use super::events::EditorEvent;
use super::history::HistoryEntry;

/// Callback signature for every hook category
pub type HookFn = Box<dyn FnMut(&EditorEvent, &[HistoryEntry])>;

/// Hook categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    Undo,
    Redo,
    KeyDown,
    KeyUp,
    MouseUp,
    BeforeEdit,
    AfterEdit,
}

/// One optional callback slot per category
#[derive(Default)]
pub struct Hooks {
    on_undo: Option<HookFn>,
    on_redo: Option<HookFn>,
    on_keydown: Option<HookFn>,
    on_keyup: Option<HookFn>,
    on_mouseup: Option<HookFn>,
    on_before_edit: Option<HookFn>,
    on_after_edit: Option<HookFn>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, kind: HookKind) -> &mut Option<HookFn> {
        match kind {
            HookKind::Undo => &mut self.on_undo,
            HookKind::Redo => &mut self.on_redo,
            HookKind::KeyDown => &mut self.on_keydown,
            HookKind::KeyUp => &mut self.on_keyup,
            HookKind::MouseUp => &mut self.on_mouseup,
            HookKind::BeforeEdit => &mut self.on_before_edit,
            HookKind::AfterEdit => &mut self.on_after_edit,
        }
    }

    /// Install a callback, replacing any previous one for this category
    pub fn set<F>(&mut self, kind: HookKind, f: F)
    where
        F: FnMut(&EditorEvent, &[HistoryEntry]) + 'static,
    {
        *self.slot_mut(kind) = Some(Box::new(f));
    }

    /// Remove the callback for this category
    pub fn clear(&mut self, kind: HookKind) {
        *self.slot_mut(kind) = None;
    }

    pub fn is_set(&self, kind: HookKind) -> bool {
        match kind {
            HookKind::Undo => self.on_undo.is_some(),
            HookKind::Redo => self.on_redo.is_some(),
            HookKind::KeyDown => self.on_keydown.is_some(),
            HookKind::KeyUp => self.on_keyup.is_some(),
            HookKind::MouseUp => self.on_mouseup.is_some(),
            HookKind::BeforeEdit => self.on_before_edit.is_some(),
            HookKind::AfterEdit => self.on_after_edit.is_some(),
        }
    }

    /// Invoke the callback for `kind`, if any
    pub fn fire(&mut self, kind: HookKind, event: &EditorEvent, history: &[HistoryEntry]) {
        if let Some(hook) = self.slot_mut(kind) {
            hook(event, history);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_undo", &self.on_undo.is_some())
            .field("on_redo", &self.on_redo.is_some())
            .field("on_keydown", &self.on_keydown.is_some())
            .field("on_keyup", &self.on_keyup.is_some())
            .field("on_mouseup", &self.on_mouseup.is_some())
            .field("on_before_edit", &self.on_before_edit.is_some())
            .field("on_after_edit", &self.on_after_edit.is_some())
            .finish()
    }
}
