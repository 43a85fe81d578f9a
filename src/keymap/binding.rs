//! Keybinding struct representing a mapping from a keystroke to a command

use super::command::Command;
use super::types::{KeyCode, Keystroke};

/// A single keybinding mapping one keystroke to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self { keystroke, command }
    }

    /// Check if a pressed keystroke triggers this binding.
    ///
    /// The command modifier (Ctrl or Meta, interchangeably) must be held
    /// exactly when the binding asks for it. Shift and Alt required by the
    /// binding must be held; extra ones are tolerated, which is why Redo has
    /// to be tested before Undo. Character keys compare case-insensitively
    /// since hosts report Shift+Z as `Z`.
    pub fn matches(&self, pressed: &Keystroke) -> bool {
        let same_key = match (self.keystroke.key, pressed.key) {
            (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        };
        if !same_key {
            return false;
        }
        let want = self.keystroke.mods.fold_command();
        let got = pressed.mods.fold_command();
        want.ctrl() == got.ctrl() && got.contains(want)
    }
}
