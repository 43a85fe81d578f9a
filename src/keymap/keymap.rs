//! Chord lookup and keystroke classification

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;
use crate::editable::PairMap;

/// Chord bindings for one engine
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
}

impl Keymap {
    /// A keymap with no chords; every key classifies by pairs or falls through
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: impl IntoIterator<Item = Keybinding>) -> Self {
        let mut keymap = Self::new();
        keymap.extend(bindings);
        keymap
    }

    /// `Unbound` entries are dropped.
    pub fn extend(&mut self, bindings: impl IntoIterator<Item = Keybinding>) {
        self.bindings.extend(
            bindings
                .into_iter()
                .filter(|binding| binding.command != Command::Unbound),
        );
    }

    /// Look up the chord command for a keystroke.
    ///
    /// Commands are tried in `Command::PRIORITY` order regardless of the
    /// order bindings were added in.
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        Command::PRIORITY.into_iter().find(|command| {
            self.bindings
                .iter()
                .any(|b| b.command == *command && b.matches(keystroke))
        })
    }

    /// Classify a key-down keystroke into a semantic command.
    ///
    /// Order: chord bindings, then opening characters from `pairs` (only
    /// without a command modifier), then navigation keys, then plain edits.
    pub fn classify(&self, keystroke: &Keystroke, pairs: &PairMap) -> Command {
        if let Some(command) = self.lookup(keystroke) {
            return command;
        }

        if let Some(ch) = keystroke.as_char() {
            if pairs.is_opening(ch) && !keystroke.mods.has_command() {
                return Command::InsertPair(ch);
            }
        }

        if keystroke.key.is_navigation() {
            Command::Navigate
        } else {
            Command::Edit
        }
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    /// First keystroke bound to `command`, formatted for menus and tooltips
    pub fn display_for(&self, command: Command) -> Option<String> {
        self.bindings
            .iter()
            .find(|binding| binding.command == command)
            .map(|binding| binding.keystroke.to_string())
    }
}
