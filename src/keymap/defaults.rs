//! Built-in chord bindings
//!
//! `keymap.yaml` at the crate root is compiled in; if it ever fails to parse
//! the same bindings are built in code.

use super::binding::Keybinding;
use super::command::Command;
use super::config::parse_keymap_yaml;
use super::types::{KeyCode, Keystroke, Modifiers};

const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// Source of the compiled-in keymap
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Bindings from the compiled-in keymap
pub fn load_default_keymap() -> Vec<Keybinding> {
    parse_keymap_yaml(DEFAULT_KEYMAP_YAML).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "embedded keymap rejected, using built-in bindings");
        default_bindings()
    })
}

/// Layer `user` over `base`, matching by keystroke.
///
/// A user binding replaces the base binding for the same keystroke in place,
/// `Unbound` deletes it, and anything new goes to the end.
pub fn merge_bindings(mut base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    for binding in user {
        let slot = base.iter().position(|b| b.keystroke == binding.keystroke);
        match (slot, binding.command) {
            (_, Command::Unbound) => base.retain(|b| b.keystroke != binding.keystroke),
            (Some(i), _) => base[i] = binding,
            (None, _) => base.push(binding),
        }
    }
    base
}

/// The five chords, in lookup priority order
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    [
        (KeyCode::Char('z'), cmd | Modifiers::SHIFT, Command::Redo),
        (KeyCode::Char('z'), cmd, Command::Undo),
        (KeyCode::Char('/'), cmd, Command::ToggleComment),
        (KeyCode::Tab, Modifiers::SHIFT, Command::Outdent),
        (KeyCode::Tab, Modifiers::NONE, Command::Indent),
    ]
    .into_iter()
    .map(|(key, mods, command)| Keybinding::new(Keystroke::new(key, mods), command))
    .collect()
}
