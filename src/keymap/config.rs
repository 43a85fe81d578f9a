//! YAML keymap parsing
//!
//! Bindings come either from a standalone keymap file or from the `bindings`
//! list of the engine config:
//!
//! ```yaml
//! bindings:
//!   - key: "ctrl+y"
//!     command: Redo
//!   - key: "tab"
//!     command: Unbound   # drop the default Indent binding
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::binding::Keybinding;
use super::command::Command;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    pub bindings: Vec<BindingConfig>,
}

/// One `{key, command}` entry, optionally limited to a platform
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Errors raised while reading keybindings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeymapError {
    #[error("cannot read keymap: {0}")]
    IoError(String),
    #[error("malformed keymap YAML: {0}")]
    ParseError(String),
    #[error("bad key {0:?}")]
    InvalidKey(String),
    #[error("unknown command {0:?}")]
    InvalidCommand(String),
}

/// Read bindings from a keymap file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let yaml = std::fs::read_to_string(path)
        .map_err(|e| KeymapError::IoError(format!("{}: {}", path.display(), e)))?;
    parse_keymap_yaml(&yaml)
}

/// Parse a keymap document
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let doc: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;
    parse_binding_configs(&doc.bindings)
}

/// Turn raw entries into bindings, dropping entries for other platforms
pub fn parse_binding_configs(entries: &[BindingConfig]) -> Result<Vec<Keybinding>, KeymapError> {
    let platform = current_platform();

    entries
        .iter()
        .filter(|entry| entry.platform.as_deref().map_or(true, |p| p == platform))
        .map(|entry| {
            let keystroke = parse_key_string(&entry.key)?;
            let command = entry
                .command
                .parse::<Command>()
                .map_err(|_| KeymapError::InvalidCommand(entry.command.clone()))?;
            Ok(Keybinding::new(keystroke, command))
        })
        .collect()
}

fn parse_modifier(name: &str) -> Option<Modifiers> {
    let mods = match name {
        "cmd" | "mod" => Modifiers::cmd(),
        "ctrl" | "control" => Modifiers::CTRL,
        "shift" => Modifiers::SHIFT,
        "alt" | "option" | "opt" => Modifiers::ALT,
        "meta" | "super" | "win" => Modifiers::META,
        _ => return None,
    };
    Some(mods)
}

/// Parse `"cmd+shift+z"`-style strings. A trailing `++` means the plus key.
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let bad = || KeymapError::InvalidKey(key_str.to_string());

    let (body, plus) = match key_str.strip_suffix("++") {
        Some(rest) => (rest, true),
        None => (key_str, false),
    };

    let mut mods = Modifiers::NONE;
    let mut key = plus.then_some(KeyCode::Char('+'));

    for part in body.split('+').filter(|p| !p.is_empty()) {
        let part = part.to_lowercase();
        if let Some(m) = parse_modifier(&part) {
            mods = mods | m;
        } else if key.is_none() {
            key = Some(parse_key_code(&part).ok_or_else(bad)?);
        } else {
            return Err(bad());
        }
    }

    key.map(|k| Keystroke::new(k, mods)).ok_or_else(bad)
}

fn parse_key_code(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let code = match name {
        "enter" | "return" => KeyCode::Enter,
        "escape" | "esc" => KeyCode::Escape,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        "slash" => KeyCode::Char('/'),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        _ => return None,
    };
    Some(code)
}

fn current_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}
