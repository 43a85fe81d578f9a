//! Key classification for the editing engine
//!
//! This module turns raw keystrokes into semantic commands:
//! - Chord bindings (undo, redo, comment toggle, indent/outdent), configurable via YAML
//! - Bracket keys taken from the configured pair map
//! - Fallthrough to native navigation or editing
//!
//! # Architecture
//!
//! ```text
//! host key event → Keystroke → Keymap::classify() → Command → Engine
//! ```

mod binding;
mod command;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{
    load_keymap_file, parse_binding_configs, parse_key_string, parse_keymap_yaml, BindingConfig,
    KeymapError,
};
pub use defaults::{default_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
