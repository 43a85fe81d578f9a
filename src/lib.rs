//! textarea-engine - code-editor behaviours for plain text fields
//!
//! Attaches to a text surface and adds snapshot undo/redo, line comment
//! toggling, indent/outdent and bracket auto-pairing, all of which keep the
//! user's selection on the same logical text.

pub mod config;
pub mod config_paths;
pub mod editable;
pub mod keymap;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigError, EngineConfig, ResolvedConfig};
pub use editable::{
    Disposition, EditHistory, EditorEvent, Engine, HistoryEntry, HookKind, Selection,
    StringSurface, TextSurface,
};
pub use keymap::{Command, KeyCode, Keymap, Keystroke, Modifiers};
