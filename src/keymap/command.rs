//! Command enum: the semantic result of classifying a raw key event

use std::fmt;
use std::str::FromStr;

/// Every semantic command the classifier can produce.
///
/// Only the chord commands (`Undo` through `Outdent`) can be bound to keys;
/// the rest are derived from the key itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Step back through history
    Undo,
    /// Step forward through history
    Redo,
    /// Comment or uncomment the selected rows
    ToggleComment,
    /// Indent the selected rows
    Indent,
    /// Outdent the selected rows
    Outdent,
    /// Insert or wrap with the pair opened by this character
    InsertPair(char),
    /// Caret/selection movement, handled natively
    Navigate,
    /// Ordinary text input or deletion, handled natively
    Edit,
    /// Placeholder used in keymap files to remove a default binding
    Unbound,
}

impl Command {
    /// Bindable commands in the order the classifier tests them
    pub const PRIORITY: [Command; 5] = [
        Command::Redo,
        Command::Undo,
        Command::ToggleComment,
        Command::Outdent,
        Command::Indent,
    ];

    /// Whether the engine performs this command itself (suppressing the
    /// surface's default handling)
    pub fn is_handled_by_engine(self) -> bool {
        !matches!(
            self,
            Command::Navigate | Command::Edit | Command::Unbound
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Undo => write!(f, "Undo"),
            Command::Redo => write!(f, "Redo"),
            Command::ToggleComment => write!(f, "ToggleComment"),
            Command::Indent => write!(f, "Indent"),
            Command::Outdent => write!(f, "Outdent"),
            Command::InsertPair(c) => write!(f, "InsertPair({})", c),
            Command::Navigate => write!(f, "Navigate"),
            Command::Edit => write!(f, "Edit"),
            Command::Unbound => write!(f, "Unbound"),
        }
    }
}

// Parse bindable command names from keymap YAML
impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Undo" => Ok(Command::Undo),
            "Redo" => Ok(Command::Redo),
            "ToggleComment" => Ok(Command::ToggleComment),
            "Indent" => Ok(Command::Indent),
            "Outdent" => Ok(Command::Outdent),
            "Unbound" => Ok(Command::Unbound),
            _ => Err(()),
        }
    }
}
