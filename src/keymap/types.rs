//! Key and modifier types the classifier works on

use std::fmt;
use std::ops::BitOr;

/// Held modifier keys, packed into one byte
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

const CTRL_BIT: u8 = 1;
const SHIFT_BIT: u8 = 1 << 1;
const ALT_BIT: u8 = 1 << 2;
const META_BIT: u8 = 1 << 3;

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(CTRL_BIT);
    pub const SHIFT: Modifiers = Modifiers(SHIFT_BIT);
    pub const ALT: Modifiers = Modifiers(ALT_BIT);
    /// Cmd on macOS, the Windows/Super key elsewhere
    pub const META: Modifiers = Modifiers(META_BIT);

    const fn has(self, bit: u8) -> bool {
        self.0 & bit == bit
    }

    pub const fn ctrl(self) -> bool {
        self.has(CTRL_BIT)
    }

    pub const fn shift(self) -> bool {
        self.has(SHIFT_BIT)
    }

    pub const fn alt(self) -> bool {
        self.has(ALT_BIT)
    }

    pub const fn meta(self) -> bool {
        self.has(META_BIT)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every modifier in `other` is also held here
    pub const fn contains(self, other: Modifiers) -> bool {
        self.has(other.0)
    }

    /// The modifier chords are written with: Meta on macOS, Ctrl elsewhere
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::META
        } else {
            Modifiers::CTRL
        }
    }

    /// Either Ctrl or Meta is held
    pub const fn has_command(self) -> bool {
        self.ctrl() || self.meta()
    }

    /// Collapse Meta into Ctrl so both spell "command"
    pub const fn fold_command(self) -> Modifiers {
        if self.meta() {
            Modifiers((self.0 & !META_BIT) | CTRL_BIT)
        } else {
            self
        }
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (CTRL_BIT, "Ctrl"),
            (SHIFT_BIT, "Shift"),
            (ALT_BIT, "Alt"),
            (META_BIT, if cfg!(target_os = "macos") { "Cmd" } else { "Meta" }),
        ];
        let held: Vec<&str> = names
            .iter()
            .filter(|(bit, _)| self.has(*bit))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&held.join("+"))
    }
}

/// Physical or logical key, as reported by the host surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Anything the engine has no use for
    Other,
}

impl KeyCode {
    /// Keys that only move the caret or dismiss; releasing one may record a
    /// caret checkpoint
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            KeyCode::Up
                | KeyCode::Down
                | KeyCode::Left
                | KeyCode::Right
                | KeyCode::Home
                | KeyCode::End
                | KeyCode::PageUp
                | KeyCode::PageDown
                | KeyCode::Escape
        )
    }

    fn name(self) -> Option<&'static str> {
        let name = match self {
            KeyCode::Char(_) => return None,
            KeyCode::Enter => "Enter",
            KeyCode::Escape => "Esc",
            KeyCode::Tab => "Tab",
            KeyCode::Backspace => "Backspace",
            KeyCode::Delete => "Del",
            KeyCode::Up => "Up",
            KeyCode::Down => "Down",
            KeyCode::Left => "Left",
            KeyCode::Right => "Right",
            KeyCode::Home => "Home",
            KeyCode::End => "End",
            KeyCode::PageUp => "PgUp",
            KeyCode::PageDown => "PgDn",
            KeyCode::Other => "?",
        };
        Some(name)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.name()) {
            (_, Some(name)) => f.write_str(name),
            (KeyCode::Char(' '), None) => f.write_str("Space"),
            (KeyCode::Char(c), None) => write!(f, "{}", c.to_uppercase()),
            _ => Ok(()),
        }
    }
}

/// A key together with the modifiers held when it was pressed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Unmodified named key
    pub const fn key(key: KeyCode) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Unmodified character key. The character is kept as typed; chord
    /// bindings match letters case-insensitively.
    pub fn char(c: char) -> Self {
        Self::char_with_mods(c, Modifiers::NONE)
    }

    pub fn char_with_mods(c: char, mods: Modifiers) -> Self {
        Self::new(KeyCode::Char(c), mods)
    }

    /// The typed character, if this is a character key
    pub fn as_char(&self) -> Option<char> {
        match self.key {
            KeyCode::Char(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.mods, self.key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_command_maps_meta_to_ctrl() {
        let folded = (Modifiers::META | Modifiers::SHIFT).fold_command();
        assert_eq!(folded, Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(Modifiers::ALT.fold_command(), Modifiers::ALT);
        assert!(Modifiers::META.has_command());
        assert!(!Modifiers::SHIFT.has_command());
    }

    #[test]
    fn test_contains() {
        let held = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(held.contains(Modifiers::CTRL));
        assert!(held.contains(Modifiers::NONE));
        assert!(!held.contains(Modifiers::ALT));
        assert!(!Modifiers::NONE.contains(Modifiers::SHIFT));
    }

    #[test]
    fn test_navigation_keys() {
        assert!(KeyCode::Left.is_navigation());
        assert!(KeyCode::PageDown.is_navigation());
        assert!(KeyCode::Escape.is_navigation());
        assert!(!KeyCode::Tab.is_navigation());
        assert!(!KeyCode::Backspace.is_navigation());
        assert!(!KeyCode::Char('a').is_navigation());
    }

    #[test]
    fn test_keystroke_char_keeps_case() {
        assert_eq!(Keystroke::char('Z').key, KeyCode::Char('Z'));
        assert_eq!(Keystroke::char('(').as_char(), Some('('));
        assert_eq!(Keystroke::key(KeyCode::Tab).as_char(), None);
    }

    #[test]
    fn test_display() {
        let stroke = Keystroke::new(KeyCode::Tab, Modifiers::SHIFT);
        assert_eq!(stroke.to_string(), "Shift+Tab");
        assert_eq!(
            Keystroke::char_with_mods('/', Modifiers::CTRL).to_string(),
            "Ctrl+/"
        );
        assert_eq!(Keystroke::char(' ').to_string(), "Space");
        assert_eq!(Keystroke::char('z').to_string(), "Z");
    }
}
