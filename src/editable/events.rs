//! Raw input events delivered by the host surface.

use std::fmt;

use crate::keymap::Keystroke;

/// A raw event from the attached surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// A key was pressed
    KeyDown(Keystroke),
    /// A key was released
    KeyUp(Keystroke),
    /// A mouse button was released over the surface (caret may have moved)
    MouseUp,
    /// The surface is about to mutate its text natively
    BeforeInput,
    /// The surface finished a native text mutation
    Input,
}

impl fmt::Display for EditorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorEvent::KeyDown(k) => write!(f, "keydown {}", k),
            EditorEvent::KeyUp(k) => write!(f, "keyup {}", k),
            EditorEvent::MouseUp => write!(f, "mouseup"),
            EditorEvent::BeforeInput => write!(f, "beforeinput"),
            EditorEvent::Input => write!(f, "input"),
        }
    }
}

/// What the host should do with an event after the engine saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The engine performed the mutation; suppress the default handling
    Handled,
    /// Let the surface handle the event natively
    PassThrough,
}

impl Disposition {
    pub fn prevents_default(self) -> bool {
        self == Disposition::Handled
    }
}
