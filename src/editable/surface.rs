//! Text surface trait and implementations.
//!
//! A `TextSurface` is whatever text-bearing widget the engine is attached to:
//! it owns the full text value, the selection offsets and the focus flag.
//! The engine never touches a surface except through this trait.
//!
//! All offsets are character offsets.

use ropey::Rope;

use super::selection::Selection;
use crate::util::char_len;

/// Read-write access to an editable text surface.
pub trait TextSurface {
    /// Full text content
    fn text(&self) -> String;

    /// Replace the full text content.
    ///
    /// The selection is clamped to the new length.
    fn set_text(&mut self, text: &str);

    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Check if the surface is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Current selection
    fn selection(&self) -> Selection;

    /// Set the selection, clamped to `[0, len_chars]` with `start <= end`
    fn set_selection(&mut self, selection: Selection);

    /// Give the surface input focus
    fn focus(&mut self);

    /// Whether the surface currently has focus
    fn is_focused(&self) -> bool;
}

// =============================================================================
// StringSurface - in-memory surface for small inputs and tests
// =============================================================================

/// TextSurface implementation wrapping String.
#[derive(Debug, Clone, Default)]
pub struct StringSurface {
    text: String,
    selection: Selection,
    focused: bool,
}

impl StringSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface with the caret at the end of `s`
    pub fn from_text(s: &str) -> Self {
        let end = char_len(s);
        Self {
            text: s.to_string(),
            selection: Selection::caret(end),
            focused: false,
        }
    }

    /// Create a surface with an explicit selection
    pub fn with_selection(s: &str, selection: Selection) -> Self {
        let mut surface = Self::from_text(s);
        surface.set_selection(selection);
        surface
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl TextSurface for StringSurface {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.selection = self.selection.clamped(char_len(&self.text));
    }

    fn len_chars(&self) -> usize {
        char_len(&self.text)
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamped(self.len_chars());
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

// =============================================================================
// RopeSurface - for large multi-line buffers
// =============================================================================

/// TextSurface implementation wrapping ropey::Rope.
#[derive(Debug, Clone, Default)]
pub struct RopeSurface {
    rope: Rope,
    selection: Selection,
    focused: bool,
}

impl RopeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface with the caret at the end of `s`
    pub fn from_text(s: &str) -> Self {
        let rope = Rope::from_str(s);
        let end = rope.len_chars();
        Self {
            rope,
            selection: Selection::caret(end),
            focused: false,
        }
    }

    /// Access the underlying Rope for rope-specific operations
    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl TextSurface for RopeSurface {
    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.selection = self.selection.clamped(self.rope.len_chars());
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamped(self.rope.len_chars());
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}
