//! Utility functions for character-offset text handling
//!
//! The engine speaks in character offsets (Unicode scalar values) because that
//! is what text surfaces report for their selection. `String` indexing is in
//! bytes, so every slice goes through these helpers.

/// Number of characters in `text`
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convert a char offset to a byte offset, clamping to the end of `text`
pub fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Split `text` at a char offset into `(before, after)`
pub fn split_at_char(text: &str, char_offset: usize) -> (&str, &str) {
    text.split_at(char_to_byte(text, char_offset))
}

/// Slice `text` by a char range (clamped)
pub fn slice_chars(text: &str, start: usize, end: usize) -> &str {
    let start_byte = char_to_byte(text, start);
    let end_byte = char_to_byte(text, end.max(start));
    &text[start_byte..end_byte]
}

/// True if the line contains nothing but whitespace
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Count leading ASCII spaces, stopping at `limit`
pub fn leading_spaces(line: &str, limit: usize) -> usize {
    line.chars().take(limit).take_while(|c| *c == ' ').count()
}
