//! Bracket and quote auto-pairing.

use std::collections::BTreeMap;

use super::selection::Selection;
use crate::util::{char_len, split_at_char};

/// The seven default pairs: brackets map to their closer, quotes to themselves
pub const DEFAULT_PAIRS: [(char, char); 7] = [
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('<', '>'),
    ('\'', '\''),
    ('"', '"'),
    ('`', '`'),
];

/// Mapping from opening character to closing character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMap {
    pairs: BTreeMap<char, char>,
}

impl Default for PairMap {
    fn default() -> Self {
        Self::new(DEFAULT_PAIRS)
    }
}

impl PairMap {
    pub fn new(pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    /// Closing counterpart for `opening`, if it is a configured opener
    pub fn closing_for(&self, opening: char) -> Option<char> {
        self.pairs.get(&opening).copied()
    }

    pub fn is_opening(&self, ch: char) -> bool {
        self.pairs.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.pairs.iter().map(|(o, c)| (*o, *c))
    }
}

/// Result of inserting or wrapping with a pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairOutcome {
    pub text: String,
    pub selection: Selection,
}

/// Insert `opening`+`closing` at a caret, or wrap a non-empty selection.
///
/// A caret ends up between the two characters. A wrapped range stays
/// selected (shifted past the opener) with its direction preserved.
pub fn close_bracket(text: &str, selection: Selection, opening: char, closing: char) -> PairOutcome {
    let selection = selection.clamped(char_len(text));
    let (left, rest) = split_at_char(text, selection.start);
    let (center, right) = split_at_char(rest, selection.len());

    let mut out = String::with_capacity(text.len() + opening.len_utf8() + closing.len_utf8());
    out.push_str(left);
    out.push(opening);
    out.push_str(center);
    out.push(closing);
    out.push_str(right);

    let start = selection.start + 1;
    let selection = if selection.is_caret() {
        Selection::caret(start)
    } else {
        Selection::with_direction(start, start + selection.len(), selection.reversed)
    };

    PairOutcome {
        text: out,
        selection,
    }
}
