//! Utility modules

pub mod text;

pub use text::{char_len, char_to_byte, is_blank, leading_spaces, slice_chars, split_at_char};
