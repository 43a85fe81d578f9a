//! Per-row rewrite rules for comment toggling and indentation.
//!
//! Blank rows inside a range selection are left alone when commenting or
//! indenting, so separator lines in a block stay clean. A blank row under a
//! bare caret is still rewritten.

use super::rows::{selected_rows, Row};
use crate::util::{is_blank, leading_spaces};

/// Default line-comment marker
pub const DEFAULT_COMMENT_PREFIX: &str = "//";

/// Default indent width in spaces
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// What a comment toggle will do to the selected rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentAction {
    Comment,
    Uncomment,
}

/// Settings the row rewrites depend on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRules {
    pub comment_prefix: String,
    pub indent_width: usize,
}

impl Default for RewriteRules {
    fn default() -> Self {
        Self {
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl RewriteRules {
    /// Uncomment if any selected row already starts with the marker
    pub fn comment_action(&self, rows: &[Row]) -> CommentAction {
        if selected_rows(rows).any(|r| r.text.starts_with(&self.comment_prefix)) {
            CommentAction::Uncomment
        } else {
            CommentAction::Comment
        }
    }

    /// Rewrite one row for a comment toggle.
    ///
    /// Uncommenting strips the marker plus at most one following space.
    /// Commenting prepends the marker and a space.
    pub fn toggle_comment(&self, row: &Row, action: CommentAction, is_caret: bool) -> String {
        match action {
            CommentAction::Uncomment => match row.text.strip_prefix(&self.comment_prefix) {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest).to_string(),
                None => row.text.clone(),
            },
            CommentAction::Comment => {
                if is_caret || !is_blank(&row.text) {
                    format!("{} {}", self.comment_prefix, row.text)
                } else {
                    row.text.clone()
                }
            }
        }
    }

    /// Prepend one indent unit
    pub fn indent(&self, row: &Row, is_caret: bool) -> String {
        if is_caret || !is_blank(&row.text) {
            format!("{}{}", " ".repeat(self.indent_width), row.text)
        } else {
            row.text.clone()
        }
    }

    /// Strip up to one indent unit of leading spaces
    pub fn outdent(&self, row: &Row) -> String {
        let n = leading_spaces(&row.text, self.indent_width);
        // spaces are single-byte, so n chars == n bytes
        row.text[n..].to_string()
    }
}
