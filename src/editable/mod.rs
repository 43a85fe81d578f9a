//! Code-editor behaviours for a plain text surface.
//!
//! The engine attaches to anything implementing [`TextSurface`] and adds:
//!
//! - Snapshot undo/redo with redo-branch pruning ([`EditHistory`])
//! - Line comment toggling and indent/outdent over the selected rows, with
//!   the selection remapped to cover the same text afterwards
//! - Bracket and quote auto-pairing, wrapping a selection when one exists
//! - Raw event dispatch with per-category hooks
//!
//! # Architecture
//!
//! ```text
//! EditorEvent ─► Engine::handle_event ─► Keymap::classify ─► Command
//!                     │                                       │
//!                     │          compute_rows ─► transform_rows (RewriteRules)
//!                     │          close_bracket (PairMap)
//!                     ▼
//!               EditHistory::snapshot ─► Hooks::fire
//! ```
//!
//! # Example
//!
//! ```
//! use textarea_engine::editable::{Engine, Selection, StringSurface, TextSurface};
//!
//! let surface = StringSurface::with_selection("foo\nbar", Selection::new(0, 7));
//! let mut engine = Engine::with_defaults(surface);
//!
//! engine.toggle_comment();
//! assert_eq!(engine.surface().text(), "// foo\n// bar");
//! assert_eq!(engine.selection(), Selection::new(0, 13));
//! ```

mod engine;
mod events;
mod history;
mod hooks;
mod pairs;
mod rewrite;
mod rows;
mod selection;
mod surface;
mod transform;

pub use engine::Engine;
pub use events::{Disposition, EditorEvent};
pub use history::{EditHistory, HistoryEntry, DEFAULT_MAX_HISTORY};
pub use hooks::{HookFn, HookKind, Hooks};
pub use pairs::{close_bracket, PairMap, PairOutcome, DEFAULT_PAIRS};
pub use rewrite::{CommentAction, RewriteRules, DEFAULT_COMMENT_PREFIX, DEFAULT_INDENT_WIDTH};
pub use rows::{compute_rows, selected_rows, Row, LINE_BREAK};
pub use selection::Selection;
pub use surface::{RopeSurface, StringSurface, TextSurface};
pub use transform::{transform_rows, TransformOutcome};
