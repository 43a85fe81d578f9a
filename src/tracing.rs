//! Tracing setup and selection snapshots for diagnostics
//!
//! Console output respects the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=textarea_engine::editable=trace` - snapshots and key classification
//!
//! When a log directory is given, a second layer writes daily-rotated
//! `textarea-engine.log.YYYY-MM-DD` files at debug level.

use std::path::Path;

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter, Layer,
};

use crate::editable::Selection;

/// Install the global subscriber.
///
/// Fails if another global subscriber was installed first.
pub fn init(log_dir: Option<&Path>) -> Result<(), TryInitError> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = log_dir.map(|dir| {
        let file_appender = tracing_appender::rolling::daily(dir, "textarea-engine.log");
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new("debug"))
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
}

/// Install the global subscriber, logging to the default logs directory
pub fn init_default() -> Result<(), TryInitError> {
    match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => init(Some(&dir)),
        Err(e) => {
            eprintln!("textarea-engine: file logging disabled ({})", e);
            init(None)
        }
    }
}

/// Lightweight snapshot of the selection and text length for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub start: usize,
    pub end: usize,
    pub reversed: bool,
    pub text_len: usize,
}

impl SelectionSnapshot {
    pub fn new(selection: Selection, text_len: usize) -> Self {
        Self {
            start: selection.start,
            end: selection.end,
            reversed: selection.reversed,
            text_len,
        }
    }

    /// Describe what changed from `self` to `other`, or `None` if nothing did
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.start != other.start || self.end != other.end {
            changes.push(format!(
                "selection [{},{}] → [{},{}]",
                self.start, self.end, other.start, other.end
            ));
        }
        if self.reversed != other.reversed {
            let dir = if other.reversed { "backward" } else { "forward" };
            changes.push(format!("direction {}", dir));
        }
        if self.text_len != other.text_len {
            changes.push(format!("length {} → {}", self.text_len, other.text_len));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
