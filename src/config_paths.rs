//! Where the engine looks for its config file and writes logs
//!
//! Everything sits in one per-user directory named after the crate:
//! `$XDG_CONFIG_HOME` or `~/.config` on Unix and macOS, `%APPDATA%` on Windows.

use std::env;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "textarea-engine";

fn config_root() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        return env::var_os("APPDATA").map(PathBuf::from);
    }
    match env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => Some(PathBuf::from(xdg)),
        _ => dirs::home_dir().map(|home| home.join(".config")),
    }
}

/// Per-user directory holding `config.yaml` and `logs/`
pub fn config_dir() -> Option<PathBuf> {
    config_root().map(|root| root.join(APP_DIR))
}

/// Default engine config file
pub fn config_file() -> Option<PathBuf> {
    Some(config_dir()?.join("config.yaml"))
}

/// Directory for rolling log files
pub fn logs_dir() -> Option<PathBuf> {
    Some(config_dir()?.join("logs"))
}

/// Create the log directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or("no home or config directory")?;
    fs::create_dir_all(&logs).map_err(|e| format!("cannot create {}: {}", logs.display(), e))?;
    Ok(logs)
}
