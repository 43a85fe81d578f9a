//! Engine configuration
//!
//! Read from `~/.config/textarea-engine/config.yaml` by default. Every field
//! is optional; missing fields take the built-in defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::editable::{PairMap, RewriteRules, DEFAULT_MAX_HISTORY, DEFAULT_PAIRS};
use crate::keymap::{
    load_default_keymap, merge_bindings, parse_binding_configs, BindingConfig, Keymap, KeymapError,
};

/// Errors produced while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("max_history_count must be at least 1")]
    ZeroHistoryLimit,

    #[error("pair opener must be a single character, got {0:?}")]
    InvalidPairKey(String),

    #[error("pair closer for {opening:?} must be a single character, got {closing:?}")]
    InvalidPairValue { opening: String, closing: String },

    #[error("comment prefix must be a non-empty single-line string, got {0:?}")]
    InvalidCommentPrefix(String),

    #[error("indent_width must be at least 1")]
    ZeroIndentWidth,

    #[error("invalid bindings: {0}")]
    Keymap(#[from] KeymapError),
}

/// User-facing engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of history snapshots retained
    #[serde(default = "default_max_history_count")]
    pub max_history_count: usize,

    /// Opening character to closing character, both single-char strings
    #[serde(default = "default_pairs")]
    pub pairs: BTreeMap<String, String>,

    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,

    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Keybindings merged over the defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<Vec<BindingConfig>>,
}

fn default_max_history_count() -> usize {
    DEFAULT_MAX_HISTORY
}

fn default_pairs() -> BTreeMap<String, String> {
    DEFAULT_PAIRS
        .iter()
        .map(|(o, c)| (o.to_string(), c.to_string()))
        .collect()
}

fn default_comment_prefix() -> String {
    crate::editable::DEFAULT_COMMENT_PREFIX.to_string()
}

fn default_indent_width() -> usize {
    crate::editable::DEFAULT_INDENT_WIDTH
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_history_count: default_max_history_count(),
            pairs: default_pairs(),
            comment_prefix: default_comment_prefix(),
            indent_width: default_indent_width(),
            bindings: None,
        }
    }
}

/// Validated configuration, ready for an engine to use
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub max_history_count: usize,
    pub pairs: PairMap,
    pub rules: RewriteRules,
    pub keymap: Keymap,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            max_history_count: DEFAULT_MAX_HISTORY,
            pairs: PairMap::default(),
            rules: RewriteRules::default(),
            keymap: Keymap::with_bindings(load_default_keymap()),
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl EngineConfig {
    /// Parse config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load config from the default location, or return defaults if absent or broken
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Serialize to YAML
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate every field and build the resolved settings
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        if self.max_history_count == 0 {
            return Err(ConfigError::ZeroHistoryLimit);
        }

        let mut pairs = Vec::with_capacity(self.pairs.len());
        for (opening, closing) in &self.pairs {
            let open = single_char(opening)
                .ok_or_else(|| ConfigError::InvalidPairKey(opening.clone()))?;
            let close = single_char(closing).ok_or_else(|| ConfigError::InvalidPairValue {
                opening: opening.clone(),
                closing: closing.clone(),
            })?;
            pairs.push((open, close));
        }

        if self.comment_prefix.is_empty() || self.comment_prefix.contains('\n') {
            return Err(ConfigError::InvalidCommentPrefix(self.comment_prefix.clone()));
        }

        if self.indent_width == 0 {
            return Err(ConfigError::ZeroIndentWidth);
        }

        let defaults = load_default_keymap();
        let bindings = match &self.bindings {
            Some(user) => merge_bindings(defaults, parse_binding_configs(user)?),
            None => defaults,
        };

        Ok(ResolvedConfig {
            max_history_count: self.max_history_count,
            pairs: PairMap::new(pairs),
            rules: RewriteRules {
                comment_prefix: self.comment_prefix.clone(),
                indent_width: self.indent_width,
            },
            keymap: Keymap::with_bindings(bindings),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{Command, KeyCode, Keystroke, Modifiers};
    use std::io::Write;

    #[test]
    fn test_default_config_resolves() {
        let resolved = EngineConfig::default().resolve().unwrap();
        assert_eq!(resolved.max_history_count, 500);
        assert_eq!(resolved.pairs, PairMap::default());
        assert_eq!(resolved.rules.comment_prefix, "//");
        assert_eq!(resolved.rules.indent_width, 2);
        assert_eq!(resolved.keymap.bindings().len(), 5);
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = EngineConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let config = EngineConfig::from_yaml_str(
            r##"
max_history_count: 20
comment_prefix: "#"
pairs:
  "(": ")"
"##,
        )
        .unwrap();

        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.max_history_count, 20);
        assert_eq!(resolved.rules.comment_prefix, "#");
        assert_eq!(resolved.rules.indent_width, 2);
        assert_eq!(resolved.pairs.len(), 1);
        assert_eq!(resolved.pairs.closing_for('('), Some(')'));
        assert_eq!(resolved.pairs.closing_for('['), None);
    }

    #[test]
    fn test_zero_history_rejected() {
        let config = EngineConfig {
            max_history_count: 0,
            ..Default::default()
        };
        assert!(matches!(config.resolve(), Err(ConfigError::ZeroHistoryLimit)));
    }

    #[test]
    fn test_multi_char_pair_rejected() {
        let mut config = EngineConfig::default();
        config.pairs.insert("((".into(), ")".into());
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::InvalidPairKey(k)) if k == "(("
        ));

        let mut config = EngineConfig::default();
        config.pairs.insert("|".into(), "".into());
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::InvalidPairValue { .. })
        ));
    }

    #[test]
    fn test_bad_prefix_and_width_rejected() {
        let config = EngineConfig {
            comment_prefix: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::InvalidCommentPrefix(_))
        ));

        let config = EngineConfig {
            comment_prefix: "#\n".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::InvalidCommentPrefix(_))
        ));

        let config = EngineConfig {
            indent_width: 0,
            ..Default::default()
        };
        assert!(matches!(config.resolve(), Err(ConfigError::ZeroIndentWidth)));
    }

    #[test]
    fn test_bindings_merge_over_defaults() {
        let config = EngineConfig::from_yaml_str(
            r#"
bindings:
  - key: "ctrl+y"
    command: Redo
  - key: "tab"
    command: Unbound
"#,
        )
        .unwrap();

        let keymap = config.resolve().unwrap().keymap;
        assert_eq!(
            keymap.lookup(&Keystroke::new(KeyCode::Char('y'), Modifiers::CTRL)),
            Some(Command::Redo)
        );
        assert_eq!(keymap.lookup(&Keystroke::key(KeyCode::Tab)), None);
        assert_eq!(
            keymap.lookup(&Keystroke::new(KeyCode::Char('z'), Modifiers::CTRL)),
            Some(Command::Undo)
        );
    }

    #[test]
    fn test_bad_binding_rejected() {
        let config = EngineConfig::from_yaml_str(
            r#"
bindings:
  - key: "ctrl+z"
    command: Explode
"#,
        )
        .unwrap();
        assert!(matches!(config.resolve(), Err(ConfigError::Keymap(_))));
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            EngineConfig::from_yaml_str("max_history_count: [1, 2"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "indent_width: 4").unwrap();

        let config = EngineConfig::load_from(file.path()).unwrap();
        assert_eq!(config.indent_width, 4);
        assert_eq!(config.max_history_count, 500);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::load_from(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_yaml_roundtrip_keeps_defaults() {
        let yaml = EngineConfig::default().to_yaml_string().unwrap();
        assert_eq!(
            EngineConfig::from_yaml_str(&yaml).unwrap(),
            EngineConfig::default()
        );
    }
}
