//! Notes configuration with layered resolution.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::defaults;
use crate::constants::{ENV_ESCAPE_HTML, ENV_LINK_CLASS, PROJECT_CONFIG_FILENAME};
use crate::errors::ConfigError;
use crate::models::FairnessNote;

static RE_CSS_CLASS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^-?[_a-zA-Z][_a-zA-Z0-9-]*$").ok());

/// A note declared in config. The table key supplies the note key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub info: String,
    pub source: String,
    pub link: String,
}

impl NoteEntry {
    pub fn into_note(self, key: impl Into<String>) -> FairnessNote {
        FairnessNote::new(key, self.info, self.source, self.link)
    }
}

/// Formatter and store configuration.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`FAID_*`)
/// 2. Project config (`faid.toml` in the report root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// CSS class put on the citation anchor.
    pub link_class: String,
    /// HTML-escape note fields before building the citation.
    pub escape_html: bool,
    /// Notes added on top of the built-in table.
    pub extra_notes: BTreeMap<String, NoteEntry>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            link_class: defaults::DEFAULT_LINK_CLASS.to_string(),
            escape_html: defaults::DEFAULT_ESCAPE_HTML,
            extra_notes: BTreeMap::new(),
        }
    }
}

impl NotesConfig {
    /// Load configuration for a report rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(PROJECT_CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        debug!(
            link_class = %config.link_class,
            escape_html = config.escape_html,
            extra_notes = config.extra_notes.len(),
            "notes config resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Unparseable values are ignored, keeping the file or default value.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(ENV_LINK_CLASS) {
            self.link_class = val;
        }
        if let Ok(val) = std::env::var(ENV_ESCAPE_HTML) {
            if let Some(v) = parse_bool(&val) {
                self.escape_html = v;
            }
        }
    }

    /// Validate the configuration values. Extra notes are validated when the
    /// store is built, where duplicate keys are also known.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_class = match RE_CSS_CLASS.as_ref() {
            Some(re) => re.is_match(&self.link_class),
            None => !self.link_class.is_empty(),
        };
        if !valid_class {
            return Err(ConfigError::ValidationFailed {
                field: "link_class".to_string(),
                message: format!("not a CSS class name: {:?}", self.link_class),
            });
        }
        Ok(())
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
