//! The top-level `DialogConfig` and YAML loading.

use crate::error::ConfigError;
use crate::types::{ControlsConfig, MarkupConfig, ShortcutConfig, TabConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options for one dialog initialization.
///
/// Every section and field is optional in YAML; missing values take their
/// defaults and unknown keys are ignored.
///
/// ```yaml
/// controls:
///   access_keys: true
///   access_key_modifier: Alt
/// shortcuts:
///   help: F1
/// tabs:
///   start_index: 1
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogConfig {
    #[serde(default)]
    pub controls: ControlsConfig,

    #[serde(default)]
    pub shortcuts: ShortcutConfig,

    #[serde(default)]
    pub markup: MarkupConfig,

    #[serde(default)]
    pub tabs: TabConfig,
}

impl DialogConfig {
    /// Parse and validate a config from YAML text.
    ///
    /// An empty document yields the default config.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: DialogConfig = serde_yaml_ng::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading dialog config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check the markup names for values no document could ever match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let markup = &self.markup;
        let class_names = [
            ("callback_class_prefix", &markup.callback_class_prefix),
            ("default_action_class", &markup.default_action_class),
            ("tab_selected_class", &markup.tab_selected_class),
            ("tab_content_selected_class", &markup.tab_content_selected_class),
        ];
        for (field, value) in class_names {
            if value.is_empty() || value.contains(char::is_whitespace) {
                return Err(ConfigError::Validation(format!(
                    "markup.{field} must be a single non-empty class token, got '{value}'"
                )));
            }
        }

        for (field, value) in [
            ("access_key_attribute", &markup.access_key_attribute),
            ("access_key_marker_tag", &markup.access_key_marker_tag),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "markup.{field} must not be empty"
                )));
            }
        }

        Ok(())
    }
}
