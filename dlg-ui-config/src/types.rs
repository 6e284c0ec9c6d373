//! Configuration section types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Feature switches
// ============================================================================

/// Which dialog helpers are enabled when a dialog is initialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsConfig {
    /// Scan for access-key attributes, mark the key in each label and bind it
    #[serde(default = "crate::defaults::bool_true")]
    pub access_keys: bool,

    /// Wire host callbacks to elements carrying a callback role class
    #[serde(default = "crate::defaults::bool_true")]
    pub assign_callbacks: bool,

    /// Enable the confirm / cancel / help shortcut keys
    #[serde(default = "crate::defaults::bool_true")]
    pub assign_shortcuts: bool,

    /// Modifier held together with an access key, e.g. "Alt" or "Ctrl+Alt"
    #[serde(default = "crate::defaults::access_key_modifier")]
    pub access_key_modifier: String,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            access_keys: crate::defaults::bool_true(),
            assign_callbacks: crate::defaults::bool_true(),
            assign_shortcuts: crate::defaults::bool_true(),
            access_key_modifier: crate::defaults::access_key_modifier(),
        }
    }
}

// ============================================================================
// Shortcut keys
// ============================================================================

/// Key combinations reserved by the shortcut dispatcher.
///
/// Each value uses the keybinding syntax ("Enter", "Ctrl+Tab", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutConfig {
    #[serde(default = "crate::defaults::confirm_key")]
    pub confirm: String,

    #[serde(default = "crate::defaults::cancel_key")]
    pub cancel: String,

    #[serde(default = "crate::defaults::help_key")]
    pub help: String,

    /// Forward tab cycling; the same combination plus Shift cycles backwards
    #[serde(default = "crate::defaults::tab_cycle_key")]
    pub tab_cycle: String,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            confirm: crate::defaults::confirm_key(),
            cancel: crate::defaults::cancel_key(),
            help: crate::defaults::help_key(),
            tab_cycle: crate::defaults::tab_cycle_key(),
        }
    }
}

// ============================================================================
// Markup convention
// ============================================================================

/// Names the dialog markup uses to mark up roles, access keys and tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupConfig {
    /// Class prefix followed by the role name, e.g. `dlg-callback-ok`
    #[serde(default = "crate::defaults::callback_class_prefix")]
    pub callback_class_prefix: String,

    /// Class marking the control the confirm key prefers
    #[serde(default = "crate::defaults::default_action_class")]
    pub default_action_class: String,

    /// Attribute holding the literal access-key character
    #[serde(default = "crate::defaults::access_key_attribute")]
    pub access_key_attribute: String,

    /// Tag of the element wrapped around the access key in a label
    #[serde(default = "crate::defaults::access_key_marker_tag")]
    pub access_key_marker_tag: String,

    #[serde(default = "crate::defaults::tab_selected_class")]
    pub tab_selected_class: String,

    #[serde(default = "crate::defaults::tab_content_selected_class")]
    pub tab_content_selected_class: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            callback_class_prefix: crate::defaults::callback_class_prefix(),
            default_action_class: crate::defaults::default_action_class(),
            access_key_attribute: crate::defaults::access_key_attribute(),
            access_key_marker_tag: crate::defaults::access_key_marker_tag(),
            tab_selected_class: crate::defaults::tab_selected_class(),
            tab_content_selected_class: crate::defaults::tab_content_selected_class(),
        }
    }
}

// ============================================================================
// Tab interface
// ============================================================================

/// Static settings of a tab interface.
///
/// The tab and panel containers are runtime handles and are supplied when
/// the tab interface is attached, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabConfig {
    /// Index of the tab selected at setup
    #[serde(default = "crate::defaults::zero")]
    pub start_index: usize,

    /// Register the tab-cycling shortcut
    #[serde(default = "crate::defaults::bool_true")]
    pub init_shortcuts: bool,
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            start_index: crate::defaults::zero(),
            init_shortcuts: crate::defaults::bool_true(),
        }
    }
}
