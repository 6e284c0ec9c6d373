//! Default value functions for configuration.
//!
//! Each function backs a `#[serde(default = "crate::defaults::...")]`
//! attribute and the matching `Default` impl.

// ── Primitive helpers ──────────────────────────────────────────────────────

pub fn bool_true() -> bool {
    true
}

pub fn zero() -> usize {
    0
}

// ── Controls ───────────────────────────────────────────────────────────────

pub fn access_key_modifier() -> String {
    "Alt".to_string()
}

// ── Shortcuts ──────────────────────────────────────────────────────────────

pub fn confirm_key() -> String {
    "Enter".to_string()
}

pub fn cancel_key() -> String {
    "Escape".to_string()
}

pub fn help_key() -> String {
    "F1".to_string()
}

pub fn tab_cycle_key() -> String {
    "Ctrl+Tab".to_string()
}

// ── Markup convention ──────────────────────────────────────────────────────

pub fn callback_class_prefix() -> String {
    "dlg-callback-".to_string()
}

pub fn default_action_class() -> String {
    "dlg-default-action".to_string()
}

pub fn access_key_attribute() -> String {
    "data-access-key".to_string()
}

pub fn access_key_marker_tag() -> String {
    "u".to_string()
}

pub fn tab_selected_class() -> String {
    "dlg-tab-selected".to_string()
}

pub fn tab_content_selected_class() -> String {
    "dlg-tab-content-selected".to_string()
}
