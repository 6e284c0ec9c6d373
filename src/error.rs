//! Typed error types for dlg-ui.
//!
//! None of these abort dialog setup. `Dialog::init` logs them at warning
//! level and keeps them in `Dialog::diagnostics` so hosts can surface them.

use crate::dom::NodeId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlsError {
    /// The access-key character does not occur in the label text.
    ///
    /// The label is left untouched and no key binding is registered; the
    /// control can still be activated directly.
    #[error("No access key '{key}' found in label '{label}'")]
    AccessKeyNotFound {
        control: NodeId,
        key: char,
        /// Text of the label's first text node (empty when it has none).
        label: String,
    },

    /// The access-key attribute is empty or longer than one character.
    #[error("Access key attribute on control {control:?} must be a single character")]
    InvalidAccessKey { control: NodeId },

    /// Markup references a role the host has no callback for.
    #[error("Missing host callback '{action}'")]
    MissingCallback { control: NodeId, action: String },

    /// The tab container has no tab headers.
    #[error("Tab container {container:?} has no tabs")]
    EmptyTabContainer { container: NodeId },

    /// A tab index outside `[0, count)`.
    #[error("Tab index {index} out of range for {count} tabs")]
    InvalidTabIndex { index: usize, count: usize },
}
