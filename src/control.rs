//! Controls, their roles and what activating them means.

use crate::dom::{Document, NodeId};
use dlg_ui_config::MarkupConfig;
use std::fmt;

/// What kind of widget an element is, resolved from its tag and `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// `button`, and `input` of type button, submit, reset or image
    Button,
    /// `a`
    Link,
    /// Any other `input`, and `select`
    TextField,
    TextArea,
    Checkbox,
    Radio,
    Other,
}

/// The effect of activating a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    /// Simulated primary click; runs any wired callback.
    Click,
    /// Input focus moves to the control; no callback runs.
    Focus,
}

impl ControlKind {
    pub fn of<D: Document + ?Sized>(doc: &D, node: NodeId) -> Self {
        let Some(tag) = doc.tag_name(node) else {
            return ControlKind::Other;
        };
        match tag {
            "button" => ControlKind::Button,
            "a" => ControlKind::Link,
            "textarea" => ControlKind::TextArea,
            "select" => ControlKind::TextField,
            "input" => {
                let input_type = doc
                    .attribute(node, "type")
                    .map(str::to_ascii_lowercase)
                    .unwrap_or_default();
                match input_type.as_str() {
                    "checkbox" => ControlKind::Checkbox,
                    "radio" => ControlKind::Radio,
                    "button" | "submit" | "reset" | "image" => ControlKind::Button,
                    _ => ControlKind::TextField,
                }
            }
            _ => ControlKind::Other,
        }
    }

    /// Activation is chosen by kind alone; exactly one effect per call.
    pub fn activation(self) -> Activation {
        match self {
            ControlKind::TextField | ControlKind::TextArea => Activation::Focus,
            _ => Activation::Click,
        }
    }

    /// Whether the control gives the confirm key a meaning of its own
    /// (pressing a button, following a link, a newline, toggling).
    pub fn owns_confirm_key(self) -> bool {
        matches!(
            self,
            ControlKind::Button
                | ControlKind::Link
                | ControlKind::TextArea
                | ControlKind::Checkbox
                | ControlKind::Radio
        )
    }
}

/// Semantic action named by a control's role class, e.g. `dlg-callback-ok`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Yes,
    No,
    Ok,
    Cancel,
    Close,
    Help,
    /// Any other callback name; only used for callback wiring.
    Custom(String),
}

impl Role {
    pub fn from_name(name: &str) -> Self {
        match name {
            "yes" => Role::Yes,
            "no" => Role::No,
            "ok" => Role::Ok,
            "cancel" => Role::Cancel,
            "close" => Role::Close,
            "help" => Role::Help,
            other => Role::Custom(other.to_string()),
        }
    }

    /// The callback name, i.e. the part after the class prefix.
    pub fn name(&self) -> &str {
        match self {
            Role::Yes => "yes",
            Role::No => "no",
            Role::Ok => "ok",
            Role::Cancel => "cancel",
            Role::Close => "close",
            Role::Help => "help",
            Role::Custom(name) => name,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A control with its markers resolved once at setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub node: NodeId,
    pub kind: ControlKind,
    pub role: Option<Role>,
    pub default_action: bool,
}

impl Control {
    pub fn resolve<D: Document + ?Sized>(doc: &D, node: NodeId, markup: &MarkupConfig) -> Self {
        let tokens = doc.class_tokens(node);
        let role = tokens.iter().find_map(|token| {
            token
                .strip_prefix(markup.callback_class_prefix.as_str())
                .filter(|name| !name.is_empty())
                .map(Role::from_name)
        });
        let default_action = tokens.contains(&markup.default_action_class.as_str());
        Self {
            node,
            kind: ControlKind::of(doc, node),
            role,
            default_action,
        }
    }

    /// Every element carrying a role class or the default-action class, in
    /// document order.
    pub fn discover<D: Document + ?Sized>(doc: &D, markup: &MarkupConfig) -> Vec<Control> {
        doc.elements()
            .into_iter()
            .map(|node| Control::resolve(doc, node, markup))
            .filter(|control| control.role.is_some() || control.default_action)
            .collect()
    }
}

/// A control that was activated, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activated {
    pub control: NodeId,
    pub activation: Activation,
}

/// Activate a control according to its kind.
pub fn activate<D: Document + ?Sized>(doc: &mut D, node: NodeId) -> Activated {
    let activation = ControlKind::of(doc, node).activation();
    match activation {
        Activation::Click => doc.click(node),
        Activation::Focus => doc.focus(node),
    }
    Activated {
        control: node,
        activation,
    }
}
