//! Access keys: marking the key in a control's label and binding it.
//!
//! A control declares its access key with an attribute (`data-access-key="o"`
//! by default). Binding finds the first occurrence of that character in the
//! label's first text node, wraps it in a marker element so it can be styled,
//! and registers `modifier + key` to activate the control.

use crate::control::{Activated, activate};
use crate::dom::{Document, NodeId};
use crate::error::ControlsError;
use dlg_ui_config::MarkupConfig;
use dlg_ui_keybindings::platform::fold_key_char;
use dlg_ui_keybindings::{KeyCombo, KeyPress, KeybindingRegistry, MatchMode, Modifiers};

/// Label text split around the access-key character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSplit<'a> {
    pub prefix: &'a str,
    pub matched: &'a str,
    pub suffix: &'a str,
}

/// Split `text` at the first case-insensitive occurrence of `key`.
pub fn split_label(text: &str, key: char) -> Option<LabelSplit<'_>> {
    let wanted = fold_key_char(key);
    let (start, ch) = text
        .char_indices()
        .find(|&(_, ch)| fold_key_char(ch) == wanted)?;
    let end = start + ch.len_utf8();
    Some(LabelSplit {
        prefix: &text[..start],
        matched: &text[start..end],
        suffix: &text[end..],
    })
}

/// The node holding a control's visible label.
///
/// The first `label` whose `for` attribute names the control's `id`, else the
/// closest enclosing `label`, else the control itself.
pub fn label_node<D: Document + ?Sized>(doc: &D, control: NodeId) -> NodeId {
    if let Some(id) = doc.attribute(control, "id").filter(|id| !id.is_empty()) {
        let by_for = doc
            .elements()
            .into_iter()
            .find(|&el| doc.tag_name(el) == Some("label") && doc.attribute(el, "for") == Some(id));
        if let Some(label) = by_for {
            return label;
        }
    }

    let mut current = Some(control);
    while let Some(node) = current {
        if doc.tag_name(node) == Some("label") {
            return node;
        }
        current = doc.parent(node);
    }
    control
}

/// The attribute value as an access key: exactly one character.
fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// A registered access key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessKeyBinding {
    pub control: NodeId,
    pub key: char,
    /// The element wrapped around the key in the label.
    pub marker: NodeId,
}

/// Marks access keys in labels and activates their controls on key presses.
#[derive(Debug)]
pub struct AccessKeyBinder {
    modifiers: Modifiers,
    attribute: String,
    marker_tag: String,
    registry: KeybindingRegistry<NodeId>,
    bindings: Vec<AccessKeyBinding>,
}

impl AccessKeyBinder {
    pub fn new(modifiers: Modifiers, markup: &MarkupConfig) -> Self {
        Self {
            modifiers,
            attribute: markup.access_key_attribute.clone(),
            marker_tag: markup.access_key_marker_tag.clone(),
            registry: KeybindingRegistry::new(),
            bindings: Vec::new(),
        }
    }

    /// Mark `key` in `label` and bind it to `control`.
    ///
    /// Only the label's first text node is searched. When the key is not
    /// found the document is left untouched and nothing is registered.
    /// Binding the same control and key again returns the existing binding.
    pub fn bind<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        control: NodeId,
        label: NodeId,
        key: char,
    ) -> Result<AccessKeyBinding, ControlsError> {
        let combo = KeyCombo::character(self.modifiers, key);
        if let Some(existing) = self
            .bindings
            .iter()
            .find(|b| b.control == control && fold_key_char(b.key) == fold_key_char(key))
        {
            log::debug!("Access key {} already bound to {:?}", combo, control);
            return Ok(*existing);
        }

        let text_node = doc
            .child_nodes(label)
            .into_iter()
            .find(|&child| doc.text(child).is_some());
        let Some(text_node) = text_node else {
            return Err(ControlsError::AccessKeyNotFound {
                control,
                key,
                label: String::new(),
            });
        };

        let text = doc.text(text_node).unwrap_or_default().to_owned();
        let Some(split) = split_label(&text, key) else {
            return Err(ControlsError::AccessKeyNotFound {
                control,
                key,
                label: text,
            });
        };

        doc.set_text(text_node, split.prefix);
        let marker = doc.create_element(&self.marker_tag);
        let marked = doc.create_text(split.matched);
        doc.append_child(marker, marked);
        doc.insert_after(text_node, marker);
        let suffix = doc.create_text(split.suffix);
        doc.insert_after(marker, suffix);

        self.registry
            .register_with_mode(combo.clone(), MatchMode::Held, control);
        let binding = AccessKeyBinding {
            control,
            key,
            marker,
        };
        self.bindings.push(binding);
        log::info!("Registered access key {} for control {:?}", combo, control);
        Ok(binding)
    }

    /// Bind every element carrying the access-key attribute, in document
    /// order. Failures are logged and returned; they never stop the scan.
    pub fn bind_all<D: Document + ?Sized>(&mut self, doc: &mut D) -> Vec<ControlsError> {
        let mut diagnostics = Vec::new();
        let controls: Vec<(NodeId, Option<char>)> = doc
            .elements()
            .into_iter()
            .filter_map(|el| {
                doc.attribute(el, &self.attribute)
                    .map(|value| (el, single_char(value)))
            })
            .collect();

        for (control, key) in controls {
            let result = match key {
                Some(key) => {
                    let label = label_node(doc, control);
                    self.bind(doc, control, label, key).map(|_| ())
                }
                None => Err(ControlsError::InvalidAccessKey { control }),
            };
            if let Err(e) = result {
                log::warn!("{}", e);
                diagnostics.push(e);
            }
        }
        diagnostics
    }

    /// Activate every control bound to the pressed key, in registration
    /// order. The access-key modifiers must be held; Shift and other extra
    /// modifiers are ignored. An empty result means the key is not an
    /// access key.
    pub fn dispatch<D: Document + ?Sized>(&self, doc: &mut D, press: &KeyPress) -> Vec<Activated> {
        let controls: Vec<NodeId> = self.registry.lookup(press).copied().collect();
        controls
            .into_iter()
            .map(|control| {
                log::debug!("Access key activates {:?}", control);
                activate(doc, control)
            })
            .collect()
    }

    /// The control most recently bound to `key`.
    pub fn control_for(&self, key: char) -> Option<NodeId> {
        let wanted = fold_key_char(key);
        self.bindings
            .iter()
            .rev()
            .find(|b| fold_key_char(b.key) == wanted)
            .map(|b| b.control)
    }

    pub fn bindings(&self) -> &[AccessKeyBinding] {
        &self.bindings
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Unregister every access key. Label markers stay in place.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.bindings.clear();
    }
}
