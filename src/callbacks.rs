//! Wiring host-application callbacks to controls by role class.
//!
//! A control with class `dlg-callback-apply` is wired to the host callback
//! named `apply`. A role the host cannot handle is reported and the control
//! stays unwired.

use crate::control::Control;
use crate::dom::NodeId;
use crate::error::ControlsError;
use std::collections::HashMap;
use std::fmt;

/// The host application's named callbacks.
pub trait DialogHost {
    fn has_callback(&self, action: &str) -> bool;

    /// Run the callback `action`, triggered by activating `control`.
    fn invoke(&mut self, action: &str, control: NodeId);
}

type HostCallback = Box<dyn FnMut(NodeId)>;

/// A [`DialogHost`] backed by a map of closures.
#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: HashMap<String, HostCallback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, action: &str, callback: impl FnMut(NodeId) + 'static) {
        self.callbacks.insert(action.to_string(), Box::new(callback));
    }

    pub fn with(mut self, action: &str, callback: impl FnMut(NodeId) + 'static) -> Self {
        self.register(action, callback);
        self
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.callbacks.keys().collect();
        names.sort();
        f.debug_struct("CallbackRegistry")
            .field("callbacks", &names)
            .finish()
    }
}

impl DialogHost for CallbackRegistry {
    fn has_callback(&self, action: &str) -> bool {
        self.callbacks.contains_key(action)
    }

    fn invoke(&mut self, action: &str, control: NodeId) {
        if let Some(callback) = self.callbacks.get_mut(action) {
            callback(control);
        }
    }
}

/// Which control runs which host callback.
#[derive(Debug, Default, Clone)]
pub struct CallbackTable {
    wired: HashMap<NodeId, String>,
}

impl CallbackTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire every control with a role to the host callback of that name.
    pub fn assign<H: DialogHost + ?Sized>(&mut self, controls: &[Control], host: &H) -> Vec<ControlsError> {
        let mut diagnostics = Vec::new();
        for control in controls {
            let Some(role) = &control.role else {
                continue;
            };
            let action = role.name();
            if host.has_callback(action) {
                log::info!("Assign host callback '{}' to control {:?}", action, control.node);
                self.wired.insert(control.node, action.to_string());
            } else {
                let e = ControlsError::MissingCallback {
                    control: control.node,
                    action: action.to_string(),
                };
                log::warn!("{}", e);
                diagnostics.push(e);
            }
        }
        diagnostics
    }

    pub fn action_for(&self, node: NodeId) -> Option<&str> {
        self.wired.get(&node).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.wired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wired.is_empty()
    }

    pub fn clear(&mut self) {
        self.wired.clear();
    }
}
