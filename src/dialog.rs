//! `Dialog`: one initialized dialog document and its event entry points.

use crate::access_key::AccessKeyBinder;
use crate::callbacks::{CallbackTable, DialogHost};
use crate::control::{Activated, Activation, Control, activate};
use crate::dom::{Document, NodeId};
use crate::error::ControlsError;
use crate::shortcuts::{ShortcutDispatcher, ShortcutOutcome};
use crate::tabs::{TabInterface, TabOptions};
use dlg_ui_config::DialogConfig;
use dlg_ui_keybindings::{KeyPress, Modifiers, parse_modifiers};

/// Whether a key press was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The dialog acted on the key; the toolkit's default handling must be
    /// suppressed.
    Handled,
    /// Let the toolkit handle the key as usual.
    Ignored,
}

impl KeyOutcome {
    pub fn is_handled(self) -> bool {
        self == KeyOutcome::Handled
    }
}

/// A dialog document with access keys, callbacks, shortcuts and tabs wired.
///
/// The host forwards key-down events to [`Dialog::handle_key`] and pointer
/// clicks to [`Dialog::handle_click`].
pub struct Dialog<D: Document, H: DialogHost> {
    document: D,
    host: H,
    config: DialogConfig,
    controls: Vec<Control>,
    access_keys: Option<AccessKeyBinder>,
    shortcuts: ShortcutDispatcher,
    callbacks: CallbackTable,
    tabs: Option<TabInterface>,
    diagnostics: Vec<ControlsError>,
    disposed: bool,
}

impl<D: Document, H: DialogHost> Dialog<D, H> {
    /// Initialize every enabled helper for `document`.
    ///
    /// Never fails: problems with individual controls are logged, kept in
    /// [`Dialog::diagnostics`], and the affected feature is left out.
    pub fn init(mut document: D, host: H, config: DialogConfig) -> Self {
        let markup = &config.markup;
        let controls = Control::discover(&document, markup);
        let mut diagnostics = Vec::new();

        let access_keys = if config.controls.access_keys {
            let modifiers = access_key_modifiers(&config.controls.access_key_modifier);
            let mut binder = AccessKeyBinder::new(modifiers, markup);
            diagnostics.extend(binder.bind_all(&mut document));
            Some(binder)
        } else {
            None
        };

        let mut callbacks = CallbackTable::new();
        if config.controls.assign_callbacks {
            diagnostics.extend(callbacks.assign(&controls, &host));
        }

        let mut shortcuts = ShortcutDispatcher::new(controls.clone());
        if config.controls.assign_shortcuts {
            shortcuts.enable_dialog_keys(&config.shortcuts);
        }

        if let Some(default_action) = document.first_with_class(&markup.default_action_class) {
            document.focus(default_action);
        }

        log::info!(
            "Dialog initialized: {} marked controls, {} diagnostics",
            controls.len(),
            diagnostics.len()
        );

        Self {
            document,
            host,
            config,
            controls,
            access_keys,
            shortcuts,
            callbacks,
            tabs: None,
            diagnostics,
            disposed: false,
        }
    }

    /// Attach a tab interface, replacing any previous one.
    ///
    /// On error the dialog keeps working without tabs.
    pub fn attach_tabs(&mut self, options: TabOptions) -> Result<(), ControlsError> {
        let shortcuts = options.init_shortcuts;
        match TabInterface::new(&mut self.document, options, &self.config.markup) {
            Ok(tabs) => {
                if shortcuts && !self.disposed {
                    self.shortcuts.enable_tab_cycle(&self.config.shortcuts);
                }
                self.tabs = Some(tabs);
                Ok(())
            }
            Err(e) => {
                log::warn!("Tab interface not initialized: {}", e);
                Err(e)
            }
        }
    }

    /// Handle a key-down event.
    ///
    /// Access keys are consulted first, then the reserved shortcuts. Every
    /// matching binding fires.
    pub fn handle_key(&mut self, press: &KeyPress) -> KeyOutcome {
        if self.disposed {
            return KeyOutcome::Ignored;
        }
        let mut handled = false;

        let activated = match &self.access_keys {
            Some(binder) => binder.dispatch(&mut self.document, press),
            None => Vec::new(),
        };
        handled |= !activated.is_empty();
        for a in activated {
            self.after_activation(a);
        }

        match self.shortcuts.dispatch(&mut self.document, press) {
            ShortcutOutcome::Activated(a) => {
                handled = true;
                self.after_activation(a);
            }
            ShortcutOutcome::CycleTab(direction) => {
                if let Some(tabs) = self.tabs.as_mut().filter(|t| t.shortcuts_enabled()) {
                    tabs.cycle(&mut self.document, direction);
                    handled = true;
                }
            }
            ShortcutOutcome::Ignored => {}
        }

        if handled {
            KeyOutcome::Handled
        } else {
            KeyOutcome::Ignored
        }
    }

    /// Handle a pointer click on `node`: switch tabs and run the wired host
    /// callback, if any.
    pub fn handle_click(&mut self, node: NodeId) {
        if let Some(tabs) = self.tabs.as_mut()
            && let Some(index) = tabs.index_of(node)
            && let Err(e) = tabs.switch_to(&mut self.document, index)
        {
            log::warn!("{}", e);
        }
        if let Some(action) = self.callbacks.action_for(node) {
            log::debug!("Invoking host callback '{}' for {:?}", action, node);
            self.host.invoke(action, node);
        }
    }

    /// Activate a control directly, as its access key would.
    pub fn activate(&mut self, node: NodeId) -> Activated {
        let activated = activate(&mut self.document, node);
        self.after_activation(activated);
        activated
    }

    fn after_activation(&mut self, activated: Activated) {
        if activated.activation == Activation::Click {
            self.handle_click(activated.control);
        }
    }

    /// Unregister every key binding. Afterwards no key is handled; clicks
    /// still reach wired callbacks.
    pub fn dispose(&mut self) {
        if let Some(binder) = self.access_keys.as_mut() {
            binder.clear();
        }
        self.shortcuts.clear();
        self.disposed = true;
        log::info!("Dialog key bindings disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Controls carrying a role or the default-action marker.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn access_keys(&self) -> Option<&AccessKeyBinder> {
        self.access_keys.as_ref()
    }

    pub fn shortcuts(&self) -> &ShortcutDispatcher {
        &self.shortcuts
    }

    pub fn callbacks(&self) -> &CallbackTable {
        &self.callbacks
    }

    pub fn tabs(&self) -> Option<&TabInterface> {
        self.tabs.as_ref()
    }

    pub fn tabs_mut(&mut self) -> Option<&mut TabInterface> {
        self.tabs.as_mut()
    }

    /// Non-fatal problems found during initialization.
    pub fn diagnostics(&self) -> &[ControlsError] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (D, H) {
        (self.document, self.host)
    }
}

fn access_key_modifiers(configured: &str) -> Modifiers {
    parse_modifiers(configured).unwrap_or_else(|e| {
        log::warn!(
            "Invalid access key modifier '{}': {}; using Alt",
            configured,
            e
        );
        Modifiers {
            alt: true,
            ..Modifiers::default()
        }
    })
}
