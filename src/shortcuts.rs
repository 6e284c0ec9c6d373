//! Reserved dialog keys: confirm, cancel, help and tab cycling.
//!
//! Each reserved key has a fixed, ordered list of candidate markers. On a
//! key press the first marker some control carries wins, and that control
//! is activated.

use crate::control::{Activated, Control, ControlKind, Role, activate};
use crate::dom::{Document, NodeId};
use dlg_ui_config::ShortcutConfig;
use dlg_ui_keybindings::{
    KeyCombo, KeyPress, KeybindingRegistry, MatchMode, Modifiers, NamedKey, parse_key_combo,
};

/// A reserved dialog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutKey {
    Confirm,
    Cancel,
    Help,
    NextTab,
    PreviousTab,
}

/// A marker a candidate control must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    DefaultAction,
    Role(Role),
}

impl Marker {
    fn matches(&self, control: &Control) -> bool {
        match self {
            Marker::DefaultAction => control.default_action,
            Marker::Role(role) => control.role.as_ref() == Some(role),
        }
    }
}

/// Ordered candidate markers for one reserved key; earlier wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutRule {
    pub key: ShortcutKey,
    pub candidates: Vec<Marker>,
}

impl ShortcutRule {
    pub fn for_key(key: ShortcutKey) -> Self {
        let candidates = match key {
            ShortcutKey::Confirm => vec![
                Marker::DefaultAction,
                Marker::Role(Role::Yes),
                Marker::Role(Role::Ok),
                Marker::Role(Role::Close),
            ],
            ShortcutKey::Cancel => vec![
                Marker::Role(Role::Cancel),
                Marker::Role(Role::No),
                Marker::Role(Role::Ok),
                Marker::Role(Role::Close),
            ],
            ShortcutKey::Help => vec![Marker::Role(Role::Help)],
            ShortcutKey::NextTab | ShortcutKey::PreviousTab => Vec::new(),
        };
        Self { key, candidates }
    }

    /// The first control, in priority then document order, that matches.
    pub fn resolve<'a>(&self, controls: &'a [Control]) -> Option<&'a Control> {
        self.candidates
            .iter()
            .find_map(|marker| controls.iter().find(|c| marker.matches(c)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabDirection {
    Forward,
    Backward,
}

impl TabDirection {
    pub fn delta(self) -> isize {
        match self {
            TabDirection::Forward => 1,
            TabDirection::Backward => -1,
        }
    }
}

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutOutcome {
    /// A control was activated; default handling must be suppressed.
    Activated(Activated),
    /// The tab-cycling key was pressed; the tab interface should move.
    CycleTab(TabDirection),
    /// Not a reserved key, or nothing to activate.
    Ignored,
}

/// Dispatches reserved keys to marked controls.
#[derive(Debug)]
pub struct ShortcutDispatcher {
    controls: Vec<Control>,
    registry: KeybindingRegistry<ShortcutKey>,
}

impl ShortcutDispatcher {
    /// A dispatcher over `controls` with no keys registered yet.
    pub fn new(controls: Vec<Control>) -> Self {
        Self {
            controls,
            registry: KeybindingRegistry::new(),
        }
    }

    /// Register the confirm, cancel and help keys.
    ///
    /// A key configured without modifiers fires whatever modifiers are held
    /// (Ctrl+Enter still confirms); one configured with modifiers must be
    /// pressed exactly.
    pub fn enable_dialog_keys(&mut self, shortcuts: &ShortcutConfig) {
        let none = Modifiers::default();
        let keys = [
            (ShortcutKey::Confirm, &shortcuts.confirm, KeyCombo::named(none, NamedKey::Enter)),
            (ShortcutKey::Cancel, &shortcuts.cancel, KeyCombo::named(none, NamedKey::Escape)),
            (ShortcutKey::Help, &shortcuts.help, KeyCombo::named(none, NamedKey::F1)),
        ];
        for (key, configured, fallback) in keys {
            let combo = combo_or_default(configured, fallback);
            let mode = if combo.modifiers == Modifiers::default() {
                MatchMode::Held
            } else {
                MatchMode::Exact
            };
            log::info!("Registered shortcut {:?} -> {}", key, combo);
            self.registry.register_with_mode(combo, mode, key);
        }
    }

    /// Register the tab-cycling key and its Shift-reversed twin.
    pub fn enable_tab_cycle(&mut self, shortcuts: &ShortcutConfig) {
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::default()
        };
        let forward = combo_or_default(&shortcuts.tab_cycle, KeyCombo::named(ctrl, NamedKey::Tab));
        let backward = forward.with_shift();
        if forward == backward {
            log::warn!(
                "Tab cycle key '{}' already includes Shift; backward cycling is unavailable",
                forward
            );
        } else {
            self.registry.register(backward, ShortcutKey::PreviousTab);
        }
        log::info!("Registered tab cycling on {}", forward);
        self.registry.register(forward, ShortcutKey::NextTab);
    }

    /// The control a reserved key would activate right now.
    pub fn candidate_for(&self, key: ShortcutKey) -> Option<NodeId> {
        ShortcutRule::for_key(key)
            .resolve(&self.controls)
            .map(|control| control.node)
    }

    /// Handle a key press.
    pub fn dispatch<D: Document + ?Sized>(&self, doc: &mut D, press: &KeyPress) -> ShortcutOutcome {
        let keys: Vec<ShortcutKey> = self.registry.lookup(press).copied().collect();
        for key in keys {
            let outcome = match key {
                ShortcutKey::NextTab => ShortcutOutcome::CycleTab(TabDirection::Forward),
                ShortcutKey::PreviousTab => ShortcutOutcome::CycleTab(TabDirection::Backward),
                ShortcutKey::Confirm if confirm_owned_by_focus(doc) => ShortcutOutcome::Ignored,
                _ => match self.candidate_for(key) {
                    Some(control) => {
                        log::debug!("Shortcut {:?} activates {:?}", key, control);
                        ShortcutOutcome::Activated(activate(doc, control))
                    }
                    None => ShortcutOutcome::Ignored,
                },
            };
            if outcome != ShortcutOutcome::Ignored {
                return outcome;
            }
        }
        ShortcutOutcome::Ignored
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Unregister every key.
    pub fn clear(&mut self) {
        self.registry.clear();
    }
}

/// Buttons, links, text areas, checkboxes and radios keep the confirm key.
fn confirm_owned_by_focus<D: Document + ?Sized>(doc: &D) -> bool {
    doc.active_element()
        .map(|focused| ControlKind::of(doc, focused).owns_confirm_key())
        .unwrap_or(false)
}

fn combo_or_default(configured: &str, fallback: KeyCombo) -> KeyCombo {
    match parse_key_combo(configured) {
        Ok(combo) => combo,
        Err(e) => {
            log::warn!(
                "Invalid shortcut key '{}': {}; using {}",
                configured,
                e,
                fallback
            );
            fallback
        }
    }
}
