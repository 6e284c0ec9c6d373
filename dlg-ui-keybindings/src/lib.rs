//! Keybinding system for dlg-ui dialogs.
//!
//! This crate provides the key vocabulary shared by the dialog helpers:
//!
//! Features:
//! - Configurable key combinations (Enter, Ctrl+Tab, Alt+O, CmdOrCtrl+W, etc.)
//! - Case-insensitive character matching, including non-ASCII access keys
//! - An ordered registry that fires every binding for a key in registration order

mod event;
mod matcher;
pub mod parser;
pub mod platform;

pub use event::KeyPress;
pub use matcher::KeybindingMatcher;
pub use parser::{KeyCombo, Modifiers, ParseError, ParsedKey, parse_key_combo, parse_modifiers};

// Re-exported so callers can build key presses without depending on winit directly.
pub use winit::keyboard::{Key, ModifiersState, NamedKey};

/// How a registered combination compares modifiers with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// The held modifiers must equal the combination's.
    Exact,
    /// The combination's modifiers must be held; extra ones are ignored.
    Held,
}

/// Registry of keybindings mapping key combinations to actions.
///
/// Bindings are kept in registration order. Several bindings may share the
/// same combination; a lookup yields all of them, oldest first.
#[derive(Debug)]
pub struct KeybindingRegistry<A> {
    bindings: Vec<(KeyCombo, MatchMode, A)>,
}

impl<A> Default for KeybindingRegistry<A> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }
}

impl<A> KeybindingRegistry<A> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding that requires exactly the combination's modifiers.
    pub fn register(&mut self, combo: KeyCombo, action: A) {
        self.register_with_mode(combo, MatchMode::Exact, action);
    }

    /// Append a binding with an explicit modifier comparison.
    pub fn register_with_mode(&mut self, combo: KeyCombo, mode: MatchMode, action: A) {
        log::debug!("Registered keybinding: {} ({:?})", combo, mode);
        self.bindings.push((combo, mode, action));
    }

    /// All actions bound to the combination the key press represents, in
    /// registration order.
    pub fn lookup<'a>(&'a self, press: &KeyPress) -> impl Iterator<Item = &'a A> + use<'a, A> {
        let matcher = KeybindingMatcher::from_key_press(press);
        self.bindings
            .iter()
            .filter(move |(combo, mode, _)| match mode {
                MatchMode::Exact => matcher.matches(combo),
                MatchMode::Held => matcher.matches_held(combo),
            })
            .map(|(_, _, action)| action)
    }

    /// Drop every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Check if the registry has any bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
