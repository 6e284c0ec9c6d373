//! Key event matching.
//!
//! Matches key presses against parsed KeyCombos. Character keys compare
//! case-insensitively; modifiers must match exactly.

use crate::event::KeyPress;
use crate::parser::{KeyCombo, Modifiers, ParsedKey};
use crate::platform::{fold_key_char, resolve_cmd_or_ctrl};
use winit::keyboard::{Key, ModifiersState, NamedKey};

/// Matcher for comparing a key press against keybindings.
#[derive(Debug)]
pub struct KeybindingMatcher {
    /// Active modifiers from the event
    modifiers: Modifiers,
    /// The logical key from the event
    key: Option<MatchKey>,
}

/// Normalized key for matching purposes.
#[derive(Debug)]
enum MatchKey {
    Character(char),
    Named(NamedKey),
}

impl KeybindingMatcher {
    /// Create a matcher from a key press.
    pub fn from_key_press(press: &KeyPress) -> Self {
        Self::from_parts(&press.key, press.modifiers)
    }

    /// Create a matcher from a logical key and modifier state.
    pub fn from_parts(key: &Key, modifiers: ModifiersState) -> Self {
        let mods = Modifiers {
            ctrl: modifiers.control_key(),
            alt: modifiers.alt_key(),
            shift: modifiers.shift_key(),
            super_key: modifiers.super_key(),
            cmd_or_ctrl: false, // Resolved during matching
        };

        let key = match key {
            // Only the first character counts; the rest of a composed string is ignored
            Key::Character(c) => c.chars().next().map(|ch| MatchKey::Character(fold_key_char(ch))),
            Key::Named(named) => Some(MatchKey::Named(*named)),
            _ => None,
        };

        Self {
            modifiers: mods,
            key,
        }
    }

    /// Check if this event matches the given key combo.
    pub fn matches(&self, combo: &KeyCombo) -> bool {
        self.key_matches(combo) && self.modifiers_match(&combo.modifiers)
    }

    /// Like [`matches`](Self::matches), but only requires the combo's
    /// modifiers to be held; any additional modifiers are accepted.
    ///
    /// `Alt+O` matches Alt+Shift+O, and a bare `Enter` matches Ctrl+Enter.
    pub fn matches_held(&self, combo: &KeyCombo) -> bool {
        self.key_matches(combo) && self.modifiers_held(&combo.modifiers)
    }

    fn key_matches(&self, combo: &KeyCombo) -> bool {
        match (&combo.key, &self.key) {
            (ParsedKey::Character(combo_char), Some(MatchKey::Character(event_char))) => {
                fold_key_char(*combo_char) == *event_char
            }
            (ParsedKey::Named(combo_named), Some(MatchKey::Named(event_named))) => {
                combo_named == event_named
            }
            _ => false,
        }
    }

    /// Check that every modifier the combo names is held.
    fn modifiers_held(&self, combo_mods: &Modifiers) -> bool {
        let (expected_ctrl, expected_super) =
            resolve_cmd_or_ctrl(combo_mods.cmd_or_ctrl, combo_mods.ctrl, combo_mods.super_key);

        (!expected_ctrl || self.modifiers.ctrl)
            && (!combo_mods.alt || self.modifiers.alt)
            && (!combo_mods.shift || self.modifiers.shift)
            && (!expected_super || self.modifiers.super_key)
    }

    /// Check if modifiers match, handling CmdOrCtrl specially.
    fn modifiers_match(&self, combo_mods: &Modifiers) -> bool {
        let (expected_ctrl, expected_super) =
            resolve_cmd_or_ctrl(combo_mods.cmd_or_ctrl, combo_mods.ctrl, combo_mods.super_key);

        self.modifiers.ctrl == expected_ctrl
            && self.modifiers.alt == combo_mods.alt
            && self.modifiers.shift == combo_mods.shift
            && self.modifiers.super_key == expected_super
    }
}
