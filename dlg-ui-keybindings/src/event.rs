//! Key press events as delivered by the host toolkit.

use winit::keyboard::{Key, ModifiersState, NamedKey, SmolStr};

/// A single key-down event: the logical key plus the held modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: ModifiersState,
}

impl KeyPress {
    pub fn new(key: Key, modifiers: ModifiersState) -> Self {
        Self { key, modifiers }
    }

    /// A character key, e.g. `KeyPress::character('o', ModifiersState::ALT)`.
    pub fn character(ch: char, modifiers: ModifiersState) -> Self {
        let mut buf = [0u8; 4];
        Self {
            key: Key::Character(SmolStr::new(ch.encode_utf8(&mut buf))),
            modifiers,
        }
    }

    /// A named key, e.g. `KeyPress::named(NamedKey::Enter, ModifiersState::empty())`.
    pub fn named(named: NamedKey, modifiers: ModifiersState) -> Self {
        Self {
            key: Key::Named(named),
            modifiers,
        }
    }
}
