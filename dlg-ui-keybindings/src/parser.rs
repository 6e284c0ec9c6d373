//! Key combination parser.
//!
//! Parses human-readable key strings like "Ctrl+Shift+Tab" or "Alt+O" into
//! KeyCombo structs.

use crate::platform::{fold_key_char, parse_named_key};
use std::fmt;
use winit::keyboard::NamedKey;

/// Error type for key parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseError {}

/// Set of active modifiers for a key combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
    /// If true, this represents CmdOrCtrl (Cmd on macOS, Ctrl elsewhere)
    pub cmd_or_ctrl: bool,
}

/// A parsed key combination (modifiers + key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    pub key: ParsedKey,
}

impl KeyCombo {
    /// Combination of `modifiers` and a single character key.
    ///
    /// The character is folded so that lookups are case-insensitive.
    pub fn character(modifiers: Modifiers, ch: char) -> Self {
        Self {
            modifiers,
            key: ParsedKey::Character(fold_key_char(ch)),
        }
    }

    /// Combination of `modifiers` and a named key.
    pub fn named(modifiers: Modifiers, named: NamedKey) -> Self {
        Self {
            modifiers,
            key: ParsedKey::Named(named),
        }
    }

    /// The same combination with Shift additionally held.
    ///
    /// Used to derive the reverse direction of a cycling shortcut
    /// (Ctrl+Tab → Ctrl+Shift+Tab).
    pub fn with_shift(&self) -> Self {
        Self {
            modifiers: Modifiers {
                shift: true,
                ..self.modifiers
            },
            key: self.key.clone(),
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.cmd_or_ctrl {
            parts.push("CmdOrCtrl".to_string());
        }
        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }
        if self.modifiers.super_key {
            parts.push("Super".to_string());
        }

        match &self.key {
            ParsedKey::Character(c) => parts.push(c.to_string()),
            ParsedKey::Named(n) => parts.push(format!("{:?}", n)),
        }

        write!(f, "{}", parts.join("+"))
    }
}

/// The actual key (either a character or a named key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParsedKey {
    /// A single character key (e.g., 'a', 'B', '1'), stored case-folded
    Character(char),
    /// A named key (e.g., F1, Enter, Escape)
    Named(NamedKey),
}

/// Parse a key combination string into a KeyCombo.
///
/// Supported format: "Modifier+Modifier+Key"
///
/// Modifiers:
/// - `Ctrl`, `Control` - Control key
/// - `Alt`, `Option` - Alt/Option key
/// - `Shift` - Shift key
/// - `Super`, `Cmd`, `Command`, `Meta`, `Win` - Super/Cmd key
/// - `CmdOrCtrl` - Cmd on macOS, Ctrl on other platforms
///
/// Keys:
/// - Single characters: `A`, `B`, `1`, etc.
/// - Named keys: `F1`-`F12`, `Enter`, `Escape`, `Space`, `Tab`, etc.
pub fn parse_key_combo(s: &str) -> Result<KeyCombo, ParseError> {
    if s.trim().is_empty() {
        return Err(ParseError("Empty key combination".to_string()));
    }

    let parts: Vec<&str> = s.split('+').map(str::trim).collect();

    let mut modifiers = Modifiers::default();
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;

        let is_modifier = parse_modifier(part, &mut modifiers);

        if !is_modifier {
            if key_part.is_some() {
                return Err(ParseError(format!(
                    "Multiple keys specified: already have key, found '{}'",
                    part
                )));
            }
            key_part = Some(*part);
        } else if is_last {
            // Last part is a modifier with no key - invalid
            return Err(ParseError(
                "Key combination ends with modifier, no key specified".to_string(),
            ));
        }
    }

    let key_str = key_part.ok_or_else(|| ParseError("No key specified".to_string()))?;
    let key = parse_key(key_str)?;

    Ok(KeyCombo { modifiers, key })
}

/// Parse a modifier-only string such as `"Alt"` or `"Ctrl+Alt"`.
///
/// Used for the access-key modifier, which is combined with each control's
/// own character at bind time.
pub fn parse_modifiers(s: &str) -> Result<Modifiers, ParseError> {
    let mut modifiers = Modifiers::default();
    if s.trim().is_empty() {
        return Err(ParseError("Empty modifier list".to_string()));
    }
    for part in s.split('+').map(str::trim) {
        if !parse_modifier(part, &mut modifiers) {
            return Err(ParseError(format!("Unknown modifier: '{}'", part)));
        }
    }
    Ok(modifiers)
}

/// Set the modifier named by `part`, returning whether it was one.
fn parse_modifier(part: &str, modifiers: &mut Modifiers) -> bool {
    match part.to_lowercase().as_str() {
        "ctrl" | "control" => modifiers.ctrl = true,
        "alt" | "option" => modifiers.alt = true,
        "shift" => modifiers.shift = true,
        "super" | "cmd" | "command" | "meta" | "win" => modifiers.super_key = true,
        "cmdorctrl" => modifiers.cmd_or_ctrl = true,
        _ => return false,
    }
    true
}

/// Parse a key string into a ParsedKey.
fn parse_key(s: &str) -> Result<ParsedKey, ParseError> {
    // Try named keys first (case-insensitive)
    if let Some(named) = parse_named_key(s) {
        return Ok(ParsedKey::Named(named));
    }

    // Single character
    let mut chars = s.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Ok(ParsedKey::Character(fold_key_char(ch)));
    }

    Err(ParseError(format!("Unknown key: '{}'", s)))
}
