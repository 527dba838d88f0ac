//! Key sequence parsing for the keypad.
//!
//! A sequence is a run of single-character keys (`0`-`9`, `.`, `=`, `+`,
//! `-`, `*`, `/`, `%`, `c`) mixed with named keys in angle brackets, such
//! as `12<Sign>+3<Enter>`. Whitespace between keys is ignored.

use crate::calculator::{Key, Operator};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Matches one key: a bracketed name or any single non-space character.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"<([A-Za-z]+)>|(\S)"
    ).unwrap();
}

/// Errors produced while mapping key text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown key: {0:?}")]
    UnknownKey(String),
}

/// Map one key name to a [`Key`].
///
/// Single characters follow the keypad; named keys follow the keyboard
/// (`Enter`, `Backspace`, `Delete`, `Escape`) plus the keypad-only
/// buttons (`Sign`, `Percent`, `Clear`). Names are case-insensitive.
pub fn parse_key(name: &str) -> Result<Key, InputError> {
    let mut chars = name.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return parse_char(ch).ok_or_else(|| InputError::UnknownKey(name.to_string()));
    }

    match name.to_ascii_lowercase().as_str() {
        "enter" | "equals" => Ok(Key::Equals),
        "backspace" | "delete" => Ok(Key::Backspace),
        "escape" | "esc" | "clear" => Ok(Key::Clear),
        "sign" | "negate" => Ok(Key::ToggleSign),
        "percent" => Ok(Key::Percent),
        _ => Err(InputError::UnknownKey(name.to_string())),
    }
}

fn parse_char(ch: char) -> Option<Key> {
    if let Some(d) = ch.to_digit(10) {
        return Some(Key::Digit(d as u8));
    }

    match ch {
        '.' => Some(Key::Dot),
        '=' => Some(Key::Equals),
        '%' => Some(Key::Percent),
        'c' | 'C' => Some(Key::Clear),
        _ => Operator::from_symbol(ch).map(Key::Operator),
    }
}

/// Split a key sequence into keys, in order.
///
/// Unknown keys are reported in place so callers can choose to skip them
/// or reject the whole sequence.
pub fn parse_sequence(text: &str) -> Vec<Result<Key, InputError>> {
    KEY_TOKEN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|token| parse_key(token.as_str()))
        .collect()
}
