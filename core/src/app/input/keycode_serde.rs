//! KeyCode names and HID usage codes
//!
//! Bindings are written in config files by name ("W", "ArrowUp") and read
//! from the analog driver by USB HID usage code. One table covers both.

use serde::Deserialize;
use winit::keyboard::KeyCode;

use crate::driver::ScanCode;

/// (key, config name, HID keyboard usage ID)
const KEY_TABLE: &[(KeyCode, &str, ScanCode)] = &[
    // Letters (HID 0x04-0x1D)
    (KeyCode::KeyA, "A", 4),
    (KeyCode::KeyB, "B", 5),
    (KeyCode::KeyC, "C", 6),
    (KeyCode::KeyD, "D", 7),
    (KeyCode::KeyE, "E", 8),
    (KeyCode::KeyF, "F", 9),
    (KeyCode::KeyG, "G", 10),
    (KeyCode::KeyH, "H", 11),
    (KeyCode::KeyI, "I", 12),
    (KeyCode::KeyJ, "J", 13),
    (KeyCode::KeyK, "K", 14),
    (KeyCode::KeyL, "L", 15),
    (KeyCode::KeyM, "M", 16),
    (KeyCode::KeyN, "N", 17),
    (KeyCode::KeyO, "O", 18),
    (KeyCode::KeyP, "P", 19),
    (KeyCode::KeyQ, "Q", 20),
    (KeyCode::KeyR, "R", 21),
    (KeyCode::KeyS, "S", 22),
    (KeyCode::KeyT, "T", 23),
    (KeyCode::KeyU, "U", 24),
    (KeyCode::KeyV, "V", 25),
    (KeyCode::KeyW, "W", 26),
    (KeyCode::KeyX, "X", 27),
    (KeyCode::KeyY, "Y", 28),
    (KeyCode::KeyZ, "Z", 29),
    // Digits (HID 0x1E-0x27, zero last)
    (KeyCode::Digit1, "1", 30),
    (KeyCode::Digit2, "2", 31),
    (KeyCode::Digit3, "3", 32),
    (KeyCode::Digit4, "4", 33),
    (KeyCode::Digit5, "5", 34),
    (KeyCode::Digit6, "6", 35),
    (KeyCode::Digit7, "7", 36),
    (KeyCode::Digit8, "8", 37),
    (KeyCode::Digit9, "9", 38),
    (KeyCode::Digit0, "0", 39),
    // Editing and whitespace
    (KeyCode::Enter, "Enter", 40),
    (KeyCode::Escape, "Escape", 41),
    (KeyCode::Backspace, "Backspace", 42),
    (KeyCode::Tab, "Tab", 43),
    (KeyCode::Space, "Space", 44),
    // Punctuation
    (KeyCode::Minus, "Minus", 45),
    (KeyCode::Equal, "Equal", 46),
    (KeyCode::BracketLeft, "BracketLeft", 47),
    (KeyCode::BracketRight, "BracketRight", 48),
    (KeyCode::Backslash, "Backslash", 49),
    (KeyCode::Semicolon, "Semicolon", 51),
    (KeyCode::Quote, "Quote", 52),
    (KeyCode::Backquote, "Backquote", 53),
    (KeyCode::Comma, "Comma", 54),
    (KeyCode::Period, "Period", 55),
    (KeyCode::Slash, "Slash", 56),
    (KeyCode::CapsLock, "CapsLock", 57),
    // Function keys
    (KeyCode::F1, "F1", 58),
    (KeyCode::F2, "F2", 59),
    (KeyCode::F3, "F3", 60),
    (KeyCode::F4, "F4", 61),
    (KeyCode::F5, "F5", 62),
    (KeyCode::F6, "F6", 63),
    (KeyCode::F7, "F7", 64),
    (KeyCode::F8, "F8", 65),
    (KeyCode::F9, "F9", 66),
    (KeyCode::F10, "F10", 67),
    (KeyCode::F11, "F11", 68),
    (KeyCode::F12, "F12", 69),
    // Navigation
    (KeyCode::Insert, "Insert", 73),
    (KeyCode::Home, "Home", 74),
    (KeyCode::PageUp, "PageUp", 75),
    (KeyCode::Delete, "Delete", 76),
    (KeyCode::End, "End", 77),
    (KeyCode::PageDown, "PageDown", 78),
    (KeyCode::ArrowRight, "ArrowRight", 79),
    (KeyCode::ArrowLeft, "ArrowLeft", 80),
    (KeyCode::ArrowDown, "ArrowDown", 81),
    (KeyCode::ArrowUp, "ArrowUp", 82),
    // Numpad
    (KeyCode::NumpadDivide, "NumpadDivide", 84),
    (KeyCode::NumpadMultiply, "NumpadMultiply", 85),
    (KeyCode::NumpadSubtract, "NumpadSubtract", 86),
    (KeyCode::NumpadAdd, "NumpadAdd", 87),
    (KeyCode::NumpadEnter, "NumpadEnter", 88),
    (KeyCode::Numpad1, "Numpad1", 89),
    (KeyCode::Numpad2, "Numpad2", 90),
    (KeyCode::Numpad3, "Numpad3", 91),
    (KeyCode::Numpad4, "Numpad4", 92),
    (KeyCode::Numpad5, "Numpad5", 93),
    (KeyCode::Numpad6, "Numpad6", 94),
    (KeyCode::Numpad7, "Numpad7", 95),
    (KeyCode::Numpad8, "Numpad8", 96),
    (KeyCode::Numpad9, "Numpad9", 97),
    (KeyCode::Numpad0, "Numpad0", 98),
    (KeyCode::NumpadDecimal, "NumpadDecimal", 99),
    // Modifiers
    (KeyCode::ControlLeft, "ControlLeft", 224),
    (KeyCode::ShiftLeft, "ShiftLeft", 225),
    (KeyCode::AltLeft, "AltLeft", 226),
    (KeyCode::ControlRight, "ControlRight", 228),
    (KeyCode::ShiftRight, "ShiftRight", 229),
    (KeyCode::AltRight, "AltRight", 230),
];

/// Convert KeyCode to its config name ("Unknown" if it has none)
pub(crate) fn keycode_to_string(key: &KeyCode) -> &'static str {
    KEY_TABLE
        .iter()
        .find(|(k, _, _)| k == key)
        .map_or("Unknown", |(_, name, _)| *name)
}

/// Convert a config name back to KeyCode
pub(crate) fn string_to_keycode(s: &str) -> Option<KeyCode> {
    KEY_TABLE
        .iter()
        .find(|(_, name, _)| *name == s)
        .map(|(k, _, _)| *k)
}

/// HID usage code the analog driver reports this key under
pub(crate) fn keycode_to_scan_code(key: &KeyCode) -> Option<ScanCode> {
    KEY_TABLE
        .iter()
        .find(|(k, _, _)| k == key)
        .map(|(_, _, code)| *code)
}

/// Serialize a KeyCode as a string
pub(super) fn serialize_keycode<S>(key: &KeyCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(keycode_to_string(key))
}

/// Deserialize a KeyCode from a string
pub(super) fn deserialize_keycode<'de, D>(deserializer: D) -> Result<KeyCode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    string_to_keycode(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown key name: '{}'", s)))
}
