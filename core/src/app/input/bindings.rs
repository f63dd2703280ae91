//! Physical keys bound to the four movement channels

use analogmove_shared::Channel;
use analogmove_shared::constants::scan_codes;
use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

use super::keycode_serde::{
    deserialize_keycode, keycode_to_scan_code, keycode_to_string, serialize_keycode,
};
use crate::app::config::ConfigError;
use crate::driver::ScanCode;

/// Analog movement key bindings, stored by key name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalogKeyBindings {
    #[serde(
        default = "default_forward",
        serialize_with = "serialize_keycode",
        deserialize_with = "deserialize_keycode"
    )]
    pub forward: KeyCode,
    #[serde(
        default = "default_back",
        serialize_with = "serialize_keycode",
        deserialize_with = "deserialize_keycode"
    )]
    pub back: KeyCode,
    #[serde(
        default = "default_left",
        serialize_with = "serialize_keycode",
        deserialize_with = "deserialize_keycode"
    )]
    pub left: KeyCode,
    #[serde(
        default = "default_right",
        serialize_with = "serialize_keycode",
        deserialize_with = "deserialize_keycode"
    )]
    pub right: KeyCode,
}

fn default_forward() -> KeyCode {
    KeyCode::KeyW
}
fn default_back() -> KeyCode {
    KeyCode::KeyS
}
fn default_left() -> KeyCode {
    KeyCode::KeyA
}
fn default_right() -> KeyCode {
    KeyCode::KeyD
}

impl Default for AnalogKeyBindings {
    fn default() -> Self {
        Self {
            forward: default_forward(),
            back: default_back(),
            left: default_left(),
            right: default_right(),
        }
    }
}

impl AnalogKeyBindings {
    pub fn get(&self, channel: Channel) -> KeyCode {
        match channel {
            Channel::Forward => self.forward,
            Channel::Back => self.back,
            Channel::Left => self.left,
            Channel::Right => self.right,
        }
    }

    /// Resolve every binding to the HID usage code the driver reads.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a bound key has no HID usage code.
    pub fn scan_codes(&self) -> Result<ScanCodeMap, ConfigError> {
        let code = |channel: Channel| -> Result<ScanCode, ConfigError> {
            let key = self.get(channel);
            keycode_to_scan_code(&key).ok_or_else(|| ConfigError::Invalid {
                field: format!("input.bindings.{}", channel.name()),
                reason: format!("key '{}' has no analog scan code", keycode_to_string(&key)),
            })
        };

        Ok(ScanCodeMap {
            forward: code(Channel::Forward)?,
            back: code(Channel::Back)?,
            left: code(Channel::Left)?,
            right: code(Channel::Right)?,
        })
    }

    /// Channels bound to a key that an earlier channel already uses.
    pub fn duplicates(&self) -> Vec<Channel> {
        let mut seen: Vec<KeyCode> = Vec::with_capacity(4);
        let mut duplicates = Vec::new();
        for channel in Channel::ALL {
            let key = self.get(channel);
            if seen.contains(&key) {
                duplicates.push(channel);
            } else {
                seen.push(key);
            }
        }
        duplicates
    }
}

/// HID usage codes read from the driver for each channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCodeMap {
    pub forward: ScanCode,
    pub back: ScanCode,
    pub left: ScanCode,
    pub right: ScanCode,
}

impl Default for ScanCodeMap {
    fn default() -> Self {
        Self {
            forward: scan_codes::W,
            back: scan_codes::S,
            left: scan_codes::A,
            right: scan_codes::D,
        }
    }
}
