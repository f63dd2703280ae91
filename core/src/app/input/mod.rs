//! Input configuration: key bindings and analog tuning

mod bindings;
pub(crate) mod keycode_serde;

pub use bindings::{AnalogKeyBindings, ScanCodeMap};

use analogmove_shared::constants::{
    ACTIVATION_THRESHOLD, CURVE_EXPONENT, DETECT_THRESHOLD, SOCD_THRESHOLD,
};
use serde::{Deserialize, Serialize};

use super::config::ConfigError;

/// Whether press history keeps updating while analog input is suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TrackerPolicy {
    /// Skip tracker updates while in a menu or unfocused. A key pressed and
    /// released during the pause leaves no trace.
    #[default]
    FreezeWhileSuspended,
    /// Keep reading the driver and tracking rising edges while suspended.
    AlwaysUpdate,
}

/// Analog tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalogSettings {
    /// Rising-edge detection threshold (0.0-1.0)
    #[serde(default = "default_detect_threshold")]
    pub detect_threshold: f32,

    /// Minimum magnitude that moves the character (0.0-1.0)
    #[serde(default = "default_activation_threshold")]
    pub activation_threshold: f32,

    /// Both keys of a pair must exceed this for last-input priority (0.0-1.0)
    #[serde(default = "default_socd_threshold")]
    pub socd_threshold: f32,

    /// Response curve exponent
    #[serde(default = "default_exponent")]
    pub exponent: f32,

    #[serde(default)]
    pub tracker_policy: TrackerPolicy,
}

fn default_detect_threshold() -> f32 {
    DETECT_THRESHOLD
}
fn default_activation_threshold() -> f32 {
    ACTIVATION_THRESHOLD
}
fn default_socd_threshold() -> f32 {
    SOCD_THRESHOLD
}
fn default_exponent() -> f32 {
    CURVE_EXPONENT
}

impl Default for AnalogSettings {
    fn default() -> Self {
        Self {
            detect_threshold: default_detect_threshold(),
            activation_threshold: default_activation_threshold(),
            socd_threshold: default_socd_threshold(),
            exponent: default_exponent(),
            tracker_policy: TrackerPolicy::default(),
        }
    }
}

impl AnalogSettings {
    /// Check that thresholds lie in [0, 1] and the exponent is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            ("input.analog.detect_threshold", self.detect_threshold),
            ("input.analog.activation_threshold", self.activation_threshold),
            ("input.analog.socd_threshold", self.socd_threshold),
        ];
        for (field, value) in thresholds {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    field: field.to_string(),
                    reason: format!("{} is outside 0.0-1.0", value),
                });
            }
        }

        if !self.exponent.is_finite() || self.exponent <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "input.analog.exponent".to_string(),
                reason: format!("{} must be a positive finite number", self.exponent),
            });
        }

        Ok(())
    }
}

/// Input configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InputConfig {
    /// Keys feeding the four movement channels
    #[serde(default)]
    pub bindings: AnalogKeyBindings,

    #[serde(default)]
    pub analog: AnalogSettings,
}

impl InputConfig {
    /// Validate tuning and bindings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analog.validate()?;
        if let Some(channel) = self.bindings.duplicates().first() {
            return Err(ConfigError::Invalid {
                field: format!("input.bindings.{}", channel.name()),
                reason: "key is already bound to another channel".to_string(),
            });
        }
        self.bindings.scan_codes()?;
        Ok(())
    }
}
