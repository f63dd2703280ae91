//! Host input state and movement output

use serde::{Deserialize, Serialize};

/// Digital (non-analog) bindings reported by the host this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalInput {
    #[serde(default)]
    pub forward: bool,
    #[serde(default)]
    pub back: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub jump: bool,
    #[serde(default)]
    pub sneak: bool,
}

/// Slow-down request from the host (e.g. while sneaking).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlowDown {
    pub enabled: bool,
    pub multiplier: f32,
}

impl SlowDown {
    pub const NONE: Self = Self {
        enabled: false,
        multiplier: 1.0,
    };

    pub fn by(multiplier: f32) -> Self {
        Self {
            enabled: true,
            multiplier,
        }
    }
}

impl Default for SlowDown {
    fn default() -> Self {
        Self::NONE
    }
}

/// Everything the host tells the core about the current tick, apart from the
/// analog magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostInput {
    pub digital: DigitalInput,
    /// A screen (chat, inventory, pause menu) is open
    pub in_menu: bool,
    pub window_focused: bool,
    pub slow_down: SlowDown,
}

impl HostInput {
    /// Whether analog handling must be bypassed this tick.
    pub fn is_suspended(&self) -> bool {
        self.in_menu || !self.window_focused
    }
}

impl Default for HostInput {
    fn default() -> Self {
        Self {
            digital: DigitalInput::default(),
            in_menu: false,
            window_focused: true,
            slow_down: SlowDown::NONE,
        }
    }
}

/// Movement intent for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementOutput {
    /// Forward positive, back negative (-1.0 to 1.0)
    pub forward_axis: f32,
    /// Sideways axis (-1.0 to 1.0)
    pub sideways_axis: f32,
    pub jumping: bool,
    pub sneaking: bool,
}

impl MovementOutput {
    /// No movement and no actions.
    pub const IDLE: Self = Self {
        forward_axis: 0.0,
        sideways_axis: 0.0,
        jumping: false,
        sneaking: false,
    };
}
