//! Trace file format

use analogmove_shared::{DigitalInput, HostInput, Magnitudes, SlowDown, Timestamp};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::app::config::ConfigError;
use crate::app::input::InputConfig;
use crate::controller::InputMode;

/// Complete trace file (TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceScript {
    /// Overrides the caller's input config for this trace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<InputConfig>,

    /// Frames in time order
    #[serde(default)]
    pub frames: Vec<TraceFrame>,
}

/// Single frame of a trace
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceFrame {
    /// Frame time in milliseconds
    pub t: u64,

    /// Analog magnitudes. Omitted channels keep their previous value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,

    /// Digital bindings held this frame
    #[serde(default)]
    pub digital: DigitalInput,

    #[serde(default)]
    pub in_menu: bool,

    /// Window lost focus this frame
    #[serde(default)]
    pub unfocused: bool,

    /// Slow-down multiplier, if slow-down is active this frame
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow_down: Option<f32>,

    /// Checked after the frame runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<Expectation>,
}

impl TraceFrame {
    pub fn time(&self) -> Timestamp {
        Timestamp::from_millis(self.t)
    }

    /// Apply this frame's magnitudes on top of the previous frame's.
    pub fn apply_magnitudes(&self, held: &mut Magnitudes) {
        if let Some(v) = self.forward {
            held.forward = v;
        }
        if let Some(v) = self.back {
            held.back = v;
        }
        if let Some(v) = self.left {
            held.left = v;
        }
        if let Some(v) = self.right {
            held.right = v;
        }
    }

    pub fn host_input(&self) -> HostInput {
        HostInput {
            digital: self.digital,
            in_menu: self.in_menu,
            window_focused: !self.unfocused,
            slow_down: self.slow_down.map_or(SlowDown::NONE, SlowDown::by),
        }
    }
}

/// Expected result of a frame. Unset fields are not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expectation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<InputMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sideways: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jumping: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sneaking: Option<bool>,
    /// Allowed absolute error on axis values
    #[serde(default = "default_tolerance")]
    pub tolerance: f32,
}

fn default_tolerance() -> f32 {
    1e-3
}

/// Trace loading and replay errors
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse trace: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("frame {index} at t={t}ms is earlier than the previous frame (t={previous}ms)")]
    OutOfOrder { index: usize, t: u64, previous: u64 },
}

impl TraceScript {
    /// Frames must not go back in time.
    pub fn validate(&self) -> Result<(), ReplayError> {
        for (index, pair) in self.frames.windows(2).enumerate() {
            if pair[1].t < pair[0].t {
                return Err(ReplayError::OutOfOrder {
                    index: index + 1,
                    t: pair[1].t,
                    previous: pair[0].t,
                });
            }
        }
        if let Some(input) = &self.input {
            input.validate()?;
        }
        Ok(())
    }
}

/// Parse and validate a trace from TOML text.
pub fn parse_trace(text: &str) -> Result<TraceScript, ReplayError> {
    let script: TraceScript = toml::from_str(text)?;
    script.validate()?;
    Ok(script)
}

/// Read, parse and validate a trace file.
pub fn load_trace(path: &Path) -> Result<TraceScript, ReplayError> {
    let text = std::fs::read_to_string(path)?;
    parse_trace(&text)
}
