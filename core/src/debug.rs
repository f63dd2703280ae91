//! Debug statistics for the most recent tick
//!
//! The controller keeps an [`AnalogSnapshot`] of what it last read and
//! produced so an overlay or log line can show live analog values.

use analogmove_shared::{Channel, Magnitudes, MovementOutput, Timestamp};

use crate::controller::InputMode;

/// A single named value for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugStat {
    /// Display name for the stat
    pub name: String,
    /// Current value as a formatted string
    pub value: String,
}

impl DebugStat {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Format a value in [-1, 1] with three decimals.
    pub fn axis(name: impl Into<String>, value: f32) -> Self {
        Self::new(name, format!("{:+.3}", value))
    }
}

/// State captured at the end of the last tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalogSnapshot {
    /// Tick time
    pub at: Timestamp,
    /// Clamped magnitudes read this tick (last read while suspended)
    pub magnitudes: Magnitudes,
    /// Last rising edge per channel, indexed by `Channel::index`
    pub last_press: [Timestamp; 4],
    /// Analog output, if the analog handler was active
    pub output: Option<MovementOutput>,
    pub mode: InputMode,
}

impl Default for AnalogSnapshot {
    fn default() -> Self {
        Self {
            at: Timestamp::ZERO,
            magnitudes: Magnitudes::default(),
            last_press: [Timestamp::ZERO; 4],
            output: None,
            mode: InputMode::Digital,
        }
    }
}

impl AnalogSnapshot {
    pub fn debug_stats(&self) -> Vec<DebugStat> {
        let mut stats = vec![DebugStat::new("mode", self.mode.name())];
        for channel in Channel::ALL {
            stats.push(DebugStat::new(
                channel.name(),
                format!(
                    "{:.3} (pressed @ {}ms)",
                    self.magnitudes.get(channel),
                    self.last_press[channel.index()].as_millis()
                ),
            ));
        }
        if let Some(output) = &self.output {
            stats.push(DebugStat::axis("forward_axis", output.forward_axis));
            stats.push(DebugStat::axis("sideways_axis", output.sideways_axis));
        }
        stats
    }
}
