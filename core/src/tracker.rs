//! Rising-edge history per key channel
//!
//! Records when each channel last went from released to pressed. The axis
//! resolver uses these timestamps to decide which key of an opposing pair
//! was pressed last.

use analogmove_shared::{Channel, Magnitudes, Timestamp};

#[derive(Debug, Clone, Copy, Default)]
struct ChannelHistory {
    was_pressed: bool,
    last_press: Timestamp,
}

/// Press history for the four movement channels.
#[derive(Debug, Clone)]
pub struct KeyPressTracker {
    detect_threshold: f32,
    channels: [ChannelHistory; 4],
}

impl KeyPressTracker {
    pub fn new(detect_threshold: f32) -> Self {
        Self {
            detect_threshold,
            channels: [ChannelHistory::default(); 4],
        }
    }

    /// Feed one channel's magnitude for this tick.
    ///
    /// A magnitude strictly above the detect threshold counts as pressed.
    /// The timestamp only moves on a released -> pressed transition.
    pub fn update(&mut self, channel: Channel, magnitude: f32, now: Timestamp) {
        let is_pressed = magnitude > self.detect_threshold;
        let history = &mut self.channels[channel.index()];
        if is_pressed && !history.was_pressed {
            history.last_press = now;
            tracing::trace!("{} pressed at {}ms", channel.name(), now.as_millis());
        }
        history.was_pressed = is_pressed;
    }

    /// Feed all four channels for this tick.
    pub fn update_all(&mut self, magnitudes: &Magnitudes, now: Timestamp) {
        for channel in Channel::ALL {
            self.update(channel, magnitudes.get(channel), now);
        }
    }

    /// Time of the channel's most recent rising edge (`ZERO` if never pressed).
    pub fn last_press(&self, channel: Channel) -> Timestamp {
        self.channels[channel.index()].last_press
    }

    /// Pressed state recorded by the last update.
    pub fn is_pressed(&self, channel: Channel) -> bool {
        self.channels[channel.index()].was_pressed
    }

    pub fn detect_threshold(&self) -> f32 {
        self.detect_threshold
    }
}

impl Default for KeyPressTracker {
    fn default() -> Self {
        Self::new(analogmove_shared::constants::DETECT_THRESHOLD)
    }
}
