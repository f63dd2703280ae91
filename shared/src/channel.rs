//! Logical key channels and per-tick magnitude frames

use serde::{Deserialize, Serialize};

/// One of the four monitored movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Forward,
    Back,
    Left,
    Right,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 4] = [Channel::Forward, Channel::Back, Channel::Left, Channel::Right];

    /// Stable index into per-channel arrays.
    pub const fn index(self) -> usize {
        match self {
            Channel::Forward => 0,
            Channel::Back => 1,
            Channel::Left => 2,
            Channel::Right => 3,
        }
    }

    /// The axis this channel drives.
    pub const fn pair(self) -> AxisPair {
        match self {
            Channel::Forward | Channel::Back => AxisPair::ForwardBack,
            Channel::Left | Channel::Right => AxisPair::LeftRight,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Channel::Forward => "forward",
            Channel::Back => "back",
            Channel::Left => "left",
            Channel::Right => "right",
        }
    }
}

/// Two opposing channels sharing one output axis.
///
/// On the analog path the first channel of each pair is positive
/// (Forward, Left) and the second is negative (Back, Right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisPair {
    ForwardBack,
    LeftRight,
}

impl AxisPair {
    /// Channel that produces a positive analog output.
    pub const fn positive(self) -> Channel {
        match self {
            AxisPair::ForwardBack => Channel::Forward,
            AxisPair::LeftRight => Channel::Left,
        }
    }

    /// Channel that produces a negative analog output. Wins timestamp ties.
    pub const fn negative(self) -> Channel {
        match self {
            AxisPair::ForwardBack => Channel::Back,
            AxisPair::LeftRight => Channel::Right,
        }
    }
}

/// Analog magnitudes for all four channels in one tick (0.0 to 1.0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Magnitudes {
    pub forward: f32,
    pub back: f32,
    pub left: f32,
    pub right: f32,
}

impl Magnitudes {
    pub const fn new(forward: f32, back: f32, left: f32, right: f32) -> Self {
        Self {
            forward,
            back,
            left,
            right,
        }
    }

    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Forward => self.forward,
            Channel::Back => self.back,
            Channel::Left => self.left,
            Channel::Right => self.right,
        }
    }

    pub fn set(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::Forward => self.forward = value,
            Channel::Back => self.back = value,
            Channel::Left => self.left = value,
            Channel::Right => self.right = value,
        }
    }

    /// Copy with every value clamped to [0.0, 1.0]. NaN reads as released.
    pub fn clamped(&self) -> Self {
        Self {
            forward: clamp_magnitude(self.forward),
            back: clamp_magnitude(self.back),
            left: clamp_magnitude(self.left),
            right: clamp_magnitude(self.right),
        }
    }
}

/// Clamp a raw driver reading into [0.0, 1.0].
pub fn clamp_magnitude(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
