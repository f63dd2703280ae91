//! Axis resolution with last-input SOCD priority
//!
//! Turns the four channel magnitudes and their press history into the two
//! movement axes. Each axis is resolved independently:
//!
//! 1. Both channels above the SOCD threshold: the channel pressed most
//!    recently wins and the other contributes nothing. Ties go to the
//!    negative channel (Back / Right).
//! 2. Otherwise the first channel above the activation threshold drives the
//!    axis, positive channel first.
//! 3. Otherwise the host's digital bindings are used as a fallback.
//!
//! The digital fallback on the sideways axis uses the opposite sign
//! convention to the analog path (digital left is -1.0). Hosts depend on
//! this mapping, so it is kept as is.

#[cfg(test)]
mod tests;

use analogmove_shared::{AxisPair, Channel, DigitalInput, HostInput, Magnitudes, MovementOutput};

use crate::app::input::AnalogSettings;
use crate::curve::ResponseCurve;
use crate::tracker::KeyPressTracker;

/// Resolves both movement axes for a tick.
///
/// Holds only tuning values. Resolving never mutates state, so the same
/// inputs always produce the same output.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisResolver {
    curve: ResponseCurve,
    activation_threshold: f32,
    socd_threshold: f32,
}

impl AxisResolver {
    pub fn new(curve: ResponseCurve, activation_threshold: f32, socd_threshold: f32) -> Self {
        Self {
            curve,
            activation_threshold,
            socd_threshold,
        }
    }

    pub fn from_settings(settings: &AnalogSettings) -> Self {
        Self::new(
            ResponseCurve::new(settings.exponent),
            settings.activation_threshold,
            settings.socd_threshold,
        )
    }

    pub fn curve(&self) -> &ResponseCurve {
        &self.curve
    }

    /// Resolve the full movement output for a tick.
    ///
    /// A suspended host (menu open or window unfocused) gets `IDLE`
    /// regardless of magnitudes. Magnitudes are clamped before use.
    pub fn resolve(
        &self,
        magnitudes: &Magnitudes,
        history: &KeyPressTracker,
        host: &HostInput,
    ) -> MovementOutput {
        if host.is_suspended() {
            return MovementOutput::IDLE;
        }

        let magnitudes = magnitudes.clamped();
        let digital = &host.digital;

        let mut forward_axis = self
            .resolve_analog(AxisPair::ForwardBack, &magnitudes, history)
            .unwrap_or_else(|| digital_forward(digital));
        let mut sideways_axis = self
            .resolve_analog(AxisPair::LeftRight, &magnitudes, history)
            .unwrap_or_else(|| digital_sideways(digital));

        if host.slow_down.enabled {
            forward_axis *= host.slow_down.multiplier;
            sideways_axis *= host.slow_down.multiplier;
        }

        // The host's multiplier is unchecked
        MovementOutput {
            forward_axis: clamp_axis(forward_axis),
            sideways_axis: clamp_axis(sideways_axis),
            jumping: digital.jump,
            sneaking: digital.sneak,
        }
    }

    /// Resolve one axis from analog input alone.
    ///
    /// Returns `None` when neither channel is active, so the caller can fall
    /// back to digital input.
    pub fn resolve_analog(
        &self,
        pair: AxisPair,
        magnitudes: &Magnitudes,
        history: &KeyPressTracker,
    ) -> Option<f32> {
        let positive = pair.positive();
        let negative = pair.negative();
        let pos_mag = magnitudes.get(positive);
        let neg_mag = magnitudes.get(negative);

        if pos_mag > self.socd_threshold && neg_mag > self.socd_threshold {
            let winner = last_pressed(positive, negative, history);
            let magnitude = magnitudes.get(winner);
            // Winning does not bypass the activation gate
            if magnitude <= self.activation_threshold {
                return Some(0.0);
            }
            let shaped = self.curve.shape(magnitude);
            return Some(if winner == positive { shaped } else { -shaped });
        }

        if pos_mag > self.activation_threshold {
            Some(self.curve.shape(pos_mag))
        } else if neg_mag > self.activation_threshold {
            Some(-self.curve.shape(neg_mag))
        } else {
            None
        }
    }

    /// Forward axis for a tick, without suspension or slow-down handling.
    pub fn forward_axis(
        &self,
        magnitudes: &Magnitudes,
        history: &KeyPressTracker,
        host: &HostInput,
    ) -> f32 {
        self.resolve_analog(AxisPair::ForwardBack, &magnitudes.clamped(), history)
            .unwrap_or_else(|| digital_forward(&host.digital))
    }

    /// Sideways axis for a tick, without suspension or slow-down handling.
    pub fn sideways_axis(
        &self,
        magnitudes: &Magnitudes,
        history: &KeyPressTracker,
        host: &HostInput,
    ) -> f32 {
        self.resolve_analog(AxisPair::LeftRight, &magnitudes.clamped(), history)
            .unwrap_or_else(|| digital_sideways(&host.digital))
    }
}

impl Default for AxisResolver {
    fn default() -> Self {
        Self::from_settings(&AnalogSettings::default())
    }
}

/// The channel pressed strictly later wins; ties go to `negative`.
fn last_pressed(positive: Channel, negative: Channel, history: &KeyPressTracker) -> Channel {
    if history.last_press(positive) > history.last_press(negative) {
        positive
    } else {
        negative
    }
}

/// Clamp to [-1.0, 1.0], with NaN treated as 0.0.
fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

fn digital_forward(digital: &DigitalInput) -> f32 {
    if digital.forward {
        1.0
    } else if digital.back {
        -1.0
    } else {
        0.0
    }
}

// Left is -1.0 here but positive on the analog path
fn digital_sideways(digital: &DigitalInput) -> f32 {
    if digital.left {
        -1.0
    } else if digital.right {
        1.0
    } else {
        0.0
    }
}
