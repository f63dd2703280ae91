//! Reference tuning constants.
//!
//! These are the defaults for the `[input.analog]` config section. A config
//! that leaves every field unset reproduces the reference behavior exactly.

/// Magnitude above which a key counts as pressed for rising-edge tracking.
pub const DETECT_THRESHOLD: f32 = 0.01;

/// Magnitude a channel must exceed to contribute to movement.
pub const ACTIVATION_THRESHOLD: f32 = 0.01;

/// Both channels of a pair must exceed this for last-input priority to apply.
pub const SOCD_THRESHOLD: f32 = 0.30;

/// Response curve exponent (cubic taper).
pub const CURVE_EXPONENT: f32 = 3.0;

/// USB HID usage codes for the default W/S/A/D bindings.
pub mod scan_codes {
    pub const W: u16 = 26;
    pub const S: u16 = 22;
    pub const A: u16 = 4;
    pub const D: u16 = 7;
}
