//! Response curve for analog magnitudes
//!
//! A power curve tapers shallow presses toward zero while a full press still
//! yields full output, giving a soft deadzone without a hard cutoff.

use analogmove_shared::channel::clamp_magnitude;
use analogmove_shared::constants::CURVE_EXPONENT;

/// Power-law response curve `clamp(x, 0, 1) ^ exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseCurve {
    exponent: f32,
}

impl ResponseCurve {
    /// The reference cubic curve.
    pub const CUBIC: Self = Self {
        exponent: CURVE_EXPONENT,
    };

    /// Create a curve with the given exponent.
    ///
    /// Callers validate the exponent at config load; it must be finite and
    /// positive for the curve to map [0, 1] onto [0, 1].
    pub fn new(exponent: f32) -> Self {
        Self { exponent }
    }

    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    /// Shape a magnitude. Input is clamped to [0, 1] first.
    pub fn shape(&self, magnitude: f32) -> f32 {
        clamp_magnitude(magnitude).powf(self.exponent)
    }

    /// Sample the curve at `steps + 1` evenly spaced points on [0, 1].
    pub fn table(&self, steps: usize) -> Vec<(f32, f32)> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| {
                let x = i as f32 / steps as f32;
                (x, self.shape(x))
            })
            .collect()
    }
}

impl Default for ResponseCurve {
    fn default() -> Self {
        Self::CUBIC
    }
}

/// Shape with the reference cubic curve.
pub fn shape(magnitude: f32) -> f32 {
    ResponseCurve::CUBIC.shape(magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_shape_endpoints() {
        assert_eq!(shape(0.0), 0.0);
        assert_eq!(shape(1.0), 1.0);
    }

    #[test]
    fn test_shape_is_cube_in_range() {
        for x in [0.1f32, 0.25, 0.5, 0.6, 0.9] {
            assert!((shape(x) - x * x * x).abs() < EPS, "x = {}", x);
        }
        assert!((shape(0.5) - 0.125).abs() < EPS);
        assert!((shape(0.6) - 0.216).abs() < EPS);
    }

    #[test]
    fn test_shape_clamps_out_of_range() {
        assert_eq!(shape(-0.5), 0.0);
        assert_eq!(shape(1.7), 1.0);
    }

    #[test]
    fn test_shape_monotonic() {
        let table = ResponseCurve::CUBIC.table(1000);
        for pair in table.windows(2) {
            assert!(pair[1].1 >= pair[0].1);
        }
    }

    #[test]
    fn test_custom_exponent() {
        let linear = ResponseCurve::new(1.0);
        assert!((linear.shape(0.3) - 0.3).abs() < EPS);

        let square = ResponseCurve::new(2.0);
        assert!((square.shape(0.5) - 0.25).abs() < EPS);
        assert_eq!(square.exponent(), 2.0);
    }

    #[test]
    fn test_table_zero_steps() {
        let table = ResponseCurve::CUBIC.table(0);
        assert_eq!(table, vec![(0.0, 0.0), (1.0, 1.0)]);
    }
}
