//! Tests for AxisResolver

use super::AxisResolver;
use crate::curve::{ResponseCurve, shape};
use crate::tracker::KeyPressTracker;
use analogmove_shared::{
    AxisPair, Channel, DigitalInput, HostInput, Magnitudes, MovementOutput, SlowDown, Timestamp,
};

const EPS: f32 = 1e-6;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

/// Tracker whose channels were pressed at the given times (0 = never).
fn history(forward: u64, back: u64, left: u64, right: u64) -> KeyPressTracker {
    let mut tracker = KeyPressTracker::default();
    for (channel, at) in [
        (Channel::Forward, forward),
        (Channel::Back, back),
        (Channel::Left, left),
        (Channel::Right, right),
    ] {
        if at > 0 {
            tracker.update(channel, 1.0, Timestamp::from_millis(at));
        }
    }
    tracker
}

fn host() -> HostInput {
    HostInput::default()
}

// === Single channel ===

#[test]
fn test_single_forward_channel() {
    let resolver = AxisResolver::default();
    let out = resolver.resolve(&Magnitudes::new(0.5, 0.0, 0.0, 0.0), &history(1, 0, 0, 0), &host());
    assert!(approx(out.forward_axis, 0.125));
    assert_eq!(out.sideways_axis, 0.0);
}

#[test]
fn test_single_back_channel() {
    let resolver = AxisResolver::default();
    let out = resolver.resolve(&Magnitudes::new(0.0, 0.8, 0.0, 0.0), &history(0, 1, 0, 0), &host());
    assert!(approx(out.forward_axis, -shape(0.8)));
}

#[test]
fn test_single_left_is_positive_on_analog_path() {
    let resolver = AxisResolver::default();
    let out = resolver.resolve(&Magnitudes::new(0.0, 0.0, 0.7, 0.0), &history(0, 0, 1, 0), &host());
    assert!(approx(out.sideways_axis, shape(0.7)));
    assert!(out.sideways_axis > 0.0);
}

#[test]
fn test_single_right_is_negative_on_analog_path() {
    let resolver = AxisResolver::default();
    let out = resolver.resolve(&Magnitudes::new(0.0, 0.0, 0.0, 0.9), &history(0, 0, 0, 1), &host());
    assert!(approx(out.sideways_axis, -shape(0.9)));
}

#[test]
fn test_single_active_channel_sign_grid() {
    let resolver = AxisResolver::default();
    let tracker = history(1, 1, 1, 1);
    for active in [0.02f32, 0.2, 0.5, 1.0] {
        for other in [0.0f32, 0.005, 0.01] {
            let out = resolver.resolve(&Magnitudes::new(active, other, other, active), &tracker, &host());
            assert!(approx(out.forward_axis, shape(active)), "fwd {} {}", active, other);
            assert!(approx(out.sideways_axis, -shape(active)), "side {} {}", active, other);
        }
    }
}

// === SOCD ===

#[test]
fn test_socd_back_pressed_last_wins() {
    let resolver = AxisResolver::default();
    let out = resolver.resolve(&Magnitudes::new(0.5, 0.6, 0.0, 0.0), &history(100, 200, 0, 0), &host());
    assert!(approx(out.forward_axis, -shape(0.6)));
    assert!((out.forward_axis + 0.216).abs() < 1e-4);
}

#[test]
fn test_socd_forward_pressed_last_wins() {
    let resolver = AxisResolver::default();
    let out = resolver.resolve(&Magnitudes::new(0.5, 0.6, 0.0, 0.0), &history(300, 200, 0, 0), &host());
    assert!(approx(out.forward_axis, 0.125));
}

#[test]
fn test_socd_equal_timestamps_back_wins() {
    let resolver = AxisResolver::default();
    let out = resolver.resolve(&Magnitudes::new(0.9, 0.4, 0.0, 0.0), &history(100, 100, 0, 0), &host());
    assert!(approx(out.forward_axis, -shape(0.4)));
}

#[test]
fn test_socd_equal_timestamps_right_wins() {
    let resolver = AxisResolver::default();
    let out = resolver.resolve(&Magnitudes::new(0.0, 0.0, 0.9, 0.4), &history(0, 0, 50, 50), &host());
    assert!(approx(out.sideways_axis, -shape(0.4)));
}

#[test]
fn test_socd_left_pressed_last_wins() {
    let resolver = AxisResolver::default();
    let out = resolver.resolve(&Magnitudes::new(0.0, 0.0, 0.5, 0.6), &history(0, 0, 400, 300), &host());
    assert!(approx(out.sideways_axis, shape(0.5)));
}

#[test]
fn test_below_socd_threshold_uses_positive_channel_first() {
    // Both pressed, but Back is under the SOCD threshold: Forward drives even
    // though Back was pressed later
    let resolver = AxisResolver::default();
    let out = resolver.resolve(&Magnitudes::new(0.5, 0.3, 0.0, 0.0), &history(100, 200, 0, 0), &host());
    assert!(approx(out.forward_axis, shape(0.5)));
}

#[test]
fn test_socd_winner_below_activation_outputs_zero() {
    // Activation above SOCD threshold makes the defensive gate observable
    let resolver = AxisResolver::new(ResponseCurve::CUBIC, 0.5, 0.3);
    let digital = HostInput {
        digital: DigitalInput {
            forward: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let out = resolver.resolve(&Magnitudes::new(0.9, 0.4, 0.0, 0.0), &history(100, 200, 0, 0), &digital);
    // Back wins but is not active; no digital fallback either
    assert_eq!(out.forward_axis, 0.0);
}

#[test]
fn test_resolve_analog_reports_inactive_axis() {
    let resolver = AxisResolver::default();
    let tracker = history(0, 0, 0, 0);
    let m = Magnitudes::new(0.0, 0.01, 0.0, 0.0);
    assert_eq!(resolver.resolve_analog(AxisPair::ForwardBack, &m, &tracker), None);
    assert_eq!(resolver.resolve_analog(AxisPair::LeftRight, &m, &tracker), None);
}

// === Thresholds and noise ===

#[test]
fn test_sub_threshold_noise_is_ignored() {
    let resolver = AxisResolver::default();
    let mut tracker = KeyPressTracker::default();
    let noise = Magnitudes::new(0.005, 0.005, 0.005, 0.005);
    tracker.update_all(&noise, Timestamp::from_millis(100));

    let out = resolver.resolve(&noise, &tracker, &host());
    assert_eq!(out.forward_axis, 0.0);
    assert_eq!(out.sideways_axis, 0.0);
    for channel in Channel::ALL {
        assert_eq!(tracker.last_press(channel), Timestamp::ZERO);
    }
}

#[test]
fn test_out_of_range_magnitudes_are_clamped() {
    let resolver = AxisResolver::default();
    let out = resolver.resolve(
        &Magnitudes::new(1.8, -0.5, f32::NAN, 0.0),
        &history(1, 0, 0, 0),
        &host(),
    );
    assert_eq!(out.forward_axis, 1.0);
    assert_eq!(out.sideways_axis, 0.0);
}

// === Digital fallback ===

#[test]
fn test_digital_forward_back_fallback() {
    let resolver = AxisResolver::default();
    let tracker = history(0, 0, 0, 0);
    let idle = Magnitudes::default();

    let mut input = host();
    input.digital.forward = true;
    assert_eq!(resolver.resolve(&idle, &tracker, &input).forward_axis, 1.0);

    input.digital.forward = false;
    input.digital.back = true;
    assert_eq!(resolver.resolve(&idle, &tracker, &input).forward_axis, -1.0);

    input.digital.forward = true;
    assert_eq!(resolver.resolve(&idle, &tracker, &input).forward_axis, 1.0);
}

#[test]
fn test_digital_left_right_fallback_is_inverted() {
    let resolver = AxisResolver::default();
    let tracker = history(0, 0, 0, 0);
    let idle = Magnitudes::default();

    let mut input = host();
    input.digital.left = true;
    assert_eq!(resolver.resolve(&idle, &tracker, &input).sideways_axis, -1.0);

    input.digital.left = false;
    input.digital.right = true;
    assert_eq!(resolver.resolve(&idle, &tracker, &input).sideways_axis, 1.0);

    // Left is checked first
    input.digital.left = true;
    assert_eq!(resolver.resolve(&idle, &tracker, &input).sideways_axis, -1.0);
}

#[test]
fn test_analog_takes_priority_over_digital() {
    let resolver = AxisResolver::default();
    let mut input = host();
    input.digital.back = true;
    input.digital.right = true;
    let out = resolver.resolve(&Magnitudes::new(0.5, 0.0, 0.5, 0.0), &history(1, 0, 1, 0), &input);
    assert!(approx(out.forward_axis, 0.125));
    assert!(approx(out.sideways_axis, 0.125));
}

#[test]
fn test_jump_and_sneak_pass_through() {
    let resolver = AxisResolver::default();
    let mut input = host();
    input.digital.jump = true;
    input.digital.sneak = true;
    let out = resolver.resolve(&Magnitudes::default(), &history(0, 0, 0, 0), &input);
    assert!(out.jumping);
    assert!(out.sneaking);
}

// === Suspension and slow-down ===

#[test]
fn test_menu_forces_idle() {
    let resolver = AxisResolver::default();
    let input = HostInput {
        digital: DigitalInput {
            forward: true,
            jump: true,
            sneak: true,
            ..Default::default()
        },
        in_menu: true,
        ..Default::default()
    };
    let out = resolver.resolve(&Magnitudes::new(1.0, 0.0, 1.0, 0.0), &history(1, 0, 1, 0), &input);
    assert_eq!(out, MovementOutput::IDLE);
}

#[test]
fn test_unfocused_window_forces_idle() {
    let resolver = AxisResolver::default();
    let input = HostInput {
        window_focused: false,
        ..Default::default()
    };
    let out = resolver.resolve(&Magnitudes::new(0.0, 1.0, 0.0, 1.0), &history(0, 1, 0, 1), &input);
    assert_eq!(out, MovementOutput::IDLE);
}

#[test]
fn test_slow_down_scales_both_axes() {
    // shape(x) = x^1 so the resolved axes are exactly 0.8 and -0.4
    let resolver = AxisResolver::new(ResponseCurve::new(1.0), 0.01, 0.3);
    let input = HostInput {
        slow_down: SlowDown::by(0.5),
        ..Default::default()
    };
    let out = resolver.resolve(&Magnitudes::new(0.8, 0.0, 0.0, 0.4), &history(1, 0, 0, 1), &input);
    assert!(approx(out.forward_axis, 0.4));
    assert!(approx(out.sideways_axis, -0.2));
}

#[test]
fn test_slow_down_disabled_ignores_multiplier() {
    let resolver = AxisResolver::default();
    let input = HostInput {
        slow_down: SlowDown {
            enabled: false,
            multiplier: 0.1,
        },
        ..Default::default()
    };
    let out = resolver.resolve(&Magnitudes::new(1.0, 0.0, 0.0, 0.0), &history(1, 0, 0, 0), &input);
    assert_eq!(out.forward_axis, 1.0);
}

#[test]
fn test_slow_down_applies_to_digital_fallback() {
    let resolver = AxisResolver::default();
    let mut input = host();
    input.digital.forward = true;
    input.slow_down = SlowDown::by(0.3);
    let out = resolver.resolve(&Magnitudes::default(), &history(0, 0, 0, 0), &input);
    assert!(approx(out.forward_axis, 0.3));
}

#[test]
fn test_out_of_range_slow_down_stays_in_axis_range() {
    let resolver = AxisResolver::default();
    let mut input = host();
    input.digital.left = true;
    input.slow_down = SlowDown::by(2.5);
    let m = Magnitudes::new(1.0, 0.0, 0.0, 0.0);
    let out = resolver.resolve(&m, &history(1, 0, 0, 0), &input);
    assert_eq!(out.forward_axis, 1.0);
    assert_eq!(out.sideways_axis, -1.0);

    input.slow_down = SlowDown::by(f32::NAN);
    let out = resolver.resolve(&m, &history(1, 0, 0, 0), &input);
    assert_eq!(out.forward_axis, 0.0);
    assert_eq!(out.sideways_axis, 0.0);
}

// === Purity ===

#[test]
fn test_resolve_is_idempotent() {
    let resolver = AxisResolver::default();
    let tracker = history(100, 200, 300, 250);
    let m = Magnitudes::new(0.5, 0.6, 0.45, 0.7);
    let first = resolver.resolve(&m, &tracker, &host());
    let second = resolver.resolve(&m, &tracker, &host());
    assert_eq!(first, second);
}

#[test]
fn test_axis_helpers_match_resolve() {
    let resolver = AxisResolver::default();
    let tracker = history(100, 200, 300, 250);
    let m = Magnitudes::new(0.5, 0.6, 0.45, 0.7);
    let out = resolver.resolve(&m, &tracker, &host());
    assert_eq!(resolver.forward_axis(&m, &tracker, &host()), out.forward_axis);
    assert_eq!(resolver.sideways_axis(&m, &tracker, &host()), out.sideways_axis);
}
