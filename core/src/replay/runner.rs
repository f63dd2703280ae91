//! Headless trace execution

use analogmove_shared::{Magnitudes, MovementOutput};
use serde::{Deserialize, Serialize};

use super::trace::{Expectation, ReplayError, TraceScript};
use crate::app::input::InputConfig;
use crate::controller::{InputMode, MovementController, TickOutcome};
use crate::driver::ManualDriver;

/// Replay runner options
#[derive(Debug, Clone, Default)]
pub struct ReplayOptions {
    /// Stop on first failed expectation
    pub fail_fast: bool,
}

/// One failed expectation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssertionFailure {
    /// Frame index in the trace
    pub frame: usize,
    /// Frame time in milliseconds
    pub t: u64,
    pub message: String,
}

/// Report summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Frames whose expectation held
    pub assertions_passed: usize,
    /// Frames with at least one failed check
    pub assertions_failed: usize,
    /// "PASSED" or "FAILED"
    pub status: String,
}

/// Result of replaying a trace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// Frames executed
    pub frames_executed: usize,
    /// Total frames in trace
    pub total_frames: usize,
    /// Analog output per executed frame (None for digital frames)
    pub outputs: Vec<Option<MovementOutput>>,
    pub failures: Vec<AssertionFailure>,
    pub summary: ReportSummary,
}

impl ExecutionReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Replay a trace against a fresh controller.
///
/// The trace's own `[input]` section, when present, replaces `config`.
///
/// # Errors
///
/// Returns an error if the trace is malformed or the effective config is
/// invalid. Failed expectations are reported, not returned as errors.
pub fn run_trace(
    script: &TraceScript,
    config: &InputConfig,
    options: &ReplayOptions,
) -> Result<ExecutionReport, ReplayError> {
    script.validate()?;
    let config = script.input.as_ref().unwrap_or(config);
    let mut controller = MovementController::new(config, ManualDriver::new())?;
    let bindings = *controller.bindings();

    let mut held = Magnitudes::default();
    let mut outputs = Vec::with_capacity(script.frames.len());
    let mut failures = Vec::new();
    let mut passed = 0;
    let mut failed = 0;

    for (index, frame) in script.frames.iter().enumerate() {
        frame.apply_magnitudes(&mut held);
        if let Some(driver) = controller.driver_mut() {
            driver.set_channels(&bindings, &held);
        }

        let outcome = controller.tick_at(&frame.host_input(), frame.time());
        outputs.push(outcome.analog_output());

        if let Some(expect) = &frame.expect {
            let problems = check(expect, &outcome);
            if problems.is_empty() {
                passed += 1;
            } else {
                failed += 1;
                for message in problems {
                    tracing::debug!("frame {} (t={}ms): {}", index, frame.t, message);
                    failures.push(AssertionFailure {
                        frame: index,
                        t: frame.t,
                        message,
                    });
                }
                if options.fail_fast {
                    break;
                }
            }
        }
    }

    let status = if failures.is_empty() { "PASSED" } else { "FAILED" };

    Ok(ExecutionReport {
        frames_executed: outputs.len(),
        total_frames: script.frames.len(),
        outputs,
        failures,
        summary: ReportSummary {
            assertions_passed: passed,
            assertions_failed: failed,
            status: status.to_string(),
        },
    })
}

fn check(expect: &Expectation, outcome: &TickOutcome) -> Vec<String> {
    let mut problems = Vec::new();
    let mode = outcome.mode();

    if let Some(expected) = expect.mode {
        if expected != mode {
            problems.push(format!(
                "expected {} mode, got {}",
                expected.name(),
                mode.name()
            ));
        }
    }

    let wants_output = expect.forward.is_some()
        || expect.sideways.is_some()
        || expect.jumping.is_some()
        || expect.sneaking.is_some();
    if !wants_output {
        return problems;
    }

    let Some(output) = outcome.analog_output() else {
        if expect.mode != Some(InputMode::Digital) {
            problems.push("expected analog output, got digital mode".to_string());
        }
        return problems;
    };

    let axes = [
        ("forward", expect.forward, output.forward_axis),
        ("sideways", expect.sideways, output.sideways_axis),
    ];
    for (name, expected, actual) in axes {
        if let Some(expected) = expected {
            if (expected - actual).abs() > expect.tolerance {
                problems.push(format!(
                    "{} axis: expected {:.4}, got {:.4}",
                    name, expected, actual
                ));
            }
        }
    }

    let flags = [
        ("jumping", expect.jumping, output.jumping),
        ("sneaking", expect.sneaking, output.sneaking),
    ];
    for (name, expected, actual) in flags {
        if let Some(expected) = expected {
            if expected != actual {
                problems.push(format!("{}: expected {}, got {}", name, expected, actual));
            }
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::parse_trace;

    fn run(text: &str) -> ExecutionReport {
        let script = parse_trace(text).unwrap();
        run_trace(&script, &InputConfig::default(), &ReplayOptions::default()).unwrap()
    }

    #[test]
    fn test_socd_trace_passes() {
        let report = run(r#"
[[frames]]
t = 100
forward = 0.5
expect = { mode = "analog", forward = 0.125 }

[[frames]]
t = 200
back = 0.6
expect = { forward = -0.216 }

[[frames]]
t = 250
forward = 0.0

[[frames]]
t = 300
forward = 0.5
expect = { forward = 0.125 }
"#);
        assert!(report.passed(), "{:?}", report.failures);
        assert_eq!(report.frames_executed, 4);
        assert_eq!(report.summary.assertions_passed, 3);
        assert_eq!(report.summary.status, "PASSED");
    }

    #[test]
    fn test_menu_frame_is_digital() {
        let report = run(r#"
[[frames]]
t = 0
left = 1.0
in_menu = true
expect = { mode = "digital" }

[[frames]]
t = 16
expect = { mode = "analog", sideways = 1.0 }
"#);
        assert!(report.passed(), "{:?}", report.failures);
        assert_eq!(report.outputs[0], None);
    }

    #[test]
    fn test_failed_expectation_is_reported() {
        let report = run(r#"
[[frames]]
t = 0
forward = 1.0
expect = { forward = 0.5, jumping = true }
"#);
        assert!(!report.passed());
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.summary.assertions_failed, 1);
        assert_eq!(report.summary.status, "FAILED");
        assert!(report.failures[0].message.contains("forward axis"));
    }

    #[test]
    fn test_axis_expectation_on_digital_frame_fails() {
        let report = run(r#"
[[frames]]
t = 0
unfocused = true
expect = { forward = 0.0 }
"#);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].message.contains("digital mode"));
    }

    #[test]
    fn test_fail_fast_stops_early() {
        let script = parse_trace(
            r#"
[[frames]]
t = 0
expect = { mode = "digital" }

[[frames]]
t = 1
"#,
        )
        .unwrap();
        let options = ReplayOptions { fail_fast: true };
        let report = run_trace(&script, &InputConfig::default(), &options).unwrap();
        assert_eq!(report.frames_executed, 1);
        assert_eq!(report.total_frames, 2);
    }

    #[test]
    fn test_trace_config_override() {
        let report = run(r#"
[input.analog]
exponent = 1.0

[[frames]]
t = 0
right = 0.4
slow_down = 0.5
expect = { sideways = -0.2 }
"#);
        assert!(report.passed(), "{:?}", report.failures);
    }
}
