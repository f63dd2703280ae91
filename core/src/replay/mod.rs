//! Trace replay
//!
//! A trace is a TOML file of timed frames: analog magnitudes, host state and
//! optional expectations. Replaying it drives a [`MovementController`] over a
//! [`ManualDriver`] without any hardware, which makes tuning changes and
//! regressions easy to check from the command line or CI.
//!
//! ```toml
//! [[frames]]
//! t = 100
//! forward = 0.5
//!
//! [[frames]]
//! t = 200
//! back = 0.6          # forward stays at 0.5
//! expect = { forward = -0.216 }
//! ```
//!
//! [`MovementController`]: crate::controller::MovementController
//! [`ManualDriver`]: crate::driver::ManualDriver

mod runner;
mod trace;

pub use runner::{AssertionFailure, ExecutionReport, ReplayOptions, ReportSummary, run_trace};
pub use trace::{Expectation, ReplayError, TraceFrame, TraceScript, load_trace, parse_trace};
