//! analogmove core - analog key normalization and SOCD resolution
//!
//! Turns per-key analog depth readings from an analog keyboard into
//! proportional two-axis movement, resolving opposing presses with
//! last-input priority.
//!
//! # Architecture
//!
//! - [`KeyPressTracker`] - rising-edge timestamps per movement channel
//! - [`AxisResolver`] - threshold gating, response curve and SOCD resolution
//! - [`DriverSession`] - lifecycle of an [`AnalogDriver`]
//! - [`MovementController`] - per-tick integration and analog/digital mode
//! - [`replay`] - headless trace replay for tuning and regression checks

pub mod app;
pub mod controller;
pub mod curve;
pub mod debug;
pub mod driver;
pub mod replay;
pub mod resolver;
pub mod tracker;

pub use app::config::{Config, ConfigError};
pub use app::input::{AnalogKeyBindings, AnalogSettings, InputConfig, ScanCodeMap, TrackerPolicy};
pub use controller::{InputMode, MovementController, TickOutcome};
pub use curve::{ResponseCurve, shape};
pub use debug::{AnalogSnapshot, DebugStat};
pub use driver::{AnalogDriver, DriverError, DriverSession, ManualDriver, ScanCode};
pub use resolver::AxisResolver;
pub use tracker::KeyPressTracker;

// Re-export shared types for convenience
pub use analogmove_shared::{
    AxisPair, Channel, DigitalInput, HostInput, Magnitudes, MovementOutput, SlowDown, Timestamp,
};
