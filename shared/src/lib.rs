//! Shared types for analogmove
//!
//! Plain data passed between the host integration, the resolution core and
//! the tooling: logical key channels, per-tick magnitude frames, host input
//! state and the movement output record.

pub mod channel;
pub mod constants;
pub mod movement;
pub mod time;

pub use channel::{AxisPair, Channel, Magnitudes};
pub use movement::{DigitalInput, HostInput, MovementOutput, SlowDown};
pub use time::Timestamp;
