//! Per-tick integration of driver, tracker and resolver
//!
//! The host calls [`MovementController::tick`] once per frame. The
//! controller decides which input handler the host should use this tick:
//! the analog handler (with the resolved [`MovementOutput`]) or the host's
//! own digital keyboard handler. It falls back to digital whenever a menu is
//! open, the window is unfocused, or the analog driver is unavailable.


use analogmove_shared::time::MonotonicClock;
use analogmove_shared::{Channel, HostInput, Magnitudes, MovementOutput, Timestamp};
use serde::{Deserialize, Serialize};

use crate::app::config::ConfigError;
use crate::app::input::{InputConfig, ScanCodeMap, TrackerPolicy};
use crate::debug::AnalogSnapshot;
use crate::driver::{AnalogDriver, DriverSession};
use crate::resolver::AxisResolver;
use crate::tracker::KeyPressTracker;

/// Which input handler the host should drive the character with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Analog,
    Digital,
}

impl InputMode {
    pub fn name(self) -> &'static str {
        match self {
            InputMode::Analog => "analog",
            InputMode::Digital => "digital",
        }
    }
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Apply this output to the character.
    Analog(MovementOutput),
    /// Use the host's default keyboard handler.
    Digital,
}

impl TickOutcome {
    pub fn mode(&self) -> InputMode {
        match self {
            TickOutcome::Analog(_) => InputMode::Analog,
            TickOutcome::Digital => InputMode::Digital,
        }
    }

    pub fn analog_output(&self) -> Option<MovementOutput> {
        match self {
            TickOutcome::Analog(output) => Some(*output),
            TickOutcome::Digital => None,
        }
    }
}

/// Owns the driver session and all per-tick analog state.
pub struct MovementController<D: AnalogDriver> {
    /// None once the driver failed to open or failed mid-session
    session: Option<DriverSession<D>>,
    bindings: ScanCodeMap,
    tracker: KeyPressTracker,
    resolver: AxisResolver,
    policy: TrackerPolicy,
    mode: InputMode,
    clock: MonotonicClock,
    snapshot: AnalogSnapshot,
}

impl<D: AnalogDriver> MovementController<D> {
    /// Create a controller and open a driver session.
    ///
    /// A driver that fails to initialise is logged and leaves the controller
    /// permanently in digital mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: &InputConfig, driver: D) -> Result<Self, ConfigError> {
        config.validate()?;
        let bindings = config.bindings.scan_codes()?;

        let session = match DriverSession::open(driver) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(
                    "Failed to initialise analog driver: {}. Analog movement is disabled.",
                    e
                );
                None
            }
        };

        let settings = &config.analog;
        tracing::info!(
            "Analog movement: activation {:.2}, SOCD {:.2}, exponent {:.1}, tracker {:?}",
            settings.activation_threshold,
            settings.socd_threshold,
            settings.exponent,
            settings.tracker_policy
        );

        Ok(Self {
            session,
            bindings,
            tracker: KeyPressTracker::new(settings.detect_threshold),
            resolver: AxisResolver::from_settings(settings),
            policy: settings.tracker_policy,
            mode: InputMode::Digital,
            clock: MonotonicClock::new(),
            snapshot: AnalogSnapshot::default(),
        })
    }

    /// Run one tick using the controller's monotonic clock.
    pub fn tick(&mut self, host: &HostInput) -> TickOutcome {
        let now = self.clock.now();
        self.tick_at(host, now)
    }

    /// Run one tick at an explicit time.
    pub fn tick_at(&mut self, host: &HostInput, now: Timestamp) -> TickOutcome {
        self.snapshot.at = now;

        if self.session.is_none() {
            return self.finish(TickOutcome::Digital);
        }

        if host.is_suspended() {
            if self.policy == TrackerPolicy::AlwaysUpdate {
                if let Some(magnitudes) = self.read_magnitudes() {
                    self.tracker.update_all(&magnitudes, now);
                }
            }
            return self.finish(TickOutcome::Digital);
        }

        let Some(magnitudes) = self.read_magnitudes() else {
            return self.finish(TickOutcome::Digital);
        };
        self.tracker.update_all(&magnitudes, now);

        let output = self.resolver.resolve(&magnitudes, &self.tracker, host);
        tracing::trace!(
            "tick {}ms: forward {:+.3} sideways {:+.3}",
            now.as_millis(),
            output.forward_axis,
            output.sideways_axis
        );
        self.finish(TickOutcome::Analog(output))
    }

    fn read_magnitudes(&mut self) -> Option<Magnitudes> {
        let session = self.session.as_mut()?;
        match session.read_channels(&self.bindings) {
            Ok(magnitudes) => {
                self.snapshot.magnitudes = magnitudes;
                Some(magnitudes)
            }
            Err(e) => {
                tracing::error!("Analog driver read failed: {}. Analog movement is disabled.", e);
                // Dropping the session uninitialises the driver
                self.session = None;
                None
            }
        }
    }

    fn finish(&mut self, outcome: TickOutcome) -> TickOutcome {
        let mode = outcome.mode();
        if mode != self.mode {
            tracing::debug!("Input mode: {} -> {}", self.mode.name(), mode.name());
            self.mode = mode;
        }
        self.snapshot.mode = mode;
        self.snapshot.output = outcome.analog_output();
        for channel in Channel::ALL {
            self.snapshot.last_press[channel.index()] = self.tracker.last_press(channel);
        }
        outcome
    }

    /// Whether the analog driver is still usable.
    pub fn is_enabled(&self) -> bool {
        self.session.is_some()
    }

    /// Handler chosen by the most recent tick.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn tracker(&self) -> &KeyPressTracker {
        &self.tracker
    }

    pub fn resolver(&self) -> &AxisResolver {
        &self.resolver
    }

    pub fn bindings(&self) -> &ScanCodeMap {
        &self.bindings
    }

    pub fn snapshot(&self) -> &AnalogSnapshot {
        &self.snapshot
    }

    /// The driver, while the session is alive.
    pub fn driver_mut(&mut self) -> Option<&mut D> {
        self.session.as_mut().map(|session| session.driver_mut())
    }

    /// Close the driver session. The controller stays in digital mode.
    pub fn shutdown(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.close();
        }
        self.mode = InputMode::Digital;
    }
}
