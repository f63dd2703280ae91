//! Analog keyboard driver boundary
//!
//! The vendor SDK is reached through [`AnalogDriver`]. A [`DriverSession`]
//! owns an initialised driver for its whole lifetime: opening it calls
//! `initialise`, and closing or dropping it calls `uninitialise`.

use analogmove_shared::Magnitudes;
use analogmove_shared::channel::clamp_magnitude;
use hashbrown::HashMap;

use crate::app::input::ScanCodeMap;

/// HID usage code identifying a physical key.
pub type ScanCode = u16;

/// Driver failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DriverError {
    #[error("analog driver is not initialised")]
    NotInitialised,

    #[error("no analog devices connected")]
    NoDevices,

    /// Negative status code returned by the SDK
    #[error("analog SDK returned error code {0}")]
    Sdk(i32),

    #[error("analog driver unavailable: {0}")]
    Unavailable(String),
}

impl DriverError {
    /// Map an SDK status code to an error. Non-negative codes are success.
    pub fn from_status(code: i32) -> Option<Self> {
        match code {
            c if c >= 0 => None,
            -2000 => Some(DriverError::NotInitialised),
            -1999 => Some(DriverError::NoDevices),
            c => Some(DriverError::Sdk(c)),
        }
    }
}

/// An analog keyboard SDK.
pub trait AnalogDriver {
    /// Bring the SDK up.
    ///
    /// Returns the raw SDK status: the number of connected devices, or a
    /// negative error code.
    fn initialise(&mut self) -> i32;

    /// Current depression of a key, nominally 0.0 to 1.0.
    fn read_analog(&mut self, code: ScanCode) -> Result<f32, DriverError>;

    /// Release SDK resources.
    fn uninitialise(&mut self) {}
}

/// An initialised driver.
pub struct DriverSession<D: AnalogDriver> {
    driver: D,
    open: bool,
}

impl<D: AnalogDriver> DriverSession<D> {
    /// Initialise the driver and start a session.
    ///
    /// A negative status from `initialise` is mapped through
    /// [`DriverError::from_status`].
    pub fn open(mut driver: D) -> Result<Self, DriverError> {
        let status = driver.initialise();
        if let Some(err) = DriverError::from_status(status) {
            return Err(err);
        }
        tracing::info!("Analog driver initialised ({} device(s))", status);
        Ok(Self { driver, open: true })
    }

    /// Read one key.
    pub fn read_analog(&mut self, code: ScanCode) -> Result<f32, DriverError> {
        if !self.open {
            return Err(DriverError::NotInitialised);
        }
        self.driver.read_analog(code)
    }

    /// Read all four bound keys, clamped to [0.0, 1.0].
    pub fn read_channels(&mut self, bindings: &ScanCodeMap) -> Result<Magnitudes, DriverError> {
        Ok(Magnitudes {
            forward: clamp_magnitude(self.read_analog(bindings.forward)?),
            back: clamp_magnitude(self.read_analog(bindings.back)?),
            left: clamp_magnitude(self.read_analog(bindings.left)?),
            right: clamp_magnitude(self.read_analog(bindings.right)?),
        })
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// End the session. Later reads fail with `NotInitialised`.
    pub fn close(&mut self) {
        if self.open {
            self.driver.uninitialise();
            self.open = false;
            tracing::info!("Analog driver session closed");
        }
    }
}

impl<D: AnalogDriver> Drop for DriverSession<D> {
    fn drop(&mut self) {
        self.close();
    }
}

/// In-process driver whose key values are set by the caller.
///
/// Backs the trace replay runner and tests. Keys that were never set read
/// as released.
#[derive(Debug, Clone, Default)]
pub struct ManualDriver {
    values: HashMap<ScanCode, f32>,
    devices: i32,
    fail_init: Option<i32>,
    fail_reads: Option<DriverError>,
    initialised: bool,
    uninitialise_calls: u32,
}

impl ManualDriver {
    /// A driver with one connected device.
    pub fn new() -> Self {
        Self {
            devices: 1,
            ..Default::default()
        }
    }

    /// A driver whose `initialise` returns the SDK status `code`.
    pub fn failing(code: i32) -> Self {
        Self {
            fail_init: Some(code),
            ..Self::new()
        }
    }

    pub fn set(&mut self, code: ScanCode, value: f32) {
        self.values.insert(code, value);
    }

    /// Set all four bound keys at once.
    pub fn set_channels(&mut self, bindings: &ScanCodeMap, magnitudes: &Magnitudes) {
        self.set(bindings.forward, magnitudes.forward);
        self.set(bindings.back, magnitudes.back);
        self.set(bindings.left, magnitudes.left);
        self.set(bindings.right, magnitudes.right);
    }

    /// Make every subsequent read fail (`None` to recover).
    pub fn fail_reads(&mut self, error: Option<DriverError>) {
        self.fail_reads = error;
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    pub fn uninitialise_calls(&self) -> u32 {
        self.uninitialise_calls
    }
}

impl AnalogDriver for ManualDriver {
    fn initialise(&mut self) -> i32 {
        if let Some(code) = self.fail_init {
            return code;
        }
        self.initialised = true;
        self.devices
    }

    fn read_analog(&mut self, code: ScanCode) -> Result<f32, DriverError> {
        if let Some(err) = &self.fail_reads {
            return Err(err.clone());
        }
        if !self.initialised {
            return Err(DriverError::NotInitialised);
        }
        Ok(self.values.get(&code).copied().unwrap_or(0.0))
    }

    fn uninitialise(&mut self) {
        self.initialised = false;
        self.uninitialise_calls += 1;
    }
}
