//! Compass assistant orchestrating fusion, continuity correction and smoothing

use log::{debug, trace};
use nalgebra::Vector3;

use crate::continuity;
use crate::declination::{DeclinationSource, Location};
use crate::smoothing::MovingAverage;
use crate::types::{AssistantSettings, ConfigError, SensorKind, SensorReading};

/// Receiver of compass events
///
/// Implement this to drive a UI (or anything else) from the assistant.
/// Listeners are invoked synchronously, in registration order, from
/// whatever thread delivers the sensor reading. For every processed
/// sample the raw heading callback fires before the smoothed one.
///
/// The `Send` bound lets an assistant live behind a mutex when the host
/// platform delivers sensor callbacks from a background thread.
pub trait CompassListener: Send {
    /// A new continuity-corrected heading, in degrees
    ///
    /// Values are not confined to [0°, 360°): consecutive headings are
    /// kept within 180° of each other so a needle can be animated along
    /// the short arc. Reduce modulo 360 for display as a number.
    fn on_heading(&mut self, degrees: f32);

    /// A new smoothed heading, the sliding-window mean of recent headings
    fn on_smoothed_heading(&mut self, degrees: f32);

    /// The assistant transitioned from stopped to running
    fn on_started(&mut self) {}

    /// The assistant transitioned from running to stopped
    fn on_stopped(&mut self) {}
}

/// Platform sensor service the assistant attaches to
///
/// Mirrors the register/unregister calls a platform sensor manager
/// expects. The assistant calls [`start_updates`](Self::start_updates)
/// when it starts and [`stop_updates`](Self::stop_updates) when it
/// stops; reading delivery itself is inverted, with the host forwarding
/// each platform callback to [`CompassAssistant::handle_reading`].
pub trait OrientationSource: Send {
    /// Begin delivering accelerometer and magnetometer readings
    fn start_updates(&mut self);

    /// Cease delivering readings
    fn stop_updates(&mut self);
}

/// Handle identifying a registered listener
///
/// Returned by [`CompassAssistant::add_listener`]; pass it to
/// [`CompassAssistant::remove_listener`] to detach that registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Compass heading publisher
///
/// Buffers the latest accelerometer and magnetometer vectors, fuses them
/// into an azimuth, applies declination, continuity-corrects the result
/// against the previous output and smooths it over a sliding window. Both
/// the corrected and the smoothed heading are pushed to every registered
/// listener on each processed sample.
///
/// The assistant is single-threaded by construction: every operation
/// takes `&mut self`, so Rust's ownership rules already serialize access.
/// Hosts whose platform delivers sensor callbacks on several threads wrap
/// the assistant in a `Mutex` and hold the lock for one sample at a time.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_assistant::{CompassAssistant, CompassListener, SensorReading};
///
/// struct Needle;
///
/// impl CompassListener for Needle {
///     fn on_heading(&mut self, degrees: f32) {
///         println!("heading: {degrees:.1}°");
///     }
///     fn on_smoothed_heading(&mut self, degrees: f32) {
///         println!("smoothed: {degrees:.1}°");
///     }
/// }
///
/// let mut assistant = CompassAssistant::new().unwrap();
/// assistant.add_listener(Box::new(Needle));
/// assistant.start();
/// assistant.handle_reading(SensorReading::accelerometer(Vector3::new(0.0, 0.0, 9.81), 0));
/// assistant.handle_reading(SensorReading::magnetometer(Vector3::new(0.0, 22.0, -41.0), 0));
/// assistant.stop();
/// ```
pub struct CompassAssistant {
    settings: AssistantSettings,
    /// Degrees added to every fused azimuth, fixed at construction
    declination: f32,
    running: bool,
    last_accelerometer: Vector3<f32>,
    last_magnetometer: Vector3<f32>,
    accelerometer_seen: bool,
    magnetometer_seen: bool,
    /// Previous continuity-corrected heading; `None` until the first sample
    previous_heading: Option<f32>,
    smoother: MovingAverage,
    /// Ordered and duplicate-permitting: registering a listener twice
    /// yields two notifications per event
    listeners: Vec<(ListenerId, Box<dyn CompassListener>)>,
    next_listener_id: u64,
    source: Option<Box<dyn OrientationSource>>,
}

impl CompassAssistant {
    /// Create an assistant with default settings, referenced to magnetic
    /// north (declination 0)
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_settings(AssistantSettings::default())
    }

    /// Create an assistant with the given settings, referenced to
    /// magnetic north
    ///
    /// # Errors
    /// Fails when `settings.smoothing_window` is zero.
    pub fn with_settings(settings: AssistantSettings) -> Result<Self, ConfigError> {
        let smoother = MovingAverage::new(settings.smoothing_window)?;
        Ok(Self {
            settings,
            declination: 0.0,
            running: false,
            last_accelerometer: Vector3::zeros(),
            last_magnetometer: Vector3::zeros(),
            accelerometer_seen: false,
            magnetometer_seen: false,
            previous_heading: None,
            smoother,
            listeners: Vec::new(),
            next_listener_id: 0,
            source: None,
        })
    }

    /// Create an assistant referenced to geographic north
    ///
    /// The declination for `location` at `timestamp_millis` (epoch
    /// milliseconds) is resolved exactly once, here, and applied to every
    /// fused azimuth for the assistant's lifetime.
    ///
    /// # Errors
    /// Fails when `settings.smoothing_window` is zero.
    pub fn with_location(
        settings: AssistantSettings,
        location: Location,
        timestamp_millis: i64,
        declination_source: &dyn DeclinationSource,
    ) -> Result<Self, ConfigError> {
        let mut assistant = Self::with_settings(settings)?;
        assistant.declination = declination_source.declination(location, timestamp_millis);
        debug!(
            "resolved declination {:.2}° at ({:.4}, {:.4})",
            assistant.declination, location.latitude, location.longitude
        );
        Ok(assistant)
    }

    /// Attach the platform sensor service driven by `start`/`stop`
    pub fn attach_source(&mut self, source: Box<dyn OrientationSource>) {
        self.source = Some(source);
    }

    /// Register a listener; it receives all future events until removed
    ///
    /// The registry is ordered and permits duplicates: the same listener
    /// object registered twice is notified twice per event.
    pub fn add_listener(&mut self, listener: Box<dyn CompassListener>) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a previously registered listener
    ///
    /// Takes effect for future events only. Returns `false` when the id
    /// is unknown (already removed, or never registered here).
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Start publishing headings
    ///
    /// Transitions to running, asks the attached orientation source (if
    /// any) to begin delivering readings, and notifies every listener.
    /// Calling `start` while already running is a no-op and emits no
    /// notification.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        if let Some(source) = self.source.as_mut() {
            source.start_updates();
        }
        debug!("compass assistant started");
        for (_, listener) in &mut self.listeners {
            listener.on_started();
        }
    }

    /// Stop publishing headings
    ///
    /// Transitions to stopped, detaches from the orientation source, and
    /// notifies every listener. Calling `stop` while already stopped is a
    /// no-op and emits no notification. The smoothing window and the
    /// previous heading survive a stop/start cycle; use [`reset`](Self::reset)
    /// for a cold restart.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        if let Some(source) = self.source.as_mut() {
            source.stop_updates();
        }
        debug!("compass assistant stopped");
        for (_, listener) in &mut self.listeners {
            listener.on_stopped();
        }
    }

    /// Discard the smoothing window and the previous-heading reference
    ///
    /// The next processed sample is treated as the first one again.
    pub fn reset(&mut self) {
        self.previous_heading = None;
        self.smoother.clear();
    }

    /// Feed one sensor reading from the platform callback
    ///
    /// Readings are ignored while stopped. The latest vector of each kind
    /// is buffered; nothing is published until at least one reading of
    /// each kind has arrived, after which every reading of either kind
    /// produces one heading and one smoothed heading.
    pub fn handle_reading(&mut self, reading: SensorReading) {
        if !self.running {
            trace!("reading dropped, assistant stopped");
            return;
        }

        match reading.kind {
            SensorKind::Accelerometer => {
                self.last_accelerometer = reading.vector;
                self.accelerometer_seen = true;
            }
            SensorKind::Magnetometer => {
                self.last_magnetometer = reading.vector;
                self.magnetometer_seen = true;
            }
        }

        if self.accelerometer_seen && self.magnetometer_seen {
            self.process_sample();
        }
    }

    /// Whether the assistant is currently publishing
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The declination applied to every sample, in degrees
    pub fn declination(&self) -> f32 {
        self.declination
    }

    /// The settings this assistant was built with
    pub fn settings(&self) -> AssistantSettings {
        self.settings
    }

    fn process_sample(&mut self) {
        let azimuth = (self.settings.fusion)(self.last_accelerometer, self.last_magnetometer);
        let referenced = azimuth + self.declination;

        let heading = match self.previous_heading {
            Some(previous) => continuity::normalize(previous, referenced),
            // First sample: nothing to be continuous with
            None => referenced,
        };
        self.previous_heading = Some(heading);

        trace!("azimuth {:.2}° -> heading {:.2}°", azimuth, heading);
        for (_, listener) in &mut self.listeners {
            listener.on_heading(heading);
        }

        let smoothed = self.smoother.push(heading);
        for (_, listener) in &mut self.listeners {
            listener.on_smoothed_heading(smoothed);
        }
    }
}
