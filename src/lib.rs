//! Compass Assistant - stable compass headings for rotating UI indicators
//!
//! Turns a stream of raw orientation readings (accelerometer plus
//! magnetometer vectors) into a heading signal a UI can animate directly.
//! Raw azimuths wrap at the 0°/360° boundary, which makes a naively
//! animated needle spin the long way round; this crate corrects each
//! sample into a continuous signal whose consecutive values never differ
//! by more than 180°, and additionally smooths it over a sliding window
//! without reintroducing wrap artifacts.
//!
//! # Features
//!
//! - Continuity correction across the 0°/360° boundary
//! - Sliding-window moving average over the corrected signal
//! - Listener fan-out with lifecycle (started/stopped) events
//! - Built-in tilt-compensated fusion of accelerometer and magnetometer
//!   vectors, replaceable with a platform-provided function
//! - Optional magnetic declination offset for geographic north
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::Vector3;
//! use compass_assistant::{CompassAssistant, CompassListener, SensorReading};
//!
//! struct Needle;
//!
//! impl CompassListener for Needle {
//!     fn on_heading(&mut self, degrees: f32) {
//!         // rotate the needle to -degrees
//!     }
//!     fn on_smoothed_heading(&mut self, degrees: f32) {
//!         // or drive it from the smoothed stream instead
//!     }
//! }
//!
//! let mut assistant = CompassAssistant::new().unwrap();
//! assistant.add_listener(Box::new(Needle));
//! assistant.start();
//!
//! // forward each platform sensor callback:
//! assistant.handle_reading(SensorReading::accelerometer(Vector3::new(0.0, 0.0, 9.81), 0));
//! assistant.handle_reading(SensorReading::magnetometer(Vector3::new(0.0, 22.0, -41.0), 0));
//!
//! assistant.stop();
//! ```

mod assistant;
pub mod continuity;
pub mod declination;
pub mod heading;
mod smoothing;
mod types;

// Re-export all public types and functions
pub use assistant::{CompassAssistant, CompassListener, ListenerId, OrientationSource};
pub use declination::{DeclinationSource, FixedDeclination, Location};
pub use heading::tilt_compensated_heading;
pub use smoothing::MovingAverage;
pub use types::{AssistantSettings, ConfigError, SensorKind, SensorReading};
