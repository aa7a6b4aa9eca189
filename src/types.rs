//! Core types and configuration for the compass assistant

use nalgebra::Vector3;
use thiserror::Error;

use crate::heading::tilt_compensated_heading;

/// Configuration errors raised at construction time
///
/// The processing pipeline itself is infallible; the only thing that can
/// go wrong is asking for an impossible configuration, and that is
/// rejected before any sample is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The smoothing window must hold at least one value
    #[error("smoothing window capacity must be at least 1, got {capacity}")]
    InvalidWindowCapacity {
        /// The rejected capacity
        capacity: usize,
    },
}

/// The two sensor kinds the assistant consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    /// Gravity-dominated acceleration vector
    Accelerometer,
    /// Ambient magnetic field vector
    Magnetometer,
}

/// A single timestamped vector delivered by the platform sensor service
///
/// The timestamp is carried through for hosts that want it; the heading
/// pipeline itself only looks at the kind and the vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// Which physical sensor produced this vector
    pub kind: SensorKind,
    /// The 3-component reading, in the platform's units
    pub vector: Vector3<f32>,
    /// Delivery timestamp in nanoseconds, platform clock
    pub timestamp_nanos: i64,
}

impl SensorReading {
    /// Convenience constructor for an accelerometer reading
    pub fn accelerometer(vector: Vector3<f32>, timestamp_nanos: i64) -> Self {
        Self {
            kind: SensorKind::Accelerometer,
            vector,
            timestamp_nanos,
        }
    }

    /// Convenience constructor for a magnetometer reading
    pub fn magnetometer(vector: Vector3<f32>, timestamp_nanos: i64) -> Self {
        Self {
            kind: SensorKind::Magnetometer,
            vector,
            timestamp_nanos,
        }
    }
}

/// Compass assistant settings
///
/// # Example
/// ```
/// use compass_assistant::AssistantSettings;
///
/// let settings = AssistantSettings {
///     smoothing_window: 20, // smoother needle, slower response
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AssistantSettings {
    /// Number of headings averaged for the smoothed output stream
    ///
    /// Larger windows damp noise harder but lag behind device rotation.
    /// Must be at least 1.
    pub smoothing_window: usize,
    /// Fusion function turning the two buffered vectors into a raw
    /// azimuth in degrees
    ///
    /// Defaults to the crate's tilt-compensated compass. Hosts whose
    /// platform already provides an orientation computation can point
    /// this at their own function.
    pub fusion: fn(Vector3<f32>, Vector3<f32>) -> f32,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            smoothing_window: 10,
            fusion: tilt_compensated_heading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AssistantSettings::default();
        assert_eq!(settings.smoothing_window, 10);
    }

    #[test]
    fn test_config_error_message() {
        let error = ConfigError::InvalidWindowCapacity { capacity: 0 };
        assert_eq!(
            error.to_string(),
            "smoothing window capacity must be at least 1, got 0"
        );
    }
}
