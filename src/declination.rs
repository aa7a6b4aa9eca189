//! Magnetic declination lookup for geographic north correction

/// A geographic position used to resolve magnetic declination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees, positive north
    pub latitude: f32,
    /// Longitude in degrees, positive east
    pub longitude: f32,
    /// Altitude above sea level in meters
    pub altitude: f32,
}

impl Location {
    /// Create a location from latitude, longitude and altitude
    pub fn new(latitude: f32, longitude: f32, altitude: f32) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
}

/// Source of magnetic declination values
///
/// Declination is the angle between magnetic and geographic north at a
/// given place and time. The geomagnetic model that computes it is a
/// platform service, so this crate only defines the seam: the assistant
/// queries the source exactly once at construction and applies the
/// returned offset to every sample for its lifetime.
pub trait DeclinationSource {
    /// Declination in degrees at `location` and the given epoch time
    ///
    /// Positive values mean magnetic north lies east of geographic north.
    fn declination(&self, location: Location, timestamp_millis: i64) -> f32;
}

/// A declination source returning a constant offset
///
/// For hosts that already know the local declination, and for tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDeclination(pub f32);

impl DeclinationSource for FixedDeclination {
    fn declination(&self, _location: Location, _timestamp_millis: i64) -> f32 {
        self.0
    }
}
