//! Tilt-compensated azimuth from accelerometer and magnetometer vectors

use nalgebra::Vector3;

const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Compute a tilt-compensated magnetic azimuth in degrees
///
/// Fuses the latest accelerometer reading (gravity reaction, pointing away
/// from the Earth) and magnetometer reading into a single compass azimuth:
/// degrees clockwise from magnetic north, in the range (-180°, 180°].
///
/// Cross products construct horizontal east and north reference vectors
/// that are perpendicular to gravity, so the result stays correct while
/// the device is pitched or rolled. Vectors are expected in the usual
/// handheld device frame (X right, Y towards the top of the screen, Z out
/// of the screen); units cancel and do not matter.
///
/// This is the default fusion function of
/// [`AssistantSettings`](crate::AssistantSettings); hosts with a
/// platform-provided orientation computation can substitute their own.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_assistant::heading::tilt_compensated_heading;
///
/// let accel = Vector3::new(0.0, 0.0, 9.81); // device lying flat
/// let mag = Vector3::new(0.0, 22.0, -41.0); // field pointing north and down
/// let azimuth = tilt_compensated_heading(accel, mag);
/// assert!(azimuth.abs() < 1.0); // screen top faces north
/// ```
pub fn tilt_compensated_heading(accelerometer: Vector3<f32>, magnetometer: Vector3<f32>) -> f32 {
    // Horizontal east vector: mag × up
    let east = safe_normalize(magnetometer.cross(&accelerometer));

    // Horizontal north vector: up × east
    let north = safe_normalize(accelerometer.cross(&east));

    // Azimuth of the device Y axis, clockwise from north
    east.y.atan2(north.y) * RAD_TO_DEG
}

/// Normalize a vector, returning the zero vector for zero input
fn safe_normalize(vector: Vector3<f32>) -> Vector3<f32> {
    let magnitude_squared = vector.magnitude_squared();

    if magnitude_squared == 0.0 {
        return Vector3::zeros();
    }

    vector / magnitude_squared.sqrt()
}
