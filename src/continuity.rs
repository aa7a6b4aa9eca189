//! Wrap-around continuity correction for compass headings

/// Normalize a raw azimuth against the previous normalized output
///
/// Raw azimuths wrap at the 0°/360° (or ±180°) boundary, so a compass
/// needle animated directly from them spins the long way round whenever
/// the heading crosses north. This function rewrites the new sample into
/// the same "unwound" frame as the previous output, so consecutive values
/// never differ by more than 180° and a UI can interpolate between them
/// along the short arc.
///
/// If `previous` and `raw` are more than 180° apart, the raw value is
/// assumed to have wrapped relative to `previous` and is shifted by one
/// full turn towards it: +360° when `previous >= 0`, −360° otherwise.
/// Shifting by whole turns never changes the physical angle, so the
/// output always equals `raw` modulo 360.
///
/// The correction is a single-step heuristic: it assumes consecutive
/// samples are less than ~180° apart in true angular travel. At typical
/// sensor delivery rates that holds comfortably, but it is an assumption,
/// not a guarantee.
///
/// The caller owns the state. Store the returned value and pass it as
/// `previous` on the next call; the very first sample has no reference to
/// compare against and must bypass this function entirely.
///
/// # Arguments
/// * `previous` - The last value returned by this function
/// * `raw` - The new raw azimuth in degrees
///
/// # Returns
/// The continuity-corrected azimuth in degrees, within 180° of `previous`
///
/// # Example
/// ```
/// use compass_assistant::continuity::normalize;
///
/// // Needle at 350° sees a raw 5°: the short arc is forward through north.
/// assert_eq!(normalize(350.0, 5.0), 365.0);
///
/// // No wrap, value passes through unchanged.
/// assert_eq!(normalize(90.0, 100.0), 100.0);
/// ```
pub fn normalize(previous: f32, raw: f32) -> f32 {
    let difference = (previous - raw).abs();
    if difference > 180.0 {
        raw + if previous >= 0.0 { 360.0 } else { -360.0 }
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_passthrough_when_no_wrap() {
        assert_eq!(normalize(10.0, 20.0), 20.0);
        assert_eq!(normalize(20.0, 10.0), 10.0);
        assert_eq!(normalize(0.0, 180.0), 180.0);
        assert_eq!(normalize(-90.0, 45.0), 45.0);
    }

    #[test]
    fn test_wrap_forward_through_north() {
        // 350° -> raw 5° crossed north going clockwise
        assert_eq!(normalize(350.0, 5.0), 365.0);
        assert_eq!(normalize(359.0, 1.0), 361.0);
    }

    #[test]
    fn test_wrap_backward_through_north() {
        // Previous is negative, correction goes the other way
        assert_eq!(normalize(-170.0, 175.0), -185.0);
        assert_eq!(normalize(-350.0, -5.0), -365.0);
    }

    #[test]
    fn test_unwound_previous_keeps_correcting() {
        // After one wrap the previous value lives outside [0, 360);
        // corrections must still track it
        assert_eq!(normalize(365.0, 10.0), 370.0);
        assert_eq!(normalize(370.0, 355.0), 355.0);
    }

    #[test]
    fn test_consecutive_outputs_within_180() {
        let raws = [350.0, 5.0, 20.0, 350.0, 340.0, 10.0, 180.0, 2.0];
        let mut previous = raws[0];
        for &raw in &raws[1..] {
            let normalized = normalize(previous, raw);
            assert!(
                (normalized - previous).abs() <= 180.0,
                "jump from {} to {} exceeds 180°",
                previous,
                normalized
            );
            previous = normalized;
        }
    }

    #[test]
    fn test_modulo_equivalence() {
        // Correction shifts by whole turns only, never the physical angle
        let raws = [359.0, 3.0, 181.0, 2.0, 358.0, 175.0];
        let mut previous = raws[0];
        for &raw in &raws[1..] {
            let normalized = normalize(previous, raw);
            let wrapped = normalized.rem_euclid(360.0);
            let expected = raw.rem_euclid(360.0);
            assert!(
                (wrapped - expected).abs() < EPSILON
                    || (wrapped - expected).abs() > 360.0 - EPSILON,
                "normalized {} is not {} mod 360",
                normalized,
                raw
            );
            previous = normalized;
        }
    }

    #[test]
    fn test_boundary_difference_exactly_180() {
        // 180° apart is ambiguous; the correction only fires strictly above
        assert_eq!(normalize(0.0, 180.0), 180.0);
        assert_eq!(normalize(0.0, -180.0), -180.0);
    }
}
