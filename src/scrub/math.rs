//! Angle-to-time arithmetic for the wheel scrubber.
//!
//! Converts accumulated rotation (radians) into signed playback offsets and clamps
//! candidate times into the playable range. Every function here is pure: no state,
//! no I/O, safe to call from any thread.

use std::f64::consts::{PI, TAU};

/// Rotations smaller than this are treated as jitter and produce no movement.
pub const DEAD_ZONE_RADIANS: f64 = PI / 30.0;

/// One feedback tick is emitted per quarter turn of accumulated rotation.
pub const QUARTER_TURN_RADIANS: f64 = PI / 2.0;

/// Playback seconds covered by one full turn of the wheel.
pub const DEFAULT_SECONDS_PER_TURN: f64 = 12.0;

/// Maps a rotation to a signed time offset.
///
/// One full turn (2π) equals `seconds_per_turn` seconds. The mapping is linear and
/// preserves direction. `seconds_per_turn` must be positive; the caller validates it.
#[inline]
pub fn angle_to_delta_seconds(delta_angle_radians: f64, seconds_per_turn: f64) -> f64 {
    (delta_angle_radians / TAU) * seconds_per_turn
}

/// Like [`angle_to_delta_seconds`], but returns exactly `0.0` while the rotation
/// magnitude is strictly below `dead_zone`.
///
/// The dead zone is a gate, not an offset: once crossed, the full angle is mapped.
#[inline]
pub fn angle_to_delta_seconds_considering_dead_zone(
    delta_angle_radians: f64,
    seconds_per_turn: f64,
    dead_zone: f64,
) -> f64 {
    if delta_angle_radians.abs() < dead_zone {
        return 0.0;
    }
    angle_to_delta_seconds(delta_angle_radians, seconds_per_turn)
}

/// Dead-zone mapping using [`DEAD_ZONE_RADIANS`].
#[inline]
pub fn angle_to_delta_seconds_outside_default_dead_zone(
    delta_angle_radians: f64,
    seconds_per_turn: f64,
) -> f64 {
    angle_to_delta_seconds_considering_dead_zone(
        delta_angle_radians,
        seconds_per_turn,
        DEAD_ZONE_RADIANS,
    )
}

/// Applies `delta` to `current` and clamps the result into `[0, duration]`.
#[inline]
pub fn clamp_time(current: f64, delta: f64, duration: f64) -> f64 {
    let target = current + delta;
    if target < 0.0 {
        return 0.0;
    }
    if target > duration {
        return duration;
    }
    target
}

/// Number of whole quarter turns in the rotation magnitude.
///
/// Non-finite angles count as no rotation.
#[inline]
pub fn tick_index(angle: f64) -> u32 {
    if !angle.is_finite() {
        return 0;
    }
    // `as` saturates for magnitudes beyond u32::MAX quarter turns
    (angle.abs() / QUARTER_TURN_RADIANS).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPT: f64 = 12.0;
    const EPS: f64 = 1e-9;

    #[test]
    fn test_angle_to_seconds_basic() {
        assert_eq!(angle_to_delta_seconds(0.0, SPT), 0.0);
        assert!((angle_to_delta_seconds(PI / 2.0, SPT) - 3.0).abs() < EPS);
        assert!((angle_to_delta_seconds(PI, SPT) - 6.0).abs() < EPS);
        assert!((angle_to_delta_seconds(TAU, SPT) - 12.0).abs() < EPS);
        assert!((angle_to_delta_seconds(-PI, SPT) + 6.0).abs() < EPS);
    }

    #[test]
    fn test_angle_to_seconds_scales_with_seconds_per_turn() {
        assert!((angle_to_delta_seconds(TAU, 30.0) - 30.0).abs() < EPS);
        assert!((angle_to_delta_seconds(3.0 * TAU, 2.5) - 7.5).abs() < EPS);
    }

    #[test]
    fn test_dead_zone_behavior() {
        let dz = DEAD_ZONE_RADIANS;

        let below = angle_to_delta_seconds_considering_dead_zone(dz * 0.99, SPT, dz);
        assert_eq!(below, 0.0);

        let above = angle_to_delta_seconds_considering_dead_zone(dz * 1.01, SPT, dz);
        assert_ne!(above, 0.0);
        assert_eq!(above, angle_to_delta_seconds(dz * 1.01, SPT));

        let negative_below = angle_to_delta_seconds_considering_dead_zone(-dz * 0.5, SPT, dz);
        assert_eq!(negative_below, 0.0);
    }

    #[test]
    fn test_dead_zone_boundary_maps_linearly() {
        let dz = DEAD_ZONE_RADIANS;
        let at = angle_to_delta_seconds_considering_dead_zone(dz, SPT, dz);
        assert_eq!(at, angle_to_delta_seconds(dz, SPT));
        assert!(at > 0.0);
    }

    #[test]
    fn test_zero_dead_zone_is_plain_mapping() {
        assert_eq!(angle_to_delta_seconds_considering_dead_zone(0.0, SPT, 0.0), 0.0);
        assert_eq!(
            angle_to_delta_seconds_considering_dead_zone(0.001, SPT, 0.0),
            angle_to_delta_seconds(0.001, SPT)
        );
    }

    #[test]
    fn test_default_dead_zone_wrapper() {
        assert_eq!(
            angle_to_delta_seconds_outside_default_dead_zone(DEAD_ZONE_RADIANS * 0.9, SPT),
            0.0
        );
        assert_eq!(
            angle_to_delta_seconds_outside_default_dead_zone(PI, SPT),
            angle_to_delta_seconds(PI, SPT)
        );
    }

    #[test]
    fn test_clamp_behavior() {
        assert_eq!(clamp_time(50.0, -60.0, 100.0), 0.0);
        assert_eq!(clamp_time(50.0, 10.0, 100.0), 60.0);
        assert_eq!(clamp_time(50.0, 100.0, 100.0), 100.0);
    }

    #[test]
    fn test_clamp_zero_duration() {
        assert_eq!(clamp_time(0.0, 5.0, 0.0), 0.0);
        assert_eq!(clamp_time(0.0, -5.0, 0.0), 0.0);
    }

    #[test]
    fn test_tick_index_quarter_turns() {
        assert_eq!(tick_index(0.0), 0);
        assert_eq!(tick_index(QUARTER_TURN_RADIANS * 0.99), 0);
        assert_eq!(tick_index(QUARTER_TURN_RADIANS * 1.01), 1);
        assert_eq!(tick_index(PI * 1.01), 2);
        assert_eq!(tick_index(-TAU * 1.01), 4);
        assert_eq!(tick_index(f64::NAN), 0);
        assert_eq!(tick_index(f64::INFINITY), 0);
    }
}
