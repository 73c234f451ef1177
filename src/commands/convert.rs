//! Convert a single wheel angle into a playback offset.

use crate::config::HofetchConfig;
use crate::scrub::{
    angle_to_delta_seconds, angle_to_delta_seconds_considering_dead_zone, tick_index,
};

use super::scrub::ScrubOverrides;

/// Offset and quarter-turn count for one angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub radians: f64,
    pub delta_seconds: f64,
    pub tick_index: u32,
}

/// Converts `radians` with the given mapping; `dead_zone` of `None` disables the gate.
pub fn convert_angle(radians: f64, seconds_per_turn: f64, dead_zone: Option<f64>) -> Conversion {
    let delta_seconds = match dead_zone {
        Some(zone) => angle_to_delta_seconds_considering_dead_zone(radians, seconds_per_turn, zone),
        None => angle_to_delta_seconds(radians, seconds_per_turn),
    };

    Conversion {
        radians,
        delta_seconds,
        tick_index: tick_index(radians),
    }
}

/// Prints the offset for one angle.
///
/// # Errors
/// - If the config cannot be loaded or the settings are invalid
/// - If the angle is not finite
pub fn handle_convert(
    angle: f64,
    degrees: bool,
    overrides: ScrubOverrides,
    ignore_dead_zone: bool,
) -> anyhow::Result<()> {
    if !angle.is_finite() {
        return Err(anyhow::anyhow!("Angle must be finite, got {angle}"));
    }

    let config = HofetchConfig::load()?;
    let session = overrides.session(&config.scrubber)?;
    let radians = if degrees { angle.to_radians() } else { angle };
    let dead_zone = (!ignore_dead_zone).then_some(session.dead_zone());

    let conversion = convert_angle(radians, session.seconds_per_turn(), dead_zone);
    tracing::debug!("Converted {:?}", conversion);

    println!(
        "{:.4} rad -> {:+.3}s ({} quarter turns)",
        conversion.radians, conversion.delta_seconds, conversion.tick_index
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrub::DEAD_ZONE_RADIANS;

    #[test]
    fn test_convert_angle() {
        let half = convert_angle(std::f64::consts::PI, 12.0, Some(DEAD_ZONE_RADIANS));
        assert!((half.delta_seconds - 6.0).abs() < 1e-9);
        assert_eq!(half.tick_index, 2);

        let jitter = convert_angle(0.05, 12.0, Some(DEAD_ZONE_RADIANS));
        assert_eq!(jitter.delta_seconds, 0.0);

        let ungated = convert_angle(0.05, 12.0, None);
        assert_eq!(ungated.delta_seconds, angle_to_delta_seconds(0.05, 12.0));
    }

    #[test]
    fn test_convert_degrees_input() {
        let quarter = convert_angle(90f64.to_radians(), 12.0, None);
        assert!((quarter.delta_seconds - 3.0).abs() < 1e-9);
    }
}
