//! Simulate a wheel gesture against a playback timeline.

use anyhow::anyhow;

use crate::config::{HofetchConfig, ScrubberConfig};
use crate::playback::{TickLatch, Timeline};
use crate::scrub::{
    format_list_time, format_time, progress_fraction, tick_index, PlaybackHost, ScrubSession,
};

/// Optional overrides for the configured scrubber settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrubOverrides {
    pub seconds_per_turn: Option<f64>,
    pub dead_zone: Option<f64>,
    pub adjust_step: Option<f64>,
}

impl ScrubOverrides {
    /// Builds a session from `config` with these overrides applied.
    ///
    /// # Errors
    /// - If the resulting settings are out of range
    pub fn session(&self, config: &ScrubberConfig) -> anyhow::Result<ScrubSession> {
        let merged = ScrubberConfig {
            seconds_per_turn: self.seconds_per_turn.unwrap_or(config.seconds_per_turn),
            dead_zone_radians: self.dead_zone.unwrap_or(config.dead_zone_radians),
            adjust_step_seconds: self.adjust_step.unwrap_or(config.adjust_step_seconds),
        };
        merged.session().map_err(|e| anyhow!("Invalid scrubber settings: {e}"))
    }
}

/// One line of gesture output.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrubStep {
    pub angle: f64,
    pub tick_index: u32,
    /// Tick index reported to feedback on this update
    pub fired: Option<u32>,
    pub target: f64,
    /// Whether this is the release of the gesture
    pub released: bool,
}

impl ScrubStep {
    fn render(&self) -> String {
        let label = if self.released { "release" } else { "update" };
        let marker = match self.fired {
            Some(index) => format!("  tick #{index}"),
            None => String::new(),
        };
        format!(
            "{label:<7} {:>9.4} rad  quarter {:>3}  {} ({:.3}s){marker}",
            self.angle,
            self.tick_index,
            format_time(self.target),
            self.target,
        )
    }
}

/// Feeds `angles` to `session` as one gesture; the last angle is also the release.
///
/// # Errors
/// - If `angles` is empty or contains a non-finite value
pub fn simulate_gesture(
    session: &mut ScrubSession,
    timeline: &mut Timeline,
    angles: &[f64],
) -> anyhow::Result<Vec<ScrubStep>> {
    let Some(&last) = angles.last() else {
        return Err(anyhow!("At least one angle is required"));
    };
    if let Some(bad) = angles.iter().find(|a| !a.is_finite()) {
        return Err(anyhow!("Angles must be finite, got {bad}"));
    }

    let mut feedback = TickLatch::default();
    let mut steps = Vec::with_capacity(angles.len() + 1);

    for &angle in angles {
        let target = session.on_changed(angle, timeline, &mut feedback);
        steps.push(ScrubStep {
            angle,
            tick_index: tick_index(angle),
            fired: feedback.take(),
            target,
            released: false,
        });
    }

    let target = session.on_ended(last, timeline);
    steps.push(ScrubStep {
        angle: last,
        tick_index: tick_index(last),
        fired: None,
        target,
        released: true,
    });

    Ok(steps)
}

/// Runs a simulated gesture and prints one line per update.
///
/// # Errors
/// - If the config cannot be loaded or the settings are invalid
/// - If the timeline or angles are invalid
pub fn handle_scrub(
    duration: f64,
    current: f64,
    overrides: ScrubOverrides,
    angles: &[f64],
    degrees: bool,
) -> anyhow::Result<()> {
    let config = HofetchConfig::load()?;
    let mut session = overrides.session(&config.scrubber)?;
    let mut timeline = Timeline::new(current, duration)?;

    let angles: Vec<f64> = if degrees {
        angles.iter().map(|a| a.to_radians()).collect()
    } else {
        angles.to_vec()
    };

    tracing::info!(
        "Scrub simulation: {} updates from {:.3}s over {:.3}s",
        angles.len(),
        timeline.current_time(),
        duration
    );

    let steps = simulate_gesture(&mut session, &mut timeline, &angles)?;
    for step in &steps {
        println!("{}", step.render());
    }
    println!(
        "position {} / {} ({:.0}%)",
        format_list_time(timeline.current_time()),
        format_list_time(timeline.duration()),
        progress_fraction(timeline.current_time(), timeline.duration()) * 100.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_overrides_replace_config_values() {
        let config = ScrubberConfig::default();
        let session = ScrubOverrides {
            seconds_per_turn: Some(60.0),
            ..Default::default()
        }
        .session(&config)
        .unwrap();
        assert_eq!(session.seconds_per_turn(), 60.0);
        assert_eq!(session.dead_zone(), config.dead_zone_radians);

        let invalid = ScrubOverrides {
            dead_zone: Some(-1.0),
            ..Default::default()
        };
        assert!(invalid.session(&config).is_err());
    }

    #[test]
    fn test_simulate_gesture_steps() {
        let mut session = ScrubSession::new(12.0).unwrap();
        let mut timeline = Timeline::new(10.0, 60.0).unwrap();

        let steps = simulate_gesture(&mut session, &mut timeline, &[0.05, PI * 0.6, PI]).unwrap();

        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].target, 10.0);
        assert_eq!(steps[0].fired, None);
        assert_eq!(steps[1].fired, Some(1));
        assert_eq!(steps[2].fired, Some(2));
        assert!(steps[3].released);
        assert!((steps[3].target - 16.0).abs() < 1e-9);
        assert!((timeline.current_time() - 16.0).abs() < 1e-9);
        assert!(!session.is_active());
    }

    #[test]
    fn test_simulate_gesture_rejects_bad_input() {
        let mut session = ScrubSession::default();
        let mut timeline = Timeline::new(0.0, 10.0).unwrap();

        assert!(simulate_gesture(&mut session, &mut timeline, &[]).is_err());
        assert!(simulate_gesture(&mut session, &mut timeline, &[1.0, f64::NAN]).is_err());
        assert!(!session.is_active());
    }

    #[test]
    fn test_step_render() {
        let step = ScrubStep {
            angle: PI,
            tick_index: 2,
            fired: Some(2),
            target: 66.0,
            released: false,
        };
        assert_eq!(
            step.render(),
            "update     3.1416 rad  quarter   2  01:06 (66.000s)  tick #2"
        );
    }
}
