//! Step playback forward or back, as the wheel's accessibility action does.

use crate::config::HofetchConfig;
use crate::playback::Timeline;
use crate::scrub::{format_time, AdjustDirection};

use super::scrub::ScrubOverrides;

/// Prints the position after one adjust step.
///
/// # Errors
/// - If the config cannot be loaded or the step is invalid
/// - If the timeline is invalid
pub fn handle_seek(
    duration: f64,
    current: f64,
    direction: AdjustDirection,
    step: Option<f64>,
) -> anyhow::Result<()> {
    let config = HofetchConfig::load()?;
    let session = ScrubOverrides {
        adjust_step: step,
        ..Default::default()
    }
    .session(&config.scrubber)?;
    let mut timeline = Timeline::new(current, duration)?;

    if let Some(target) = session.adjust(direction, &mut timeline) {
        tracing::info!("Seek {:?} by {}s to {:.3}s", direction, session.adjust_step(), target);
        println!("{} ({:.3}s)", format_time(target), target);
    }

    Ok(())
}
