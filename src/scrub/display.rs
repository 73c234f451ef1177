//! Values the visual layer needs to draw the wheel and time labels.

/// Inset between the wheel edge and the knob centre, in the same units as `size`.
const KNOB_INSET: f64 = 12.0;

/// Smallest duration used when computing a progress fraction.
const MIN_PROGRESS_DURATION: f64 = 0.001;

/// Format a time for the wheel label as zero-padded `MM:SS`, rounding to the nearest
/// second.
///
/// Negative times render as `00:00`, as do NaN and infinite values.
pub fn format_time(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Format a time for a recording list row as `M:SS`, with unpadded minutes.
///
/// Negative, NaN and infinite times render as `0:00`.
pub fn format_list_time(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    format!("{}:{:02}", total / 60, total % 60)
}

fn whole_seconds(seconds: f64) -> u64 {
    if !seconds.is_finite() {
        return 0;
    }
    seconds.round().max(0.0) as u64
}

/// Centre of the knob on a square wheel of side `size`, rotated by `angle` radians.
pub fn knob_position(size: f64, angle: f64) -> (f64, f64) {
    let centre = size / 2.0;
    let radius = centre - KNOB_INSET;
    (centre + angle.cos() * radius, centre + angle.sin() * radius)
}

/// Played fraction of an item, in `[0, 1]`.
pub fn progress_fraction(current: f64, duration: f64) -> f64 {
    let fraction = current / duration.max(MIN_PROGRESS_DURATION);
    if fraction.is_nan() {
        return 0.0;
    }
    fraction.clamp(0.0, 1.0)
}
