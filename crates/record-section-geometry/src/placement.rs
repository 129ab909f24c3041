//! Placement of a line on the shared canvas.

use crate::summary::SampleSummary;
use crate::{Calibration, Camera, HALF_CIRCLE_DEGREES};

/// Canvas y offset of a station at `degrees` from the origin.
///
/// At 0 degrees (the station sits at the origin) this is the top of the
/// canvas; at 180 degrees (the antipode) it is the bottom, 0. Linear between.
#[must_use]
pub fn y_offset_for_degrees(degrees: f64, calibration: &Calibration) -> f64 {
    calibration.canvas_height * (1.0 - degrees / HALF_CIRCLE_DEGREES)
}

/// Map a raw sample value to its canvas y coordinate.
///
/// The value is centered on the median, scaled so the full waveform spans
/// `waveform_height`, then shifted to `y_offset`.
#[must_use]
pub fn remap_y(value: f64, summary: &SampleSummary, y_offset: f64, calibration: &Calibration) -> f64 {
    ((value - summary.median) / summary.range()) * calibration.waveform_height + y_offset
}

/// X coordinate of sample `index` out of `count`, spread across the camera.
///
/// The first sample lands on `camera.left`, the last on `camera.right()`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn x_for_index(index: usize, count: usize, camera: &Camera) -> f64 {
    let last = count as f64 - 1.0;
    camera.left + (index as f64 * camera.range) / last
}
