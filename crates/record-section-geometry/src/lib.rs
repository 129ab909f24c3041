//! Project seismic waveforms into vertex buffers for record section plots.
//!
//! A record section stacks the waveforms of many stations on one shared
//! canvas, each placed vertically by its epicentral distance from an event.
//! This crate turns one station's raw amplitude samples into a flat buffer
//! of `(x, y, 0)` triples ready for a vertex attribute upload.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives
//! - **Pure**: The caller's samples are never mutated; every call returns a fresh buffer
//! - **User-controlled parallelism**: Lines are independent, project them however you like
//!
//! # Key functions
//!
//! - [`project_line`]: Validate input, then project a waveform onto the canvas
//! - [`project_line_unchecked`]: Project without validation (degenerate input yields NaN)
//! - [`create_record_section_position_buffer`]: Worker entry point returning only the buffer
//! - [`kilometers_to_degrees`]: Spherical approximation of epicentral distance

mod buffer;
mod error;

pub mod line;
pub mod placement;
pub mod summary;
pub mod units;

pub use buffer::PositionBuffer;
pub use error::{InvalidInput, ProjectError, ProjectResult};
pub use line::{
    RecordSectionLine, create_record_section_position_buffer, project_line,
    project_line_unchecked,
};
pub use placement::{remap_y, x_for_index, y_offset_for_degrees};
pub use summary::{SampleSummary, sort_ascending};
pub use units::kilometers_to_degrees;

use serde::Deserialize;

/// Logical height of the shared record section canvas.
///
/// A station at 0 degrees is drawn at this height, a station at 180 degrees at 0.
pub const LOGICAL_CANVAS_HEIGHT: f64 = 36_000.0;

/// Logical height a single waveform spans from its minimum to its maximum.
pub const LOGICAL_WAVEFORM_HEIGHT: f64 = 800.0;

/// Radius constant used by the distance conversion (Earth radius in meters).
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Degrees in a half circle; the antipode of the event origin.
pub const HALF_CIRCLE_DEGREES: f64 = 180.0;

/// Number of floats per vertex in a [`PositionBuffer`].
pub const FLOATS_PER_VERTEX: usize = 3;

/// Canvas calibration values.
///
/// The defaults are the values the record section display is laid out with.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Calibration {
    /// Canvas y for a station at the event origin.
    pub canvas_height: f64,
    /// Vertical extent of one waveform on the canvas.
    pub waveform_height: f64,
    /// Radius used to convert kilometers into degrees.
    pub earth_radius: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            canvas_height: LOGICAL_CANVAS_HEIGHT,
            waveform_height: LOGICAL_WAVEFORM_HEIGHT,
            earth_radius: EARTH_RADIUS,
        }
    }
}

/// Horizontal extent of the camera the line is laid out against.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    /// X coordinate of the first sample (the default camera left edge).
    pub left: f64,
    /// Horizontal distance spanned from the first to the last sample.
    pub range: f64,
}

impl Camera {
    #[must_use]
    pub const fn new(left: f64, range: f64) -> Self {
        Self { left, range }
    }

    /// X coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.range
    }
}

/// Input record for one record section line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineParams<'a> {
    /// Raw amplitude samples in time order.
    pub data: &'a [f64],
    /// Distance from the event origin in kilometers.
    pub distance: f64,
    /// Horizontal range of the camera.
    pub camera_x_range: f64,
    /// Left edge of the camera.
    pub default_camera_left: f64,
}

impl LineParams<'_> {
    /// The camera described by these parameters.
    #[must_use]
    pub fn camera(&self) -> Camera {
        Camera::new(self.default_camera_left, self.camera_x_range)
    }
}
