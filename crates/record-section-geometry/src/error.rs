//! Projection errors.

use thiserror::Error;

/// Result alias for checked projection.
pub type ProjectResult<T> = Result<T, ProjectError>;

/// Error returned by [`crate::project_line`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProjectError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Precondition that a waveform failed before projection.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInput {
    #[error("waveform has no samples")]
    Empty,
    #[error("waveform has {count} sample(s), at least 2 are required")]
    TooFewSamples { count: usize },
    #[error("waveform is constant (min == max == {value})")]
    ZeroRange { value: f64 },
    #[error("sample {index} is not finite ({value})")]
    NonFiniteSample { index: usize, value: f64 },
    #[error("distance must be a finite, non-negative number of kilometers, got {0}")]
    Distance(f64),
    #[error("camera left ({left}) and range ({range}) must be finite")]
    Camera { left: f64, range: f64 },
    #[error(
        "calibration needs a positive finite earth radius and finite heights, got \
         radius {earth_radius}, canvas {canvas_height}, waveform {waveform_height}"
    )]
    Calibration {
        earth_radius: f64,
        canvas_height: f64,
        waveform_height: f64,
    },
    #[error("waveform range from {min} to {max} overflows")]
    RangeOverflow { min: f64, max: f64 },
    #[error("vertex {vertex} does not fit on the canvas as a finite f32 coordinate")]
    NonFiniteOutput { vertex: usize },
}
