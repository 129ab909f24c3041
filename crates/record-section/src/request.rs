//! Serialized line requests.

use std::path::Path;

use record_section_geometry::{
    Calibration, Camera, LineParams, PositionBuffer, RecordSectionLine,
    create_record_section_position_buffer, project_line,
};
use serde::Deserialize;

use crate::Result;

/// Input record for one line, as the UI posts it to the rendering worker.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    /// Raw amplitude samples in time order.
    pub data: Vec<f64>,
    /// Distance from the event origin in kilometers.
    pub distance: f64,
    pub camera_x_range: f64,
    pub default_camera_left: f64,
}

impl LineRequest {
    #[must_use]
    pub fn params(&self) -> LineParams<'_> {
        LineParams {
            data: &self.data,
            distance: self.distance,
            camera_x_range: self.camera_x_range,
            default_camera_left: self.default_camera_left,
        }
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.params().camera()
    }

    /// Validate and project this line.
    pub fn project(&self, calibration: &Calibration) -> Result<RecordSectionLine> {
        let line = project_line(&self.data, self.distance, &self.camera(), calibration)
            .inspect_err(|e| tracing::warn!(distance = self.distance, "rejected line request: {e}"))?;
        tracing::debug!(
            samples = self.data.len(),
            degrees = line.degrees,
            y_offset = line.y_offset,
            "projected line request"
        );
        Ok(line)
    }

    /// Project without validation, exactly as the worker does.
    #[must_use]
    pub fn position_buffer(&self) -> PositionBuffer {
        create_record_section_position_buffer(&self.params())
    }
}

/// A set of line requests sharing one calibration.
///
/// Accepts either a bare JSON array of requests or an object with `lines`
/// and an optional `calibration`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "BatchRepr")]
pub struct LineBatch {
    pub calibration: Calibration,
    pub lines: Vec<LineRequest>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BatchRepr {
    Lines(Vec<LineRequest>),
    Batch {
        #[serde(default)]
        calibration: Calibration,
        lines: Vec<LineRequest>,
    },
}

impl From<BatchRepr> for LineBatch {
    fn from(repr: BatchRepr) -> Self {
        match repr {
            BatchRepr::Lines(lines) => Self {
                calibration: Calibration::default(),
                lines,
            },
            BatchRepr::Batch { calibration, lines } => Self { calibration, lines },
        }
    }
}

impl LineBatch {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Project every line, keeping per-line results.
    #[must_use]
    pub fn project_all(&self) -> Vec<Result<RecordSectionLine>> {
        self.lines
            .iter()
            .map(|request| request.project(&self.calibration))
            .collect()
    }
}
