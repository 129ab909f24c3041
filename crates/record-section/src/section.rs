//! Stations stacked on one record section canvas.

use glam::Vec3;
use record_section_geometry::{
    Calibration, Camera, PositionBuffer, RecordSectionLine, project_line,
};

use crate::{Error, Result};

/// One station's projected waveform.
#[derive(Debug, Clone, PartialEq)]
pub struct StationLine {
    pub name: String,
    pub distance_km: f64,
    pub line: RecordSectionLine,
}

/// Waveforms of many stations laid out against one camera and calibration.
///
/// Stations are kept ordered by distance from the event origin, nearest
/// first. Stations at equal distances keep the order they were added in.
#[derive(Debug, Clone)]
pub struct RecordSection {
    camera: Camera,
    calibration: Calibration,
    stations: Vec<StationLine>,
}

impl RecordSection {
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        Self::with_calibration(camera, Calibration::default())
    }

    #[must_use]
    pub fn with_calibration(camera: Camera, calibration: Calibration) -> Self {
        Self {
            camera,
            calibration,
            stations: Vec::new(),
        }
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn calibration(&self) -> Calibration {
        self.calibration
    }

    /// Project a station's samples and add the line to the section.
    pub fn add_station(
        &mut self,
        name: impl Into<String>,
        distance_km: f64,
        samples: &[f64],
    ) -> Result<&StationLine> {
        let name = name.into();
        if self.station(&name).is_some() {
            return Err(Error::DuplicateStation(name));
        }

        let line = project_line(samples, distance_km, &self.camera, &self.calibration)
            .inspect_err(|e| tracing::warn!(station = %name, "rejected station waveform: {e}"))?;
        tracing::debug!(
            station = %name,
            distance_km,
            degrees = line.degrees,
            vertices = line.vertex_count(),
            "added station line"
        );

        let index = self
            .stations
            .partition_point(|station| station.distance_km <= distance_km);
        self.stations.insert(
            index,
            StationLine {
                name,
                distance_km,
                line,
            },
        );
        Ok(&self.stations[index])
    }

    /// Stations ordered by distance, nearest first.
    #[must_use]
    pub fn stations(&self) -> &[StationLine] {
        &self.stations
    }

    #[must_use]
    pub fn station(&self, name: &str) -> Option<&StationLine> {
        self.stations.iter().find(|station| station.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Vertical segment marking a signal detection on a station's line.
    ///
    /// `time_fraction` is the detection time as a fraction of the camera
    /// range (0 at the left edge, 1 at the right). The segment is centered
    /// on the line's median and extends `half_height` above and below it.
    #[allow(clippy::cast_possible_truncation)]
    pub fn detection_marker(
        &self,
        name: &str,
        time_fraction: f64,
        half_height: f64,
    ) -> Result<PositionBuffer> {
        let station = self
            .station(name)
            .ok_or_else(|| Error::UnknownStation(name.to_owned()))?;

        let x = (self.camera.left + time_fraction * self.camera.range) as f32;
        let center = station.line.corrected_median;
        Ok([
            Vec3::new(x, (center - half_height) as f32, 0.0),
            Vec3::new(x, (center + half_height) as f32, 0.0),
        ]
        .into_iter()
        .collect())
    }

    /// Every station's vertices in one buffer, nearest station first.
    #[must_use]
    pub fn merged_positions(&self) -> PositionBuffer {
        let vertices = self.stations.iter().map(|s| s.line.vertex_count()).sum();
        let mut merged = PositionBuffer::with_vertex_capacity(vertices);
        for station in &self.stations {
            merged.extend_from(&station.line.positions);
        }
        merged
    }
}
