//! Waveform to record section line projection.

use crate::error::{InvalidInput, ProjectResult};
use crate::placement::{remap_y, x_for_index, y_offset_for_degrees};
use crate::summary::{SampleSummary, sort_ascending};
use crate::units::kilometers_to_degrees_with_radius;
use crate::{Calibration, Camera, LineParams, PositionBuffer};

/// A waveform projected onto the record section canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSectionLine {
    /// One `(x, y, 0)` vertex per input sample, in sample order.
    pub positions: PositionBuffer,
    /// Epicentral distance in degrees.
    pub degrees: f64,
    /// Canvas y of the station's row; the median sample is drawn here.
    pub y_offset: f64,
    /// Raw order statistics of the samples.
    pub summary: SampleSummary,
    /// Canvas y of the smallest sample.
    pub corrected_min: f64,
    /// Canvas y of the median sample. Signal detection markers are centered on it.
    pub corrected_median: f64,
    /// Canvas y of the largest sample.
    pub corrected_max: f64,
}

impl RecordSectionLine {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.vertex_count()
    }

    /// Whether every coordinate in the buffer is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.positions.as_slice().iter().all(|v| v.is_finite())
    }
}

/// Project `samples` without checking them first.
///
/// Degenerate input is not rejected: a constant waveform divides by a zero
/// range and a single sample divides by a zero sample span, so both produce
/// NaN or infinite coordinates. An empty waveform yields an empty buffer and
/// NaN statistics.
#[must_use]
pub fn project_line_unchecked(
    samples: &[f64],
    distance_km: f64,
    camera: &Camera,
    calibration: &Calibration,
) -> RecordSectionLine {
    let degrees = kilometers_to_degrees_with_radius(distance_km, calibration.earth_radius);
    let summary = SampleSummary::from_sorted(&sort_ascending(samples))
        .unwrap_or(SampleSummary::UNDEFINED);
    let y_offset = y_offset_for_degrees(degrees, calibration);

    let count = samples.len();
    let mut positions = PositionBuffer::with_vertex_capacity(count);
    for (index, &value) in samples.iter().enumerate() {
        positions.push(
            x_for_index(index, count, camera),
            remap_y(value, &summary, y_offset, calibration),
            0.0,
        );
    }

    RecordSectionLine {
        positions,
        degrees,
        y_offset,
        summary,
        corrected_min: remap_y(summary.min, &summary, y_offset, calibration),
        corrected_median: remap_y(summary.median, &summary, y_offset, calibration),
        corrected_max: remap_y(summary.max, &summary, y_offset, calibration),
    }
}

/// Project `samples` after checking that the result will be finite.
///
/// Fails with [`InvalidInput`] for an empty or single-sample waveform, a
/// constant waveform, a non-finite sample, a negative or non-finite
/// distance, non-finite camera parameters or an unusable calibration.
/// Finite input whose projection still overflows is rejected as well.
pub fn project_line(
    samples: &[f64],
    distance_km: f64,
    camera: &Camera,
    calibration: &Calibration,
) -> ProjectResult<RecordSectionLine> {
    validate(samples, distance_km, camera, calibration)?;
    let line = project_line_unchecked(samples, distance_km, camera, calibration);
    if let Some(vertex) = line
        .positions
        .as_vertices()
        .iter()
        .position(|v| !v.is_finite())
    {
        return Err(InvalidInput::NonFiniteOutput { vertex }.into());
    }
    Ok(line)
}

/// Build the vertex buffer for one record section line with the default calibration.
///
/// Input is not validated; see [`project_line_unchecked`].
#[must_use]
pub fn create_record_section_position_buffer(params: &LineParams<'_>) -> PositionBuffer {
    project_line_unchecked(
        params.data,
        params.distance,
        &params.camera(),
        &Calibration::default(),
    )
    .positions
}

#[allow(clippy::float_cmp)]
fn validate(
    samples: &[f64],
    distance_km: f64,
    camera: &Camera,
    calibration: &Calibration,
) -> Result<(), InvalidInput> {
    if samples.is_empty() {
        return Err(InvalidInput::Empty);
    }
    if let Some((index, &value)) = samples.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(InvalidInput::NonFiniteSample { index, value });
    }
    if samples.len() < 2 {
        return Err(InvalidInput::TooFewSamples {
            count: samples.len(),
        });
    }
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(InvalidInput::Distance(distance_km));
    }
    if !camera.left.is_finite() || !camera.range.is_finite() {
        return Err(InvalidInput::Camera {
            left: camera.left,
            range: camera.range,
        });
    }
    let Calibration {
        earth_radius,
        canvas_height,
        waveform_height,
    } = *calibration;
    if !(earth_radius.is_finite() && earth_radius > 0.0)
        || !canvas_height.is_finite()
        || !waveform_height.is_finite()
    {
        return Err(InvalidInput::Calibration {
            earth_radius,
            canvas_height,
            waveform_height,
        });
    }

    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });
    if min == max {
        return Err(InvalidInput::ZeroRange { value: min });
    }
    if !(max - min).is_finite() {
        return Err(InvalidInput::RangeOverflow { min, max });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
mod tests {
    use super::*;
    use crate::{EARTH_RADIUS, LOGICAL_CANVAS_HEIGHT, LOGICAL_WAVEFORM_HEIGHT, ProjectError};
    use proptest::prelude::*;

    fn xs(line: &RecordSectionLine) -> Vec<f32> {
        line.positions.as_vertices().iter().map(|v| v.x).collect()
    }

    fn ys(line: &RecordSectionLine) -> Vec<f32> {
        line.positions.as_vertices().iter().map(|v| v.y).collect()
    }

    #[test]
    fn five_sample_example() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let buffer = create_record_section_position_buffer(&LineParams {
            data: &data,
            distance: 0.0,
            camera_x_range: 100.0,
            default_camera_left: 0.0,
        });

        assert_eq!(
            buffer.as_slice(),
            &[
                0.0, 35_600.0, 0.0, //
                25.0, 35_800.0, 0.0, //
                50.0, 36_000.0, 0.0, //
                75.0, 36_200.0, 0.0, //
                100.0, 36_400.0, 0.0,
            ]
        );
    }

    #[test]
    fn example_statistics() {
        let line = project_line(
            &[5.0, 1.0, 3.0, 2.0, 4.0],
            0.0,
            &Camera::new(0.0, 100.0),
            &Calibration::default(),
        )
        .unwrap();

        assert_eq!(line.degrees, 0.0);
        assert_eq!(line.y_offset, LOGICAL_CANVAS_HEIGHT);
        assert_eq!(line.summary.min, 1.0);
        assert_eq!(line.summary.median, 3.0);
        assert_eq!(line.summary.max, 5.0);
        assert_eq!(line.corrected_min, 35_600.0);
        assert_eq!(line.corrected_median, 36_000.0);
        assert_eq!(line.corrected_max, 36_400.0);
        // Unsorted input keeps its time order.
        assert_eq!(ys(&line), vec![36_400.0, 35_600.0, 36_000.0, 35_800.0, 36_200.0]);
    }

    #[test]
    fn antipodal_station_sits_at_bottom() {
        let km = std::f64::consts::PI * EARTH_RADIUS;
        let line = project_line_unchecked(
            &[0.0, 1.0, 2.0],
            km,
            &Camera::new(0.0, 1.0),
            &Calibration::default(),
        );
        assert!((line.degrees - 180.0).abs() < 1e-9);
        assert!(line.y_offset.abs() < 1e-6);
        assert!(line.corrected_median.abs() < 1e-6);
    }

    #[test]
    fn custom_calibration() {
        let calibration = Calibration {
            canvas_height: 1000.0,
            waveform_height: 10.0,
            earth_radius: EARTH_RADIUS,
        };
        let line =
            project_line(&[0.0, 4.0, 2.0], 0.0, &Camera::new(0.0, 2.0), &calibration).unwrap();
        assert_eq!(ys(&line), vec![995.0, 1005.0, 1000.0]);
    }

    #[test]
    fn does_not_mutate_input() {
        let samples = vec![3.0, 1.0, 2.0];
        let _ = project_line_unchecked(&samples, 10.0, &Camera::new(0.0, 1.0), &Calibration::default());
        assert_eq!(samples, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn constant_waveform_is_not_finite_when_unchecked() {
        let line = project_line_unchecked(
            &[2.0, 2.0, 2.0, 2.0],
            100.0,
            &Camera::new(0.0, 30.0),
            &Calibration::default(),
        );
        assert_eq!(line.positions.as_slice().len(), 12);
        assert!(!line.is_finite());
        assert!(ys(&line).iter().all(|y| !y.is_finite()));
        // X coordinates do not depend on the range.
        assert_eq!(xs(&line), vec![0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn single_sample_is_not_finite_when_unchecked() {
        let line = project_line_unchecked(
            &[1.0],
            0.0,
            &Camera::new(0.0, 100.0),
            &Calibration::default(),
        );
        assert_eq!(line.vertex_count(), 1);
        assert!(xs(&line)[0].is_nan());
        assert!(ys(&line)[0].is_nan());
    }

    #[test]
    fn empty_waveform_is_empty_when_unchecked() {
        let line = project_line_unchecked(&[], 0.0, &Camera::new(0.0, 100.0), &Calibration::default());
        assert!(line.positions.is_empty());
        assert!(line.corrected_median.is_nan());
    }

    #[test]
    fn rejects_degenerate_input() {
        let camera = Camera::new(0.0, 100.0);
        let calibration = Calibration::default();
        let check = |samples: &[f64], distance: f64, camera: &Camera| {
            project_line(samples, distance, camera, &calibration).unwrap_err()
        };

        assert_eq!(check(&[], 0.0, &camera), ProjectError::InvalidInput(InvalidInput::Empty));
        assert_eq!(
            check(&[1.0], 0.0, &camera),
            ProjectError::from(InvalidInput::TooFewSamples { count: 1 })
        );
        assert_eq!(
            check(&[4.0, 4.0, 4.0], 0.0, &camera),
            ProjectError::from(InvalidInput::ZeroRange { value: 4.0 })
        );
        assert_eq!(
            check(&[1.0, f64::INFINITY, 2.0], 0.0, &camera),
            ProjectError::from(InvalidInput::NonFiniteSample {
                index: 1,
                value: f64::INFINITY
            })
        );
        assert_eq!(
            check(&[1.0, 2.0], -1.0, &camera),
            ProjectError::from(InvalidInput::Distance(-1.0))
        );
        assert!(matches!(
            check(&[1.0, 2.0], 0.0, &Camera::new(f64::NAN, 1.0)),
            ProjectError::InvalidInput(InvalidInput::Camera { .. })
        ));
        assert!(matches!(
            check(&[1.0, f64::NAN], 0.0, &camera),
            ProjectError::InvalidInput(InvalidInput::NonFiniteSample { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_unusable_calibration() {
        let calibration = Calibration {
            earth_radius: 0.0,
            ..Calibration::default()
        };
        let err = project_line(&[1.0, 2.0, 3.0], 10.0, &Camera::new(0.0, 100.0), &calibration)
            .unwrap_err();
        assert!(matches!(
            err,
            ProjectError::InvalidInput(InvalidInput::Calibration { earth_radius, .. })
                if earth_radius == 0.0
        ));

        let calibration = Calibration {
            waveform_height: f64::NAN,
            ..Calibration::default()
        };
        assert!(matches!(
            project_line(&[1.0, 2.0], 0.0, &Camera::new(0.0, 1.0), &calibration),
            Err(ProjectError::InvalidInput(InvalidInput::Calibration { .. }))
        ));
    }

    #[test]
    fn rejects_overflowing_sample_range() {
        let err = project_line(
            &[-1e308, 1e308],
            0.0,
            &Camera::new(0.0, 1.0),
            &Calibration::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ProjectError::from(InvalidInput::RangeOverflow {
                min: -1e308,
                max: 1e308
            })
        );
    }

    #[test]
    fn rejects_coordinates_beyond_f32() {
        let err = project_line(
            &[1.0, 2.0],
            0.0,
            &Camera::new(0.0, 1e300),
            &Calibration::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ProjectError::from(InvalidInput::NonFiniteOutput { vertex: 1 })
        );
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = ProjectError::from(InvalidInput::TooFewSamples { count: 1 });
        assert_eq!(
            err.to_string(),
            "invalid input: waveform has 1 sample(s), at least 2 are required"
        );
    }

    fn waveform() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-1.0e6..1.0e6_f64, 2..200)
    }

    proptest! {
        #[test]
        fn buffer_has_three_floats_per_sample(
            samples in waveform(),
            distance in 0.0..2.0e7_f64,
            left in -1.0e4..1.0e4_f64,
            range in 0.0..1.0e5_f64,
        ) {
            let camera = Camera::new(left, range);
            let line = project_line_unchecked(&samples, distance, &camera, &Calibration::default());
            let floats = line.positions.as_slice();

            prop_assert_eq!(floats.len(), 3 * samples.len());
            prop_assert!(floats.chunks_exact(3).all(|v| v[2] == 0.0));
        }

        #[test]
        fn x_spans_camera_in_order(
            samples in waveform(),
            left in -1.0e4..1.0e4_f64,
            range in 0.0..1.0e5_f64,
        ) {
            let camera = Camera::new(left, range);
            let line = project_line_unchecked(&samples, 0.0, &camera, &Calibration::default());
            let xs = xs(&line);

            prop_assert!(xs.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(xs[0], left as f32);
            let last = f64::from(xs[xs.len() - 1]);
            prop_assert!((last - camera.right()).abs() <= 1e-5 * (left.abs() + range.abs() + 1.0));
        }

        #[test]
        fn statistics_follow_the_y_formula(
            samples in waveform(),
            distance in 0.0..2.0e7_f64,
        ) {
            let summary = SampleSummary::of(&samples).unwrap();
            prop_assume!(summary.range() > 0.0);

            let calibration = Calibration::default();
            let line = project_line(&samples, distance, &Camera::new(0.0, 1.0), &calibration).unwrap();

            prop_assert_eq!(line.corrected_median, line.y_offset);
            prop_assert_eq!(
                line.corrected_min,
                remap_y(summary.min, &summary, line.y_offset, &calibration)
            );
            prop_assert_eq!(
                line.corrected_max,
                remap_y(summary.max, &summary, line.y_offset, &calibration)
            );
            let span = line.corrected_max - line.corrected_min;
            prop_assert!((span - LOGICAL_WAVEFORM_HEIGHT).abs() < 1e-6);

            let ys = ys(&line);
            for (value, y) in samples.iter().zip(&ys) {
                if *value == summary.median {
                    prop_assert_eq!(*y, line.y_offset as f32);
                }
            }
        }
    }
}
