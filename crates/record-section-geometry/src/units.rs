//! Distance conversion.

use crate::{EARTH_RADIUS, HALF_CIRCLE_DEGREES};

/// Rudimentarily convert a distance in kilometers into degrees of arc.
///
/// Treats the distance as an arc on a sphere whose half circumference is
/// `π × EARTH_RADIUS`, so a distance of `π × 6_371_000` maps to 180 degrees.
#[must_use]
pub fn kilometers_to_degrees(km: f64) -> f64 {
    kilometers_to_degrees_with_radius(km, EARTH_RADIUS)
}

/// [`kilometers_to_degrees`] with an explicit radius constant.
#[must_use]
pub fn kilometers_to_degrees_with_radius(km: f64, radius: f64) -> f64 {
    (km / (std::f64::consts::PI * radius)) * HALF_CIRCLE_DEGREES
}
