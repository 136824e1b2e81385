// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spherical centroid of a set of positions.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::{GeoPosition, Located};

/// Below this length the averaged unit vector no longer has a meaningful direction.
const DEGENERATE_LEN: f64 = 1e-12;

/// Compute the mean direction of `samples` on the unit sphere.
///
/// - No samples: the origin `(0, 0)`.
/// - One sample: that sample's position, untouched by any trigonometry.
/// - Otherwise each sample becomes the unit vector
///   `(cos(lat)·cos(lon), cos(lat)·sin(lon), sin(lat))`, the vectors are
///   averaged, and the average is converted back with `atan2`.
///
/// Averaging vectors rather than angles keeps the result continuous across
/// the antimeridian and near the poles. Sample sets that cancel out (for
/// example two antipodal points) average to a vector of almost no length;
/// the result then is whatever `atan2` yields for it, which is `0` for an
/// exact zero.
///
/// ```rust
/// use overlook_geo::{GeoSample, compute_centroid};
///
/// let center = compute_centroid(&[GeoSample::new(0.0, 0.0), GeoSample::new(0.0, 90.0)]);
/// assert!((center.lon - 45.0).abs() < 1e-9);
/// assert!(center.lat.abs() < 1e-9);
/// ```
#[must_use]
pub fn compute_centroid<S: Located>(samples: &[S]) -> GeoPosition {
    match samples {
        [] => GeoPosition::ORIGIN,
        [only] => only.position(),
        _ => spherical_mean(samples),
    }
}

fn spherical_mean<S: Located>(samples: &[S]) -> GeoPosition {
    let (mut x, mut y, mut z) = (0.0_f64, 0.0_f64, 0.0_f64);
    for sample in samples {
        let pos = sample.position();
        let lat = pos.lat.to_radians();
        let lon = pos.lon.to_radians();
        x += lat.cos() * lon.cos();
        y += lat.cos() * lon.sin();
        z += lat.sin();
    }

    let total = samples.len() as f64;
    x /= total;
    y /= total;
    z /= total;

    let equatorial = (x * x + y * y).sqrt();
    if equatorial.max(z.abs()) < DEGENERATE_LEN {
        log::trace!(
            "centroid of {} samples is degenerate ({x:e}, {y:e}, {z:e})",
            samples.len()
        );
    }

    GeoPosition {
        lon: y.atan2(x).to_degrees(),
        lat: z.atan2(equatorial).to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoSample;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_input_yields_origin() {
        assert_eq!(compute_centroid::<GeoSample>(&[]), GeoPosition::ORIGIN);
    }

    #[test]
    fn single_sample_is_returned_exactly() {
        let sample = GeoSample::new(18.9753, 72.8258);
        assert_eq!(
            compute_centroid(&[sample]),
            GeoPosition::new(72.8258, 18.9753)
        );

        let partial = GeoSample {
            latitude: None,
            longitude: Some(-3.5),
        };
        assert_eq!(compute_centroid(&[partial]), GeoPosition::new(-3.5, 0.0));
    }

    #[test]
    fn quarter_turn_on_equator() {
        let center = compute_centroid(&[GeoSample::new(0.0, 0.0), GeoSample::new(0.0, 90.0)]);
        assert_abs_diff_eq!(center.lon, 45.0, epsilon = 1e-6);
        assert_abs_diff_eq!(center.lat, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn straddling_the_antimeridian_stays_on_it() {
        let center = compute_centroid(&[GeoSample::new(10.0, 179.0), GeoSample::new(10.0, -179.0)]);
        assert_abs_diff_eq!(center.lon.abs(), 180.0, epsilon = 1e-6);
        assert_abs_diff_eq!(center.lat, 10.0, epsilon = 1e-2);
    }

    #[test]
    fn points_near_a_pole_average_toward_it() {
        let samples = [
            GeoSample::new(80.0, 0.0),
            GeoSample::new(80.0, 90.0),
            GeoSample::new(80.0, 180.0),
            GeoSample::new(80.0, -90.0),
        ];
        let center = compute_centroid(&samples);
        assert_abs_diff_eq!(center.lat, 90.0, epsilon = 1e-6);
    }

    #[test]
    fn opposite_poles_cancel_to_origin() {
        let center = compute_centroid(&[GeoSample::new(90.0, 0.0), GeoSample::new(-90.0, 0.0)]);
        assert!(center.lon.is_finite() && center.lat.is_finite());
        assert_abs_diff_eq!(center.lon, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(center.lat, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn opposite_equatorial_points_cancel_to_origin() {
        let center = compute_centroid(&[GeoSample::new(0.0, 90.0), GeoSample::new(0.0, -90.0)]);
        assert_abs_diff_eq!(center.lon, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(center.lat, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn fully_cancelling_set_maps_to_origin() {
        // Both axis pairs cancel; only rounding noise from cos(±90°) is left.
        let samples = [
            GeoSample::new(0.0, 90.0),
            GeoSample::new(0.0, -90.0),
            GeoSample::new(90.0, 0.0),
            GeoSample::new(-90.0, 0.0),
        ];
        let center = compute_centroid(&samples);
        assert!(center.lon.is_finite() && center.lat.is_finite());
        assert_abs_diff_eq!(center.lon, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(center.lat, 0.0, epsilon = 1e-9);
    }
}
