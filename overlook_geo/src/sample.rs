// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input samples and resolved positions.

use kurbo::Point;

/// Anything that carries an optional latitude and longitude, in decimal degrees.
///
/// Search hits, map markers, and facet buckets rarely agree on how they store
/// coordinates, so the math in this crate only asks for this view of them.
/// A missing coordinate is treated as `0.0` by every computation.
pub trait Located {
    /// Latitude in decimal degrees, if known.
    fn latitude(&self) -> Option<f64>;
    /// Longitude in decimal degrees, if known.
    fn longitude(&self) -> Option<f64>;

    /// Resolve this value to a concrete position, reading missing (or NaN)
    /// coordinates as `0.0`.
    fn position(&self) -> GeoPosition {
        GeoPosition {
            lon: coordinate(self.longitude()),
            lat: coordinate(self.latitude()),
        }
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn latitude(&self) -> Option<f64> {
        (**self).latitude()
    }

    fn longitude(&self) -> Option<f64> {
        (**self).longitude()
    }
}

/// A single geographic sample whose coordinates may be partially known.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoSample {
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,
}

impl GeoSample {
    /// Creates a sample with both coordinates known.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }
}

impl Located for GeoSample {
    fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    fn longitude(&self) -> Option<f64> {
        self.longitude
    }
}

/// A resolved position, longitude first to match map widget conventions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPosition {
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Latitude in decimal degrees.
    pub lat: f64,
}

impl GeoPosition {
    /// The origin, where the equator meets the prime meridian.
    pub const ORIGIN: Self = Self { lon: 0.0, lat: 0.0 };

    /// Creates a position from a longitude and latitude.
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// This position as a `kurbo` point, with `x` = longitude and `y` = latitude.
    #[must_use]
    pub const fn to_point(self) -> Point {
        Point::new(self.lon, self.lat)
    }
}

impl Located for GeoPosition {
    fn latitude(&self) -> Option<f64> {
        Some(self.lat)
    }

    fn longitude(&self) -> Option<f64> {
        Some(self.lon)
    }
}

impl From<Point> for GeoPosition {
    fn from(pt: Point) -> Self {
        Self::new(pt.x, pt.y)
    }
}

impl From<GeoPosition> for Point {
    fn from(pos: GeoPosition) -> Self {
        pos.to_point()
    }
}

fn coordinate(value: Option<f64>) -> f64 {
    value.filter(|v| !v.is_nan()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_coordinates_resolve_to_zero() {
        let sample = GeoSample {
            latitude: Some(12.5),
            longitude: None,
        };
        assert_eq!(sample.position(), GeoPosition::new(0.0, 12.5));
        assert_eq!(GeoSample::default().position(), GeoPosition::ORIGIN);
    }

    #[test]
    fn nan_coordinates_resolve_to_zero() {
        let sample = GeoSample::new(f64::NAN, 4.0);
        assert_eq!(sample.position(), GeoPosition::new(4.0, 0.0));
    }

    #[test]
    fn point_conversion_keeps_longitude_on_x() {
        let pos = GeoPosition::new(72.8, 18.9);
        let pt: Point = pos.into();
        assert_eq!(pt, Point::new(72.8, 18.9));
        assert_eq!(GeoPosition::from(pt), pos);
    }
}
