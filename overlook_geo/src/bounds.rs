// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounds over longitude/latitude.

use kurbo::Rect;

use crate::{GeoPosition, Located};

/// An axis-aligned box in longitude/latitude space.
///
/// Bounds are never wrapped across the antimeridian: a box around samples at
/// longitudes `179` and `-179` spans almost the whole globe.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoBounds {
    /// Western edge, in degrees.
    pub min_lon: f64,
    /// Southern edge, in degrees.
    pub min_lat: f64,
    /// Eastern edge, in degrees.
    pub max_lon: f64,
    /// Northern edge, in degrees.
    pub max_lat: f64,
}

impl GeoBounds {
    /// The whole earth: `{-180, -90, 180, 90}`.
    pub const WORLD: Self = Self {
        min_lon: -180.0,
        min_lat: -90.0,
        max_lon: 180.0,
        max_lat: 90.0,
    };

    /// Creates bounds from its edges.
    #[must_use]
    pub const fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Degenerate bounds covering a single position.
    #[must_use]
    pub const fn from_position(pos: GeoPosition) -> Self {
        Self::new(pos.lon, pos.lat, pos.lon, pos.lat)
    }

    /// Grow these bounds so they include `pos`.
    #[must_use]
    pub fn including(self, pos: GeoPosition) -> Self {
        Self {
            min_lon: self.min_lon.min(pos.lon),
            min_lat: self.min_lat.min(pos.lat),
            max_lon: self.max_lon.max(pos.lon),
            max_lat: self.max_lat.max(pos.lat),
        }
    }

    /// The midpoint of the box (a planar center, not a spherical one).
    #[must_use]
    pub fn center(&self) -> GeoPosition {
        GeoPosition::new(
            (self.min_lon + self.max_lon) * 0.5,
            (self.min_lat + self.max_lat) * 0.5,
        )
    }

    /// Whether `pos` lies inside the box, edges included.
    #[must_use]
    pub fn contains(&self, pos: GeoPosition) -> bool {
        pos.lon >= self.min_lon
            && pos.lon <= self.max_lon
            && pos.lat >= self.min_lat
            && pos.lat <= self.max_lat
    }

    /// The `[[min_lon, min_lat], [max_lon, max_lat]]` corner pair most map
    /// widgets accept for "fit to bounds".
    #[must_use]
    pub const fn corners(&self) -> [[f64; 2]; 2] {
        [[self.min_lon, self.min_lat], [self.max_lon, self.max_lat]]
    }

    /// These bounds as a `kurbo` rectangle (`x` = longitude, `y` = latitude).
    #[must_use]
    pub const fn to_rect(&self) -> Rect {
        Rect::new(self.min_lon, self.min_lat, self.max_lon, self.max_lat)
    }
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self::WORLD
    }
}

impl From<GeoBounds> for Rect {
    fn from(bounds: GeoBounds) -> Self {
        bounds.to_rect()
    }
}

/// Compute the tight bounds around `samples`.
///
/// Returns [`GeoBounds::WORLD`] when there are no samples. Missing coordinates
/// count as `0.0`, so a sample with no longitude pulls the box toward the
/// prime meridian.
///
/// ```rust
/// use overlook_geo::{GeoBounds, GeoSample, compute_bounds};
///
/// assert_eq!(compute_bounds::<GeoSample>(&[]), GeoBounds::WORLD);
///
/// let bounds = compute_bounds(&[GeoSample::new(10.0, 20.0), GeoSample::new(-5.0, 30.0)]);
/// assert_eq!(bounds, GeoBounds::new(20.0, -5.0, 30.0, 10.0));
/// ```
#[must_use]
pub fn compute_bounds<S: Located>(samples: &[S]) -> GeoBounds {
    let mut positions = samples.iter().map(Located::position);
    let Some(first) = positions.next() else {
        log::trace!("no samples, using world bounds");
        return GeoBounds::WORLD;
    };
    positions.fold(GeoBounds::from_position(first), GeoBounds::including)
}
