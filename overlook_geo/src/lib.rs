// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Geo: position math for map views of search results.
//!
//! Before a host hands a set of geotagged results to a map widget it needs to
//! know where to point the camera and how to label coordinates. This crate
//! covers exactly that:
//!
//! - [`compute_bounds`]: the tight longitude/latitude box around a set of
//!   samples, or [`GeoBounds::WORLD`] when there are none.
//! - [`compute_centroid`]: the spherical mean of a set of samples, computed
//!   by averaging unit vectors so it behaves across the antimeridian.
//! - [`format_dms`] and [`format_lat_long`]: human-readable
//!   degrees/minutes/seconds labels such as `18°58′31″N 72°49′33″E`.
//!
//! Inputs are anything implementing [`Located`]; a missing coordinate reads
//! as `0.0`. Nothing in this crate fails: empty and degenerate inputs all
//! have defined results.
//!
//! ## Example
//!
//! ```rust
//! use overlook_geo::{GeoSample, compute_bounds, compute_centroid, format_lat_long};
//!
//! let hits = [GeoSample::new(0.0, 0.0), GeoSample::new(0.0, 90.0)];
//!
//! let bounds = compute_bounds(&hits);
//! assert_eq!(bounds.corners(), [[0.0, 0.0], [90.0, 0.0]]);
//!
//! let center = compute_centroid(&hits);
//! assert!((center.lon - 45.0).abs() < 1e-9);
//!
//! assert_eq!(format_lat_long(18.9753, 72.8258), "18°58′31″N 72°49′33″E");
//! ```
//!
//! Positions and bounds convert to [`kurbo::Point`] and [`kurbo::Rect`]
//! (`x` = longitude, `y` = latitude) so they can feed the same geometry code
//! as the rest of a view.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`GeoSample`],
//!   [`GeoPosition`], and [`GeoBounds`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

// Float math (`floor`, `sin`, `atan2`, ...) comes from `std` when it is linked
// and from `kurbo`'s libm-backed `FloatFuncs` otherwise.
#[cfg(feature = "std")]
extern crate std;

mod bounds;
mod centroid;
mod dms;
mod sample;

pub use bounds::{GeoBounds, compute_bounds};
pub use centroid::compute_centroid;
pub use dms::{Dms, format_dms, format_lat_long};
pub use sample::{GeoPosition, GeoSample, Located};
