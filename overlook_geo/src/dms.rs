// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Degrees/minutes/seconds labels.

use alloc::format;
use alloc::string::String;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// An unsigned angle split into whole degrees, minutes, and seconds.
///
/// Seconds are rounded to the nearest whole second and carried into minutes
/// (and minutes into degrees), so `seconds` and `minutes` are always below 60.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dms {
    /// Whole degrees, already floored. Kept as `f64` so angles of any
    /// magnitude keep their exact integral part.
    pub degrees: f64,
    /// Whole minutes, `0..60`.
    pub minutes: u8,
    /// Rounded seconds, `0..60`.
    pub seconds: u8,
}

impl Dms {
    /// Split the absolute value of `angle` (decimal degrees) into its parts.
    ///
    /// The sign is dropped; callers add a hemisphere letter instead.
    /// Non-finite input never panics: NaN reads as `0°0′`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "minutes and seconds are floored or rounded first and stay below 61"
    )]
    pub fn from_degrees(angle: f64) -> Self {
        let abs = if angle.is_nan() { 0.0 } else { angle.abs() };
        let whole = abs.floor();
        let minutes_fraction = abs - whole;
        let minutes_total = minutes_fraction * 60.0;
        let minutes_whole = minutes_total.floor();
        let seconds_fraction = minutes_total - minutes_whole;

        let mut degrees = whole;
        let mut minutes = minutes_whole as u8;
        let mut seconds = (seconds_fraction * 60.0).round() as u8;
        if seconds == 60 {
            seconds = 0;
            minutes += 1;
        }
        if minutes == 60 {
            minutes = 0;
            degrees += 1.0;
        }
        Self {
            degrees,
            minutes,
            seconds,
        }
    }
}

/// Renders `39°55′` or, when seconds are non-zero, `18°58′31″`.
impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{00B0}{}\u{2032}", self.degrees, self.minutes)?;
        if self.seconds > 0 {
            write!(f, "{}\u{2033}", self.seconds)?;
        }
        Ok(())
    }
}

/// Format the absolute value of `angle` as degrees, minutes, and seconds.
///
/// Seconds are left off when they round to zero.
///
/// ```rust
/// use overlook_geo::format_dms;
///
/// assert_eq!(format_dms(39.9167), "39°55′");
/// assert_eq!(format_dms(-18.9753), "18°58′31″");
/// ```
#[must_use]
pub fn format_dms(angle: f64) -> String {
    format!("{}", Dms::from_degrees(angle))
}

/// Format a latitude/longitude pair, such as `18°58′31″N 72°49′33″E`.
///
/// Latitude gets `N` or `S`, longitude `E` or `W`; a coordinate of exactly
/// zero gets no letter.
#[must_use]
pub fn format_lat_long(latitude: f64, longitude: f64) -> String {
    format!(
        "{}{} {}{}",
        Dms::from_degrees(latitude),
        hemisphere(latitude, "N", "S"),
        Dms::from_degrees(longitude),
        hemisphere(longitude, "E", "W"),
    )
}

fn hemisphere(value: f64, positive: &'static str, negative: &'static str) -> &'static str {
    if value > 0.0 {
        positive
    } else if value < 0.0 {
        negative
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_rounding_to_zero_are_omitted() {
        assert_eq!(format_dms(39.9167), "39°55′");
    }

    #[test]
    fn non_zero_seconds_are_shown() {
        assert_eq!(format_dms(18.9753), "18°58′31″");
        assert_eq!(format_dms(72.8258), "72°49′33″");
    }

    #[test]
    fn sign_is_dropped() {
        assert_eq!(format_dms(-33.8688), format_dms(33.8688));
        assert_eq!(format_dms(-33.8688), "33°52′8″");
    }

    #[test]
    fn seconds_carry_into_minutes() {
        // 0.3833° = 22′ 59.88″, which rounds up to a whole minute.
        assert_eq!(format_dms(116.3833), "116°23′");
    }

    #[test]
    fn minutes_carry_into_degrees() {
        assert_eq!(
            Dms::from_degrees(10.99999),
            Dms {
                degrees: 11.0,
                minutes: 0,
                seconds: 0
            }
        );
        assert_eq!(format_dms(10.99999), "11°0′");
    }

    #[test]
    fn large_angles_keep_every_degree() {
        assert_eq!(format_dms(5_000_000_000.5), "5000000000°30′");
        assert_eq!(format_dms(-1e20), "100000000000000000000°0′");
    }

    #[test]
    fn zero_and_nan_angles() {
        assert_eq!(format_dms(0.0), "0°0′");
        assert_eq!(format_dms(f64::NAN), "0°0′");
    }

    #[test]
    fn lat_long_hemispheres() {
        assert_eq!(format_lat_long(18.9753, 72.8258), "18°58′31″N 72°49′33″E");
        assert_eq!(format_lat_long(39.9167, 116.3833), "39°55′N 116°23′E");
        assert_eq!(
            format_lat_long(-33.8688, -151.2093),
            "33°52′8″S 151°12′33″W"
        );
    }

    #[test]
    fn zero_coordinates_have_no_hemisphere() {
        assert_eq!(format_lat_long(0.0, 0.0), "0°0′ 0°0′");
        assert_eq!(format_lat_long(0.0, -1.5), "0°0′ 1°30′W");
    }
}
