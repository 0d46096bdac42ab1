// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A geodetic location on the Earth, and the horizontal <-> equatorial
//! transforms that depend on it.

use hifitime::Epoch;

use super::xyz::XyzGeocentric;
use crate::{
    angle::Angle,
    constants::{DUNEDIN_HEIGHT_M, DUNEDIN_LAT_DEG, DUNEDIN_LONG_DEG, WGS84_A, WGS84_F},
    time,
};

/// A geodetic latitude, (east) longitude and height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    pub latitude: Angle,
    pub longitude: Angle,
    /// Height above the WGS84 ellipsoid \[metres\]
    pub height_metres: f64,
}

impl Location {
    pub fn new(latitude: Angle, longitude: Angle, height_metres: f64) -> Location {
        Location {
            latitude,
            longitude,
            height_metres,
        }
    }

    /// The TART array site in Dunedin, New Zealand.
    pub fn dunedin() -> Location {
        Location {
            latitude: Angle::from_degrees(DUNEDIN_LAT_DEG),
            longitude: Angle::from_degrees(DUNEDIN_LONG_DEG),
            height_metres: DUNEDIN_HEIGHT_M,
        }
    }

    /// Earth-Centered-Earth-Fixed coordinates of this location on the WGS84
    /// ellipsoid.
    pub fn ecef(&self) -> XyzGeocentric {
        let e2 = WGS84_F * (2.0 - WGS84_F);
        let (s_lat, c_lat) = self.latitude.sin_cos();
        let (s_long, c_long) = self.longitude.sin_cos();
        // Prime vertical radius of curvature.
        let n = WGS84_A / (1.0 - e2 * s_lat * s_lat).sqrt();
        XyzGeocentric {
            x: (n + self.height_metres) * c_lat * c_long,
            y: (n + self.height_metres) * c_lat * s_long,
            z: (n * (1.0 - e2) + self.height_metres) * s_lat,
        }
    }

    /// Greenwich sidereal time. This doesn't depend on the location, but lives
    /// here so callers holding a [`Location`] have everything in one place.
    pub fn gst(&self, epoch: Epoch) -> Angle {
        time::gst(epoch)
    }

    /// Local sidereal time, wrapped to [0, 2π).
    pub fn lst(&self, epoch: Epoch) -> Angle {
        (time::gst(epoch) + self.longitude).wrap()
    }

    /// The hour angle of a right ascension at this location.
    pub fn hour_angle(&self, epoch: Epoch, ra: Angle) -> Angle {
        self.lst(epoch) - ra
    }

    /// Convert a horizontal direction (elevation, azimuth) to equatorial
    /// coordinates (right ascension, declination). The right ascension is
    /// wrapped to [0, 2π).
    pub fn horizontal_to_equatorial(
        &self,
        epoch: Epoch,
        elevation: Angle,
        azimuth: Angle,
    ) -> (Angle, Angle) {
        let (ha, dec) = self.horizontal_to_hadec(elevation, azimuth);
        let ra = (self.lst(epoch) - ha).wrap();
        (ra, dec)
    }

    /// Convert equatorial coordinates (right ascension, declination) to a
    /// horizontal direction (elevation, azimuth). The azimuth is wrapped to [0,
    /// 2π).
    pub fn equatorial_to_horizontal(&self, epoch: Epoch, ra: Angle, dec: Angle) -> (Angle, Angle) {
        self.hadec_to_horizontal(self.hour_angle(epoch, ra), dec)
    }

    /// Horizontal to (hour angle, declination) using the local latitude.
    pub(crate) fn horizontal_to_hadec(&self, elevation: Angle, azimuth: Angle) -> (Angle, Angle) {
        let (s_lat, c_lat) = self.latitude.sin_cos();
        let (s_el, c_el) = elevation.sin_cos();
        let (s_az, c_az) = azimuth.sin_cos();

        let y = -c_el * s_az;
        let x = c_lat * s_el - s_lat * c_el * c_az;
        let s_dec = s_lat * s_el + c_lat * c_el * c_az;
        (
            Angle::from_radians(y.atan2(x)),
            Angle::from_radians(s_dec.atan2(x.hypot(y))),
        )
    }

    /// (Hour angle, declination) to horizontal using the local latitude.
    pub(crate) fn hadec_to_horizontal(&self, hour_angle: Angle, dec: Angle) -> (Angle, Angle) {
        let (s_lat, c_lat) = self.latitude.sin_cos();
        let (s_ha, c_ha) = hour_angle.sin_cos();
        let (s_dec, c_dec) = dec.sin_cos();

        let y = -c_dec * s_ha;
        let x = c_lat * s_dec - s_lat * c_dec * c_ha;
        let s_el = s_lat * s_dec + c_lat * c_dec * c_ha;
        (
            Angle::from_radians(s_el.atan2(x.hypot(y))),
            Angle::from_radians(y.atan2(x)).wrap(),
        )
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({:.4}°, {:.4}°, {:.2}m)",
            self.latitude.to_degrees(),
            self.longitude.to_degrees(),
            self.height_metres
        )
    }
}
