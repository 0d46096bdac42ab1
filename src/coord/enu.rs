// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle East, North and Up coordinates (antenna offsets from the array
reference point).
*/

use serde::{Deserialize, Serialize};

use super::xyz::XyzLocal;
use crate::angle::Angle;

/// East, North and Up coordinates of an antenna, relative to the array
/// reference point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
#[allow(clippy::upper_case_acronyms)]
pub struct ENU {
    /// East \[metres\]
    pub e: f64,
    /// North \[metres\]
    pub n: f64,
    /// Up \[metres\]
    pub u: f64,
}

impl ENU {
    pub fn new(e: f64, n: f64, u: f64) -> ENU {
        ENU { e, n, u }
    }

    /// Convert coords in local topocentric East, North, Up units to 'local'
    /// XYZ units. Local means Z points north, X points through the equator from
    /// the geocenter along the local meridian and Y is East. This is like the
    /// absolute system except that zero longitude is now the local meridian
    /// rather than prime meridian.
    ///
    /// Taken from the third edition of Interferometry and Synthesis in Radio
    /// Astronomy, chapter 4: Geometrical Relationships, Polarimetry, and the
    /// Measurement Equation.
    pub fn to_xyz(self, latitude: Angle) -> XyzLocal {
        let (s_lat, c_lat) = latitude.sin_cos();
        self.to_xyz_inner(s_lat, c_lat)
    }

    /// Same as [`ENU::to_xyz`], but the caller supplies the sine and cosine of
    /// the latitude so they aren't needlessly recalculated in loops.
    pub fn to_xyz_inner(self, s_lat: f64, c_lat: f64) -> XyzLocal {
        XyzLocal {
            x: -self.n * s_lat + self.u * c_lat,
            y: self.e,
            z: self.n * c_lat + self.u * s_lat,
        }
    }

    /// The dot product of this offset with another ENU vector.
    pub fn dot(self, other: ENU) -> f64 {
        self.e * other.e + self.n * other.n + self.u * other.u
    }

    /// The unit vector pointing toward a horizontal direction. Azimuth is
    /// measured from North toward East.
    pub fn unit_toward(elevation: Angle, azimuth: Angle) -> ENU {
        let (s_el, c_el) = elevation.sin_cos();
        let (s_az, c_az) = azimuth.sin_cos();
        ENU {
            e: c_el * s_az,
            n: c_el * c_az,
            u: s_el,
        }
    }
}

impl std::ops::Sub for ENU {
    type Output = ENU;

    fn sub(self, rhs: ENU) -> ENU {
        ENU {
            e: self.e - rhs.e,
            n: self.n - rhs.n,
            u: self.u - rhs.u,
        }
    }
}

impl From<[f64; 3]> for ENU {
    fn from([e, n, u]: [f64; 3]) -> ENU {
        ENU { e, n, u }
    }
}

impl From<ENU> for [f64; 3] {
    fn from(enu: ENU) -> [f64; 3] {
        [enu.e, enu.n, enu.u]
    }
}

#[cfg(test)]
use approx::AbsDiffEq;

#[cfg(test)]
impl AbsDiffEq for ENU {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.e, &other.e, epsilon)
            && f64::abs_diff_eq(&self.n, &other.n, epsilon)
            && f64::abs_diff_eq(&self.u, &other.u, epsilon)
    }
}
