// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A fixed celestial coordinate.

use hifitime::Epoch;

use super::location::Location;
use crate::angle::Angle;

/// A right ascension and declination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyLoc {
    pub ra: Angle,
    pub dec: Angle,
}

impl SkyLoc {
    pub fn new(ra: Angle, dec: Angle) -> SkyLoc {
        SkyLoc { ra, dec }
    }

    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> SkyLoc {
        SkyLoc {
            ra: Angle::from_degrees(ra_deg),
            dec: Angle::from_degrees(dec_deg),
        }
    }

    /// The sky position that is at the given horizontal direction, as seen from
    /// `location` at `epoch`.
    pub fn from_horizontal(
        location: &Location,
        epoch: Epoch,
        elevation: Angle,
        azimuth: Angle,
    ) -> SkyLoc {
        let (ra, dec) = location.horizontal_to_equatorial(epoch, elevation, azimuth);
        SkyLoc { ra, dec }
    }

    /// (Elevation, azimuth) of this sky position.
    pub fn to_horizontal(self, location: &Location, epoch: Epoch) -> (Angle, Angle) {
        location.equatorial_to_horizontal(epoch, self.ra, self.dec)
    }
}

impl std::fmt::Display for SkyLoc {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({:.4}°, {:.4}°)",
            self.ra.to_degrees(),
            self.dec.to_degrees()
        )
    }
}

#[cfg(test)]
use approx::AbsDiffEq;

#[cfg(test)]
impl AbsDiffEq for SkyLoc {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        Angle::abs_diff_eq(&self.ra, &other.ra, epsilon)
            && Angle::abs_diff_eq(&self.dec, &other.dec, epsilon)
    }
}
