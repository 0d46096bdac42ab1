// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Per-antenna geometric delays and baseline UVWs.
//!
//! Antennas are plain ENU offsets; the array [`Location`] is always passed in
//! by the caller.
//!
//! Sign conventions: the delay of an antenna is the extra time a plane wave
//! from a direction takes to reach it compared to the array reference point,
//! so an antenna closer to the source has a more negative delay. A baseline
//! (antenna 0, antenna 1) has UVW such that `w / c` is exactly that pairwise
//! delay, `delay(a1) - delay(a0)`.

use hifitime::Epoch;

use crate::{
    angle::Angle,
    constants::VEL_C,
    coord::{Location, ENU, UVW},
};

/// An antenna, described by its offset from the array reference point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Antenna {
    pub enu: ENU,
}

impl Antenna {
    pub fn new(enu: ENU) -> Antenna {
        Antenna { enu }
    }

    /// The geometric delay \[seconds\] of a plane wave arriving from
    /// (`elevation`, `azimuth`) at this antenna, relative to the array
    /// reference point.
    pub fn geo_delay_horizontal(&self, elevation: Angle, azimuth: Angle) -> f64 {
        -self.enu.dot(ENU::unit_toward(elevation, azimuth)) / VEL_C
    }
}

impl From<ENU> for Antenna {
    fn from(enu: ENU) -> Antenna {
        Antenna { enu }
    }
}

/// The geometric delay of `a1` relative to `a0` \[seconds\]. Swapping the
/// antennas negates the result exactly.
pub fn geo_delay_horizontal(a0: &Antenna, a1: &Antenna, elevation: Angle, azimuth: Angle) -> f64 {
    a1.geo_delay_horizontal(elevation, azimuth) - a0.geo_delay_horizontal(elevation, azimuth)
}

/// The UVW \[metres\] of the baseline formed by `a0` and `a1` toward (`ra`,
/// `dec`), as seen from `location` at `epoch`. `w` is `VEL_C` times
/// [`geo_delay_horizontal`] for the same direction; `v` points to increasing
/// declination and `u` to increasing hour angle.
///
/// At the poles of the (u,v,w) basis nothing is singular: `u` is 0 when the
/// baseline has no east-west component along the line of sight.
pub fn get_uvw(
    location: &Location,
    a0: &Antenna,
    a1: &Antenna,
    epoch: Epoch,
    ra: Angle,
    dec: Angle,
) -> UVW {
    let hour_angle = location.hour_angle(epoch, ra);
    let (s_lat, c_lat) = location.latitude.sin_cos();
    let (s_ha, c_ha) = hour_angle.sin_cos();
    let (s_dec, c_dec) = dec.sin_cos();
    // The delay convention is the negative of the textbook baseline
    // convention (a1 - a0), i.e. the textbook UVW of a0 - a1.
    let xyz = (a0.enu - a1.enu).to_xyz_inner(s_lat, c_lat);
    UVW::from_xyz_inner(xyz, s_ha, c_ha, s_dec, c_dec)
}

/// The `w` \[metres\] of every antenna (measured from the array reference
/// point) toward a phase centre. The `w` of a baseline (i, j) is `ws[i] -
/// ws[j]`.
pub(crate) fn antenna_ws(
    location: &Location,
    antennas: &[ENU],
    epoch: Epoch,
    ra: Angle,
    dec: Angle,
) -> Vec<f64> {
    let hour_angle = location.hour_angle(epoch, ra);
    let (s_lat, c_lat) = location.latitude.sin_cos();
    let (s_ha, c_ha) = hour_angle.sin_cos();
    let (s_dec, c_dec) = dec.sin_cos();
    antennas
        .iter()
        .map(|enu| {
            let xyz = enu.to_xyz_inner(s_lat, c_lat);
            UVW::from_xyz_inner(xyz, s_ha, c_ha, s_dec, c_dec).w
        })
        .collect()
}
